// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use parsing::{Command, LogRecord};


const SMALL_DIR_MAX_SIZE: usize = 100_000;
const TOTAL_DISK_SPACE: usize = 70_000_000;
const NEEDED_FREE_SPACE: usize = 30_000_000;

const ROOT: &str = "/";


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Frame<'s> {
	name: &'s str,
	size: usize,
}

/// The path from the root down to the currently open directory, plus a
/// running sum of popped sizes no greater than `max_tracked_size`.
struct DirectoryStack<'s> {
	frames: Vec<Frame<'s>>,
	max_tracked_size: Option<usize>,
	accumulator: usize,
}

impl<'s> DirectoryStack<'s> {
	fn new(max_tracked_size: Option<usize>) -> Self {
		DirectoryStack { frames: vec![], max_tracked_size, accumulator: 0 }
	}

	fn len(&self) -> usize {
		self.frames.len()
	}

	fn accumulator(&self) -> usize {
		self.accumulator
	}

	/// Opens `name` as a child of the current directory.
	fn push(&mut self, name: &'s str, size: usize) {
		self.frames.push(Frame { name, size });
	}

	/// Adds `delta` to the size of the currently open directory.
	fn update_size(&mut self, delta: usize) {
		self.frames.last_mut()
			.expect("updated the size with no open directory")
			.size += delta;
	}

	/// Closes the current directory, returning its full path and size. The
	/// size is propagated into the parent (the new top) and added to the
	/// accumulator iff it does not exceed `max_tracked_size`.
	fn pop(&mut self) -> (String, usize) {
		// Join before removal, while the popped frame is still part of the path.
		let path = self.path();
		let Frame { size, .. } = self.frames.pop()
			.expect("popped an empty directory stack");
		if !self.frames.is_empty() { self.update_size(size) }
		if self.max_tracked_size.map_or(true, |max| size <= max) {
			self.accumulator += size
		}
		(path, size)
	}

	fn path(&self) -> String {
		self.frames.iter().fold(String::new(), |mut path, frame| {
			if !(path.is_empty() || path.ends_with('/')) { path.push('/') }
			path.push_str(frame.name);
			path
		})
	}
}


type DirectorySizes = HashMap<String, usize>;

/// Drives the stack through the transcript, closing every opened directory
/// exactly once; directories still open at the end are drained.
fn replay<'s>(
	records: impl Iterator<Item = LogRecord<'s>>,
	max_tracked_size: Option<usize>,
) -> (DirectorySizes, usize) {
	let mut stack = DirectoryStack::new(max_tracked_size);
	let mut sizes = DirectorySizes::new();
	for record in records {
		match record.command {
			Command::ChangeDir("..") => {
				let (path, size) = stack.pop();
				sizes.insert(path, size);
			}
			Command::ChangeDir(".") => (),
			Command::ChangeDir(name) => stack.push(name, 0),
			Command::List => stack.update_size(record.direct_file_total()),
		}
	}
	while stack.len() > 0 {
		let (path, size) = stack.pop();
		#[cfg(LOGGING)]
		println!("{path}: {size}");
		sizes.insert(path, size);
	}
	(sizes, stack.accumulator())
}


fn input_records_from_str(s: &str) -> impl Iterator<Item = LogRecord<'_>> + '_ {
	parsing::try_records_from_str(s).unwrap().into_iter()
}


fn part1_impl<'s>(input_records: impl Iterator<Item = LogRecord<'s>>) -> usize {
	let (_, accumulator) = replay(input_records, Some(SMALL_DIR_MAX_SIZE));
	accumulator
}

pub(crate) fn part1(s: &str) -> usize {
	part1_impl(input_records_from_str(s))
}


fn part2_impl<'s>(input_records: impl Iterator<Item = LogRecord<'s>>) -> usize {
	let (sizes, _) = replay(input_records, None);
	let root_size = *sizes.get(ROOT).expect("transcript never visited the root directory");
	let free_space = TOTAL_DISK_SPACE - root_size;
	if free_space >= NEEDED_FREE_SPACE { return 0 }
	let deficit = NEEDED_FREE_SPACE - free_space;
	sizes.into_values().filter(|&size| size >= deficit).min().unwrap_or(0)
}

pub(crate) fn part2(s: &str) -> usize {
	part2_impl(input_records_from_str(s))
}


mod parsing {
	use std::num::ParseIntError;

	#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
	pub(super) enum Command<'s> {
		ChangeDir(&'s str),
		List,
	}

	/// One listing output line; directory entries don’t contribute to sizes.
	#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
	pub(super) enum Entry {
		Dir,
		File { size: usize },
	}

	#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
	pub(super) struct LogRecord<'s> {
		pub(super) command: Command<'s>,
		pub(super) output: Vec<Entry>,
	}

	impl LogRecord<'_> {
		pub(super) fn direct_file_total(&self) -> usize {
			self.output.iter()
				.map(|entry| match entry { Entry::File { size } => *size, Entry::Dir => 0 })
				.sum()
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CommandError<'s> {
		MissingArgument,
		Unsupported(&'s str),
	}

	impl<'s> TryFrom<&'s str> for Command<'s> {
		type Error = CommandError<'s>;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			match s.split_once(' ') {
				Some(("cd", argument)) => Ok(Command::ChangeDir(argument)),
				None if s == "ls" => Ok(Command::List),
				None if s == "cd" => Err(CommandError::MissingArgument),
				_ => Err(CommandError::Unsupported(s)),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EntryError {
		NoSpace,
		InvalidSize(ParseIntError),
	}

	impl TryFrom<&str> for Entry {
		type Error = EntryError;
		fn try_from(line: &str) -> Result<Self, Self::Error> {
			let (prefix, _name) = line.split_once(' ').ok_or(EntryError::NoSpace)?;
			if prefix == "dir" { return Ok(Entry::Dir) }
			Ok(Entry::File { size: prefix.parse().map_err(EntryError::InvalidSize)? })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LogErrorKind<'s> {
		Command(CommandError<'s>),
		Output(EntryError),
		OutputBeforeCommand,
		OutputAfterChangeDir,
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct LogError<'s> {
		pub(super) line: usize,
		pub(super) kind: LogErrorKind<'s>,
	}

	/// Partitions the transcript into records: each `$ `-prefixed line opens
	/// a record, and the run of lines that follows is its listing output.
	pub(super) fn try_records_from_str(s: &str) -> Result<Vec<LogRecord<'_>>, LogError<'_>> {
		let mut records: Vec<LogRecord<'_>> = vec![];
		for (l, line) in s.lines().enumerate() {
			match line.strip_prefix("$ ") {
				Some(command) => {
					let command = Command::try_from(command)
						.map_err(|e| LogError { line: l + 1, kind: LogErrorKind::Command(e) })?;
					records.push(LogRecord { command, output: vec![] });
				}
				None => {
					let record = match records.last_mut() {
						Some(record) => record,
						None => return Err(LogError { line: l + 1, kind: LogErrorKind::OutputBeforeCommand }),
					};
					if !matches!(record.command, Command::List) {
						return Err(LogError { line: l + 1, kind: LogErrorKind::OutputAfterChangeDir })
					}
					record.output.push(Entry::try_from(line)
						.map_err(|e| LogError { line: l + 1, kind: LogErrorKind::Output(e) })?);
				}
			}
		}
		Ok(records)
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use super::parsing::Entry;

	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };

	#[test]
	fn stack_lengths() {
		let mut stack = DirectoryStack::new(None);
		stack.push("/", 0);
		stack.push("a", 0);
		stack.push("b", 0);
		assert_eq!(stack.len(), 3);
		_ = stack.pop();
		_ = stack.pop();
		assert_eq!(stack.len(), 1);
	}

	#[test]
	fn last_frame_path() {
		let mut stack = DirectoryStack::new(None);
		stack.push("/", 123);
		assert_eq!(stack.pop(), ("/".to_owned(), 123));
		assert_eq!(stack.len(), 0);
	}

	#[test]
	#[should_panic]
	fn pop_empty() {
		DirectoryStack::new(None).pop();
	}

	#[test]
	#[should_panic]
	fn update_size_empty() {
		DirectoryStack::new(None).update_size(1);
	}

	#[test]
	fn size_propagation() {
		let mut stack = DirectoryStack::new(None);
		stack.push("parent", 0);
		stack.push("child", 0);
		stack.update_size(5);
		assert_eq!(stack.pop(), ("parent/child".to_owned(), 5));
		assert_eq!(stack.pop(), ("parent".to_owned(), 5));
	}

	#[test]
	fn accumulator_bound() {
		let mut stack = DirectoryStack::new(Some(100));
		for size in [50, 150, 30] {
			stack.push("dir", size);
			_ = stack.pop();
		}
		assert_eq!(stack.accumulator(), 80);
	}

	#[test]
	fn records() {
		let records = parsing::try_records_from_str("$ cd /\n$ ls\ndir a\n123 b.txt\n").unwrap();
		assert_eq!(records, [
			parsing::LogRecord { command: Command::ChangeDir("/"), output: vec![] },
			parsing::LogRecord { command: Command::List, output: vec![Entry::Dir, Entry::File { size: 123 }] },
		]);
	}

	#[test]
	fn unsupported_command() {
		assert!(matches!(parsing::try_records_from_str("$ cd /\n$ rm -rf /\n"),
			Err(parsing::LogError { line: 2, .. })));
		assert!(matches!(parsing::try_records_from_str("100 a.txt\n"),
			Err(parsing::LogError { line: 1, .. })));
	}

	#[test]
	fn single_directory() {
		let (sizes, _) = replay(input_records_from_str("$ cd /\n$ ls\n14848514 a.txt\n"), None);
		assert_eq!(sizes, HashMap::from([("/".to_owned(), 14_848_514)]));
	}

	#[test]
	fn nested_directories() {
		const TRANSCRIPT: &str = indoc::indoc! { "
			$ cd /
			$ ls
			dir b
			100 a.txt
			$ cd b
			$ ls
			200 c.txt
			$ cd ..
		" };
		let (sizes, _) = replay(input_records_from_str(TRANSCRIPT), None);
		assert_eq!(sizes.get("/b"), Some(&200));
		assert_eq!(sizes.get("/"), Some(&300));
	}

	#[test]
	fn deletion_deficit() {
		const TRANSCRIPT: &str = indoc::indoc! { "
			$ cd /
			$ ls
			dir a
			40000000 big.img
			$ cd a
			$ ls
			8381165 data.bin
		" };
		assert_eq!(part2_impl(input_records_from_str(TRANSCRIPT)), 8_381_165);
	}

	#[test]
	fn nothing_to_delete() {
		assert_eq!(part2_impl(input_records_from_str("$ cd /\n$ ls\n100 a.txt\n")), 0);
	}

	#[test]
	fn replay_is_pure() {
		let first = replay(input_records_from_str(INPUT), Some(SMALL_DIR_MAX_SIZE));
		let second = replay(input_records_from_str(INPUT), Some(SMALL_DIR_MAX_SIZE));
		assert_eq!(first, second);
	}

	#[test]
	fn parts() {
		assert_eq!(part1_impl(input_records_from_str(INPUT)), 95_437);
		assert_eq!(part2_impl(input_records_from_str(INPUT)), 24_933_642);
	}
}
