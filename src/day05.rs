// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Crate(u8);

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Stacks(Vec<Vec<Crate>>);

impl Stacks {
	fn top_crates(&self) -> String {
		self.0.iter().filter_map(|stack| stack.last().map(|c| c.0 as char)).collect()
	}
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Step {
	num_crates: usize,
	from_stack: usize,
	to_stack: usize,
}


fn input_from_str(s: &str) -> (Stacks, Vec<Step>) {
	parsing::try_stacks_and_steps_from_str(s).unwrap()
}


fn part1_impl((mut stacks, input_steps): (Stacks, Vec<Step>)) -> String {
	for step in input_steps {
		for _ in 0..step.num_crates {
			let crat = stacks.0[step.from_stack].pop().expect("moved a crate from an empty stack");
			stacks.0[step.to_stack].push(crat);
		}
	}
	stacks.top_crates()
}

pub(crate) fn part1(s: &str) -> String {
	part1_impl(input_from_str(s))
}


fn part2_impl((mut stacks, input_steps): (Stacks, Vec<Step>)) -> String {
	for step in input_steps {
		let from = &mut stacks.0[step.from_stack];
		let moved = from.split_off(from.len() - step.num_crates);
		stacks.0[step.to_stack].extend(moved);
	}
	stacks.top_crates()
}

pub(crate) fn part2(s: &str) -> String {
	part2_impl(input_from_str(s))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Crate, Stacks, Step};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StepError {
		Format,
		NumCrates(ParseIntError),
		FromStack(ParseIntError),
		ToStack(ParseIntError),
		SameStack,
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use StepError::*;
			let mut words = s.split_ascii_whitespace();
			match [words.next(), words.next(), words.next(), words.next(), words.next(), words.next(), words.next()] {
				[Some("move"), Some(num), Some("from"), Some(from), Some("to"), Some(to), None] => {
					let num_crates = num.parse().map_err(NumCrates)?;
					let from_stack = from.parse::<std::num::NonZeroUsize>().map_err(FromStack)?.get() - 1;
					let to_stack = to.parse::<std::num::NonZeroUsize>().map_err(ToStack)?.get() - 1;
					if from_stack == to_stack { return Err(SameStack) }
					Ok(Step { num_crates, from_stack, to_stack })
				}
				_ => Err(Format),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InputError {
		NoBlank,
		NoStacks,
		InvalidLabel { column: usize },
		InvalidCrate { line: usize, column: usize, found: u8 },
		NoSteps,
		Step { line: usize, source: StepError },
		StackOutOfRange { line: usize, stack: usize },
	}

	fn try_stacks_from_str(diagram: &str) -> Result<Stacks, InputError> {
		use InputError::*;

		let mut rows: Vec<&str> = diagram.lines().collect();
		let labels = rows.pop().ok_or(NoStacks)?;

		let mut num_stacks = 0;
		for (i, label) in labels.split_ascii_whitespace().enumerate() {
			if label.parse() != Ok(i + 1) {
				return Err(InvalidLabel { column: i + 1 })
			}
			num_stacks = i + 1;
		}
		if num_stacks == 0 { return Err(NoStacks) }

		let mut stacks = Vec::from_iter((0..num_stacks).map(|_| vec![]));
		// Bottom row first, so each stack is pushed bottom-up.
		for (l, row) in rows.iter().enumerate().rev() {
			for (i, stack) in stacks.iter_mut().enumerate() {
				// Crate letters sit at every fourth byte: `[A] [B] …`
				let column = i * 4 + 1;
				match row.as_bytes().get(column) {
					Some(&found) if found.is_ascii_uppercase() => stack.push(Crate(found)),
					Some(&b' ') | None => (),
					Some(&found) => return Err(InvalidCrate { line: l + 1, column: column + 1, found }),
				}
			}
		}

		Ok(Stacks(stacks))
	}

	pub(super) fn try_stacks_and_steps_from_str(s: &str) -> Result<(Stacks, Vec<Step>), InputError> {
		let (diagram, steps) = s.split_once("\n\n").ok_or(InputError::NoBlank)?;
		let stacks = try_stacks_from_str(diagram)?;

		let lines_before_steps = diagram.lines().count() + 1;
		let mut parsed_steps = vec![];
		for (l, line) in steps.lines().enumerate() {
			let line_number = lines_before_steps + l + 1;
			let step: Step = line.parse()
				.map_err(|e| InputError::Step { line: line_number, source: e })?;
			for stack in [step.from_stack, step.to_stack] {
				if stack >= stacks.0.len() {
					return Err(InputError::StackOutOfRange { line: line_number, stack: stack + 1 })
				}
			}
			parsed_steps.push(step);
		}
		if parsed_steps.is_empty() { return Err(InputError::NoSteps) }

		Ok((stacks, parsed_steps))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		    [D]
		[N] [C]
		[Z] [M] [P]
		 1   2   3

		move 1 from 2 to 1
		move 3 from 1 to 3
		move 2 from 2 to 1
		move 1 from 1 to 2
	" };

	#[test]
	fn parsing() {
		let (stacks, steps) = input_from_str(INPUT);
		assert_eq!(stacks.0[0], [Crate(b'Z'), Crate(b'N')]);
		assert_eq!(stacks.0[2], [Crate(b'P')]);
		assert_eq!(steps[0], Step { num_crates: 1, from_stack: 1, to_stack: 0 });
	}

	#[test]
	fn parts() {
		assert_eq!(part1_impl(input_from_str(INPUT)), "CMZ");
		assert_eq!(part2_impl(input_from_str(INPUT)), "MCD");
	}
}
