// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct SectionRange {
	start: u64,
	end: u64,
}

impl SectionRange {
	fn contains(&self, other: &SectionRange) -> bool {
		self.start <= other.start && self.end >= other.end
	}

	fn overlaps(&self, other: &SectionRange) -> bool {
		self.start <= other.end && self.end >= other.start
	}
}

struct AssignmentsPair(SectionRange, SectionRange);


fn input_pairs_from_str(s: &str) -> impl Iterator<Item = AssignmentsPair> + '_ {
	parsing::pairs_from_str(s).map(|r| r.unwrap())
}


fn part1_impl(input_pairs: impl Iterator<Item = AssignmentsPair>) -> usize {
	input_pairs
		.filter(|AssignmentsPair(left, right)|
			left.contains(right) || right.contains(left))
		.count()
}

pub(crate) fn part1(s: &str) -> usize {
	part1_impl(input_pairs_from_str(s))
}


fn part2_impl(input_pairs: impl Iterator<Item = AssignmentsPair>) -> usize {
	input_pairs
		.filter(|AssignmentsPair(left, right)| left.overlaps(right))
		.count()
}

pub(crate) fn part2(s: &str) -> usize {
	part2_impl(input_pairs_from_str(s))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{AssignmentsPair, SectionRange};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SectionRangeError {
		NoHyphen,
		Start(ParseIntError),
		End(ParseIntError),
		EndBeforeStart { start: u64, end: u64 },
	}

	impl FromStr for SectionRange {
		type Err = SectionRangeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use SectionRangeError::*;
			let (start, end) = s.split_once('-').ok_or(NoHyphen)?;
			let start = start.parse().map_err(Start)?;
			let end = end.parse().map_err(End)?;
			if end < start { return Err(EndBeforeStart { start, end }) }
			Ok(SectionRange { start, end })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairError {
		NoComma,
		Left(SectionRangeError),
		Right(SectionRangeError),
	}

	impl FromStr for AssignmentsPair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',').ok_or(PairError::NoComma)?;
			Ok(AssignmentsPair(
				left.parse().map_err(PairError::Left)?,
				right.parse().map_err(PairError::Right)?,
			))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairsError {
		Empty,
		Pair { line: usize, source: PairError },
	}

	pub(super) fn pairs_from_str(s: &str) -> impl Iterator<Item = Result<AssignmentsPair, PairsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(PairsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| PairsError::Pair { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	assert_eq!(part1_impl(input_pairs_from_str(INPUT)), 2);
	assert_eq!(part2_impl(input_pairs_from_str(INPUT)), 4);
}
