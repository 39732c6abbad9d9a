// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq)]
enum Shape { Rock = 1, Paper = 2, Scissors = 3 }

impl Shape {
	fn score(self) -> u64 {
		self as u64
	}

	/// The shape this one defeats.
	fn beats(self) -> Shape {
		use Shape::*;
		match self { Rock => Scissors, Paper => Rock, Scissors => Paper }
	}

	fn beaten_by(self) -> Shape {
		use Shape::*;
		match self { Scissors => Rock, Rock => Paper, Paper => Scissors }
	}
}

#[derive(Clone, Copy)]
enum Outcome { Lose = 0, Draw = 3, Win = 6 }

impl Outcome {
	fn score(self) -> u64 {
		self as u64
	}
}

/// Second column of a round, before deciding what it encodes.
#[derive(Clone, Copy)]
enum Code { X, Y, Z }

impl Code {
	fn as_response(self) -> Shape {
		use {Code::*, Shape::*};
		match self { X => Rock, Y => Paper, Z => Scissors }
	}

	fn as_outcome(self) -> Outcome {
		use {Code::*, Outcome::*};
		match self { X => Lose, Y => Draw, Z => Win }
	}
}

struct Round {
	theirs: Shape,
	code: Code,
}


fn input_rounds_from_str(s: &str) -> impl Iterator<Item = Round> + '_ {
	parsing::rounds_from_str(s).map(|r| r.unwrap())
}


fn outcome_against(ours: Shape, theirs: Shape) -> Outcome {
	if ours == theirs { Outcome::Draw }
	else if ours.beats() == theirs { Outcome::Win }
	else { Outcome::Lose }
}

fn part1_impl(input_rounds: impl Iterator<Item = Round>) -> u64 {
	input_rounds.map(|round| {
		let ours = round.code.as_response();
		ours.score() + outcome_against(ours, round.theirs).score()
	}).sum()
}

pub(crate) fn part1(s: &str) -> u64 {
	part1_impl(input_rounds_from_str(s))
}


fn part2_impl(input_rounds: impl Iterator<Item = Round>) -> u64 {
	input_rounds.map(|round| {
		let outcome = round.code.as_outcome();
		let ours = match outcome {
			Outcome::Draw => round.theirs,
			Outcome::Win => round.theirs.beaten_by(),
			Outcome::Lose => round.theirs.beats(),
		};
		ours.score() + outcome.score()
	}).sum()
}

pub(crate) fn part2(s: &str) -> u64 {
	part2_impl(input_rounds_from_str(s))
}


mod parsing {
	use std::str::FromStr;
	use super::{Code, Round, Shape};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundError {
		Format,
		InvalidTheirs(String),
		InvalidCode(String),
	}

	impl FromStr for Round {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use RoundError::*;
			let (theirs, code) = s.split_once(' ').ok_or(Format)?;
			let theirs = match theirs {
				"A" => Shape::Rock,
				"B" => Shape::Paper,
				"C" => Shape::Scissors,
				found => return Err(InvalidTheirs(found.to_owned())),
			};
			let code = match code {
				"X" => Code::X,
				"Y" => Code::Y,
				"Z" => Code::Z,
				found => return Err(InvalidCode(found.to_owned())),
			};
			Ok(Round { theirs, code })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundsError {
		Empty,
		Round { line: usize, source: RoundError },
	}

	pub(super) fn rounds_from_str(s: &str) -> impl Iterator<Item = Result<Round, RoundsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(RoundsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError::Round { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1_impl(input_rounds_from_str(INPUT)), 15);
	assert_eq!(part2_impl(input_rounds_from_str(INPUT)), 12);
}
