// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Rucksack<'s>(&'s str);

impl Rucksack<'_> {
	fn compartment_masks(&self) -> [u64; 2] {
		let half_len = self.0.len() / 2;
		[item_mask(&self.0[..half_len]), item_mask(&self.0[half_len..])]
	}

	fn item_mask(&self) -> u64 {
		item_mask(self.0)
	}
}

fn priority(item: u8) -> u64 {
	if item.is_ascii_lowercase() { (item - b'a' + 1) as u64 }
	else { (item - b'A' + 27) as u64 }
}

/// Bit `priority(item)` set for each distinct item.
fn item_mask(items: &str) -> u64 {
	items.bytes().fold(0, |mask, item| mask | 1 << priority(item))
}

/// Priority of the single item in `mask`; panics unless exactly one is set.
fn sole_priority(mask: u64) -> u64 {
	assert_eq!(mask.count_ones(), 1, "expected exactly 1 shared item");
	mask.trailing_zeros() as u64
}


fn input_rucksacks_from_str(s: &str) -> impl Iterator<Item = Rucksack<'_>> + '_ {
	parsing::rucksacks_from_str(s).map(|r| r.unwrap())
}


fn part1_impl<'s>(input_rucksacks: impl Iterator<Item = Rucksack<'s>>) -> u64 {
	input_rucksacks
		.map(|rucksack| {
			let [first, second] = rucksack.compartment_masks();
			sole_priority(first & second)
		})
		.sum()
}

pub(crate) fn part1(s: &str) -> u64 {
	part1_impl(input_rucksacks_from_str(s))
}


fn part2_impl<'s>(input_rucksacks: impl Iterator<Item = Rucksack<'s>>) -> u64 {
	use itertools::Itertools as _;
	input_rucksacks
		.tuples()
		.map(|(first, second, third)|
			sole_priority(first.item_mask() & second.item_mask() & third.item_mask()))
		.sum()
}

pub(crate) fn part2(s: &str) -> u64 {
	part2_impl(input_rucksacks_from_str(s))
}


mod parsing {
	use super::Rucksack;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksackError {
		OddLen(usize),
		InvalidItem(char),
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			use RucksackError::*;
			if s.len() % 2 != 0 { return Err(OddLen(s.len())) }
			if let Some(c) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
				return Err(InvalidItem(c))
			}
			Ok(Rucksack(s))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksacksError {
		Empty,
		Rucksack { line: usize, source: RucksackError },
	}

	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(RucksacksError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.try_into()
				.map_err(|e| RucksacksError::Rucksack { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	assert_eq!(priority(b'p'), 16);
	assert_eq!(priority(b'L'), 38);
	assert_eq!(part1_impl(input_rucksacks_from_str(INPUT)), 157);
	assert_eq!(part2_impl(input_rucksacks_from_str(INPUT)), 70);
}
