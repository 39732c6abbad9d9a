// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const TOP_GROUPS: usize = 3;


/// Sums each group of consecutive `Some` values; `None` separates groups.
fn group_totals(calories: impl Iterator<Item = Option<u64>>) -> impl Iterator<Item = u64> {
	use itertools::Itertools as _;
	calories.batching(|it| {
		let mut total = None;
		for value in it {
			match (value, total) {
				(Some(value), running) => total = Some(running.unwrap_or(0) + value),
				(None, Some(_)) => break,
				(None, None) => (),
			}
		}
		total
	})
}


fn input_calories_from_str(s: &str) -> impl Iterator<Item = Option<u64>> + '_ {
	// A line that doesn’t parse as a number resets the running total,
	// same as the blank separator lines.
	s.lines().map(|line| line.parse().ok())
}


fn part1_impl(input_calories: impl Iterator<Item = Option<u64>>) -> u64 {
	group_totals(input_calories).max().unwrap()
}

pub(crate) fn part1(s: &str) -> u64 {
	part1_impl(input_calories_from_str(s))
}


fn part2_impl(input_calories: impl Iterator<Item = Option<u64>>) -> u64 {
	use std::{cmp::Reverse, collections::BinaryHeap};
	let mut top = BinaryHeap::with_capacity(TOP_GROUPS + 1);
	for total in group_totals(input_calories) {
		top.push(Reverse(total));
		if top.len() > TOP_GROUPS { top.pop(); }
	}
	top.into_iter().map(|Reverse(total)| total).sum()
}

pub(crate) fn part2(s: &str) -> u64 {
	part2_impl(input_calories_from_str(s))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	assert_eq!(part1_impl(input_calories_from_str(INPUT)), 24_000);
	assert_eq!(part2_impl(input_calories_from_str(INPUT)), 45_000);
	assert_eq!(group_totals(input_calories_from_str("1000\n2000\noops\n3000\n")).collect::<Vec<_>>(), [3000, 3000]);
}
