// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![01, 02, 03, 04, 05, 06, 07];

fn main() -> std::io::Result<()> {
	let input = util::read_input(1)?;
	println!("Day 1; part 1: {}, part 2: {}", day01::part1(&input), day01::part2(&input));
	let input = util::read_input(2)?;
	println!("Day 2; part 1: {}, part 2: {}", day02::part1(&input), day02::part2(&input));
	let input = util::read_input(3)?;
	println!("Day 3; part 1: {}, part 2: {}", day03::part1(&input), day03::part2(&input));
	let input = util::read_input(4)?;
	println!("Day 4; part 1: {}, part 2: {}", day04::part1(&input), day04::part2(&input));
	let input = util::read_input(5)?;
	println!("Day 5; part 1: {}, part 2: {}", day05::part1(&input), day05::part2(&input));
	let input = util::read_input(6)?;
	println!("Day 6; part 1: {}, part 2: {}", day06::part1(&input), day06::part2(&input));
	let input = util::read_input(7)?;
	println!("Day 7; part 1: {}, part 2: {}", day07::part1(&input), day07::part2(&input));
	Ok(())
}
