// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const PACKET_MARKER_LEN: usize = 4;
const MESSAGE_MARKER_LEN: usize = 14;


/// Index just past the first window of `marker_len` distinct letters.
fn first_marker_end(datastream: &str, marker_len: usize) -> usize {
	datastream.trim_end().as_bytes()
		.windows(marker_len)
		.position(|window| {
			let mask = window.iter().fold(0_u32, |mask, b| mask | 1 << (b - b'a'));
			mask.count_ones() as usize == marker_len
		})
		.map(|position| position + marker_len)
		.expect("no marker in datastream")
}


pub(crate) fn part1(s: &str) -> usize {
	first_marker_end(s, PACKET_MARKER_LEN)
}

pub(crate) fn part2(s: &str) -> usize {
	first_marker_end(s, MESSAGE_MARKER_LEN)
}


#[cfg(test)]
mod tests {
	use test_case::test_case;

	#[test_case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19)]
	#[test_case("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23)]
	#[test_case("nppdvjthqldpwncqszvftbrmjlhg", 6, 23)]
	#[test_case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29)]
	#[test_case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26)]
	fn markers(datastream: &str, packet: usize, message: usize) {
		assert_eq!(super::part1(datastream), packet);
		assert_eq!(super::part2(datastream), message);
	}
}
