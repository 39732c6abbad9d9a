// Copyright (c) 2022 Bastiaan Marinus van de Weerd

macro_rules! mod_days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( pub(crate) mod [<day $day>]; )+
} } }
pub(crate) use mod_days;

pub(crate) fn read_input(day: usize) -> std::io::Result<String> {
	let path = format!("input/day{day:02}.txt");
	std::fs::read_to_string(&path)
		.map_err(|e| std::io::Error::new(e.kind(), format!("{path}: {e}")))
}
