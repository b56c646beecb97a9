//! A full solution run using the helper macros
//!
//! Reads `resources/year2022/day01` if present, otherwise downloads the input
//! with the session from `resources/security.properties` or `AOC_SESSION`.
//! Pass `--submit` to send both answers.
//!
//! ```text
//! cargo run -p aoc-utils --example calorie_counting -- --submit
//! ```

mod year2022 {
    pub mod day01 {
        use aoc_utils::{PhaseTimer, read_puzzle_input, send_puzzle_answer};

        fn elves(input: &str) -> Result<Vec<u64>, std::num::ParseIntError> {
            input
                .trim()
                .split("\n\n")
                .map(|elf| elf.lines().map(str::parse::<u64>).sum())
                .collect()
        }

        pub fn run(submit: bool) -> Result<(), Box<dyn std::error::Error>> {
            let input = read_puzzle_input!()?;

            let mut timer = PhaseTimer::start();
            let mut calories = elves(&input)?;
            calories.sort_unstable_by(|a, b| b.cmp(a));
            timer.parsed();

            let most = calories.first().copied().unwrap_or_default();
            timer.part_one_done();

            let top_three: u64 = calories.iter().take(3).sum();
            timer.finish();

            println!("part 1: {}", most);
            println!("part 2: {}", top_three);

            if submit {
                send_puzzle_answer!(1, most)?;
                send_puzzle_answer!(2, top_three)?;
            }
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    aoc_utils::init_logging();
    let submit = std::env::args().any(|arg| arg == "--submit");
    year2022::day01::run(submit)
}
