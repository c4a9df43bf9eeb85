mod input;
mod polymer;
mod reduce;
mod search;
mod unit;

use std::{num::ParseIntError, path::PathBuf, str::FromStr};

use anyhow::Context;
use log::debug;
use structopt::StructOpt;
use thiserror::Error;

use crate::{
    input::{Mode, Source},
    polymer::Polymer,
    search::{best_elimination, Execution},
};

#[derive(Debug, Clone, Error)]
pub enum SolutionPartError {
    #[error("Failed to parse part: {0}")]
    Parse(#[from] ParseIntError),

    #[error("{0} is not a puzzle part; must be 1 or 2")]
    BadPart(u8),
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionPart {
    part1,
    part2,
}

impl FromStr for SolutionPart {
    type Err = SolutionPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse()?;

        match value {
            1 => Ok(SolutionPart::part1),
            2 => Ok(SolutionPart::part2),
            value => Err(SolutionPartError::BadPart(value)),
        }
    }
}

/// Fully react a polymer, then find the shortest polymer that can be made by
/// removing a single unit type before reacting.
#[derive(Debug, StructOpt)]
struct Args {
    /// Print only one answer: 1 for the reacted length, 2 for the shortest
    /// length after removing a unit type. Both are printed if omitted.
    #[structopt(short, long)]
    pub part: Option<SolutionPart>,

    /// Reject input containing anything other than letters followed by
    /// whitespace, instead of ignoring it
    #[structopt(long)]
    pub strict: bool,

    /// Try the 26 unit types in parallel
    #[structopt(long)]
    pub parallel: bool,

    /// The file from which to read input. If omitted, we read from stdin.
    pub input: Option<PathBuf>,
}

pub fn part1(polymer: &Polymer) -> anyhow::Result<usize> {
    let reduced = polymer.reduce();
    debug_assert!(reduced.is_reduced());
    debug!("reacted {} units down to {}", polymer.len(), reduced.len());
    Ok(reduced.len())
}

pub fn part2(polymer: &Polymer, execution: Execution) -> anyhow::Result<usize> {
    let best = best_elimination(polymer, execution).context("No unit types to remove")?;
    debug!("removing {} leaves {} units", best.kind, best.length);
    Ok(best.length)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = Args::from_args();

    let source = match args.input {
        Some(path) => Source::File(path),
        None => Source::Stdin,
    };

    let mode = if args.strict {
        Mode::Strict
    } else {
        Mode::Lenient
    };

    let execution = if args.parallel {
        Execution::Parallel
    } else {
        Execution::Serial
    };

    debug!("loading polymer from {} ({:?})", source, mode);
    let polymer = source.load(mode).context("Failed to load polymer")?;

    match args.part {
        Some(SolutionPart::part1) => println!("{}", part1(&polymer)?),
        Some(SolutionPart::part2) => println!("{}", part2(&polymer, execution)?),
        None => {
            println!("{}", part1(&polymer)?);
            println!("{}", part2(&polymer, execution)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "dabAcCaCBAcCcaDA";

    #[test]
    fn example_part1() {
        let polymer = Polymer::from_letters(EXAMPLE);
        assert_eq!(part1(&polymer).unwrap(), 10);
    }

    #[test]
    fn example_part2() {
        let polymer = Polymer::from_letters(EXAMPLE);
        assert_eq!(part2(&polymer, Execution::Serial).unwrap(), 4);
        assert_eq!(part2(&polymer, Execution::Parallel).unwrap(), 4);
    }

    #[test]
    fn empty_input() {
        let polymer = Polymer::from_letters("\n");
        assert_eq!(part1(&polymer).unwrap(), 0);
        assert_eq!(part2(&polymer, Execution::Serial).unwrap(), 0);
    }

    #[test]
    fn parses_parts() {
        assert_eq!("1".parse::<SolutionPart>().unwrap(), SolutionPart::part1);
        assert_eq!("2".parse::<SolutionPart>().unwrap(), SolutionPart::part2);
        assert!(matches!(
            "3".parse::<SolutionPart>(),
            Err(SolutionPartError::BadPart(3))
        ));
        assert!(matches!(
            "two".parse::<SolutionPart>(),
            Err(SolutionPartError::Parse(..))
        ));
    }

    #[test]
    fn parses_args() {
        let args = Args::from_iter(vec!["polymer", "--part", "2", "--parallel", "input.txt"]);

        assert_eq!(args.part, Some(SolutionPart::part2));
        assert!(args.parallel);
        assert!(!args.strict);
        assert_eq!(args.input, Some(PathBuf::from("input.txt")));
    }
}
