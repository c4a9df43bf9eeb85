use std::{
    fmt::{self, Display, Formatter},
    iter::FromIterator,
};

use itertools::Itertools;
use nom::{
    character::complete::{alpha0, multispace0},
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    parser_ext::ParserExt,
};

use crate::{
    reduce::reduce,
    unit::{Kind, Unit},
};

/// An ordered sequence of units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polymer {
    units: Vec<Unit>,
}

impl Polymer {
    /// Build a polymer from only the ASCII letters of `input`. Anything else,
    /// such as the trailing newline of a puzzle input, is dropped.
    pub fn from_letters(input: &str) -> Self {
        input.chars().filter(|c| c.is_ascii_alphabetic()).collect()
    }

    /// Build a polymer from every character of `input`. Non-letters become
    /// inert units, which stay put during reduction.
    pub fn from_raw(input: &str) -> Self {
        input.chars().collect()
    }

    /// Parse a polymer that must consist of letters, optionally followed by
    /// whitespace. Anything else is an error.
    pub fn parse_strict(input: &str) -> Result<Self, ErrorTree<Location>> {
        final_parser(parse_polymer)(input)
    }

    pub(crate) fn from_units(units: Vec<Unit>) -> Self {
        Polymer { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> impl Iterator<Item = Unit> + Clone + '_ {
        self.units.iter().copied()
    }

    /// The units of this polymer that aren't of the given type, in order.
    pub fn units_without(&self, kind: Kind) -> impl Iterator<Item = Unit> + Clone + '_ {
        self.units().filter(move |unit| unit.kind() != Some(kind))
    }

    /// A copy of this polymer with every unit of the given type removed,
    /// regardless of polarity.
    pub fn without(&self, kind: Kind) -> Self {
        self.units_without(kind).collect()
    }

    /// Fully react this polymer.
    pub fn reduce(&self) -> Self {
        reduce(self.units())
    }

    /// The length of this polymer after removing a unit type and reacting
    /// what's left. This skips building the filtered polymer.
    pub fn reduced_len_without(&self, kind: Kind) -> usize {
        reduce(self.units_without(kind)).len()
    }

    /// True if no two adjacent units react with each other.
    pub fn is_reduced(&self) -> bool {
        self.units()
            .tuple_windows()
            .all(|(left, right)| !left.cancels(right))
    }
}

impl FromIterator<Unit> for Polymer {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Polymer::from_units(iter.into_iter().collect())
    }
}

impl FromIterator<char> for Polymer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter().map(Unit::from).collect()
    }
}

impl Display for Polymer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.units().try_for_each(|unit| write!(f, "{}", unit))
    }
}

fn parse_polymer(input: &str) -> IResult<&str, Polymer, ErrorTree<&str>> {
    alpha0
        .terminated(multispace0)
        .context("polymer")
        .map(Polymer::from_raw)
        .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "dabAcCaCBAcCcaDA";

    fn kind(letter: char) -> Kind {
        Kind::new(letter).unwrap()
    }

    #[test]
    fn from_letters_strips_whitespace() {
        let polymer = Polymer::from_letters("dabAcCaCBAcCcaDA\n");
        assert_eq!(polymer.len(), 16);
        assert_eq!(polymer.to_string(), EXAMPLE);
    }

    #[test]
    fn from_raw_keeps_everything() {
        let polymer = Polymer::from_raw("aA\n");
        assert_eq!(polymer.len(), 3);
        assert_eq!(polymer.reduce().to_string(), "\n");
    }

    #[test]
    fn strict_accepts_trailing_whitespace() {
        let polymer = Polymer::parse_strict("dabAcCaCBAcCcaDA\n").unwrap();
        assert_eq!(polymer.to_string(), EXAMPLE);
    }

    #[test]
    fn strict_accepts_empty_input() {
        assert!(Polymer::parse_strict("").unwrap().is_empty());
        assert!(Polymer::parse_strict("\n").unwrap().is_empty());
    }

    #[test]
    fn strict_rejects_non_letters() {
        assert!(Polymer::parse_strict("dab1AcC").is_err());
        assert!(Polymer::parse_strict("dab\nAcC").is_err());
    }

    #[test]
    fn without_removes_both_polarities() {
        let polymer = Polymer::from_letters(EXAMPLE);
        assert_eq!(polymer.without(kind('a')).to_string(), "dbcCCBcCcD");
        assert_eq!(polymer.without(kind('c')).to_string(), "dabAaBAaDA");
    }

    #[test]
    fn without_absent_kind_is_identity() {
        let polymer = Polymer::from_letters(EXAMPLE);
        assert_eq!(polymer.without(kind('z')), polymer);
    }

    #[test]
    fn reduced_len_without_matches_filtered_reduction() {
        let polymer = Polymer::from_letters(EXAMPLE);

        for kind in Kind::all() {
            assert_eq!(
                polymer.reduced_len_without(kind),
                polymer.without(kind).reduce().len(),
                "mismatch eliminating {}",
                kind
            );
        }
    }

    #[test]
    fn is_reduced() {
        assert!(Polymer::from_letters("dabCBAcaDA").is_reduced());
        assert!(Polymer::from_letters("").is_reduced());
        assert!(!Polymer::from_letters("abBA").is_reduced());
    }
}
