//! Searching for the unit type whose removal lets a polymer collapse the most

use log::trace;
use rayon::prelude::*;

use crate::{polymer::Polymer, unit::Kind};

/// The result of removing every unit of one type and reacting the rest.
/// Ordered by length first, so the minimum is the best elimination, with ties
/// going to the alphabetically first type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elimination {
    pub length: usize,
    pub kind: Kind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Serial,
    Parallel,
}

fn eliminate(polymer: &Polymer, kind: Kind) -> Elimination {
    let length = polymer.reduced_len_without(kind);
    trace!("eliminating {} leaves {} units", kind, length);
    Elimination { length, kind }
}

/// Try removing each of the 26 unit types and return the one that leaves the
/// shortest fully reacted polymer.
///
/// Removing a type commutes with reacting, so the search runs over the
/// reduced polymer; each of the 26 passes then only sees what survived the
/// initial reaction.
pub fn best_elimination(polymer: &Polymer, execution: Execution) -> Option<Elimination> {
    let base = polymer.reduce();

    match execution {
        Execution::Serial => Kind::all().map(|kind| eliminate(&base, kind)).min(),
        Execution::Parallel => {
            let kinds: Vec<Kind> = Kind::all().collect();

            kinds
                .into_par_iter()
                .map(|kind| eliminate(&base, kind))
                .min()
        }
    }
}
