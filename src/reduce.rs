use crate::{polymer::Polymer, unit::Unit};

/// Add a unit to the top of the stack, or annihilate it with the current top
/// if the two react. Because the new top is checked against the next unit
/// before anything else is consumed, reactions cascade outward.
fn react(mut stack: Vec<Unit>, unit: Unit) -> Vec<Unit> {
    match stack.last() {
        Some(&top) if top.cancels(unit) => {
            stack.pop();
        }
        _ => stack.push(unit),
    }

    stack
}

/// Fully react a sequence of units in a single left-to-right pass, returning
/// a polymer with no adjacent reacting pairs.
pub fn reduce(units: impl IntoIterator<Item = Unit>) -> Polymer {
    let units = units.into_iter();
    let stack = Vec::with_capacity(units.size_hint().0);

    Polymer::from_units(units.fold(stack, react))
}
