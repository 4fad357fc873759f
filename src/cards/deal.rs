//! Dealing the two columns from a pair set.

use im::Vector;

use super::card::{Card, CardId, Column};
use super::pair::PairSet;
use crate::core::rng::GameRng;

/// Both columns of a fresh deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// Left column, authoring order.
    pub left: Vector<Card>,
    /// Right column, shuffled order.
    pub right: Vector<Card>,
}

/// Build the left column in authoring order and the right column from a
/// shuffled copy of the definitions. Ids are `left-i` and `right-i` by
/// position in their column.
pub fn deal(pairs: &PairSet, rng: &mut GameRng) -> Deal {
    let left = pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| Card::new(CardId::new(Column::Left, i), &pair.key, &pair.left_value))
        .collect();

    let right = rng
        .shuffled(&pairs.to_vec())
        .into_iter()
        .enumerate()
        .map(|(i, pair)| Card::new(CardId::new(Column::Right, i), pair.key, pair.right_value))
        .collect();

    Deal { left, right }
}
