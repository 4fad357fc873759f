//! Card system: pair definitions, card ids, cards, and dealing.
//!
//! ## Key Types
//!
//! - `PairDefinition`: One intended pair (key, left text, right text)
//! - `PairSet`: Validated dataset with unique keys
//! - `Column`: Left or right, derived from the id prefix
//! - `CardId`: Column-prefixed card identifier
//! - `Card`: Runtime card state (matched or not)
//! - `MatchedPair`: A confirmed pair's ids
//! - `deal`: Builds both columns, shuffling the right one

pub mod card;
pub mod deal;
pub mod pair;

pub use card::{Card, CardId, Column, MatchedPair};
pub use deal::{deal, Deal};
pub use pair::{PairDefinition, PairSet};
