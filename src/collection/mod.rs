//! Collections that enforce domain invariants on their members.

pub mod unique;

pub use unique::{UniqueCollection, UniqueElement};
