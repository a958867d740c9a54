pub mod entity;
pub mod invariants;

pub use entity::{Term, TermStatus};
pub use invariants::{validate_slug, validate_term};
