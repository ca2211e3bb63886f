//! Read model definitions.

pub mod audit;
pub mod property;
pub mod user;

/// Ordering of listed records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Ordering {
    /// Newest records first.
    #[default]
    CreatedAtDesc,

    /// Oldest records first.
    CreatedAtAsc,
}
