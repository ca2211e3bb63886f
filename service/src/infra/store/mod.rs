//! Record-store implementations.
//!
//! The record store is a generic per-entity-table collaborator exposing
//! list/create/update/delete operations over loosely-typed records. All
//! naming-convention tolerance lives in the [`record`] DTO boundary; the
//! rest of the crate only ever sees typed domain entities.

pub mod memory;
pub mod record;

use derive_more::{Display, Error as StdError};

pub use self::memory::InMemory;

/// Record store operation.
pub use common::Handler as Store;

/// [`Store`] error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Stored record cannot be decoded into its typed representation.
    #[display("malformed record: {_0}")]
    MalformedRecord(#[error(not(source))] String),

    /// Referenced record does not exist.
    #[display("no record with ID `{_0}`")]
    NoSuchRecord(#[error(not(source))] String),
}
