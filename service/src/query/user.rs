//! [`Query`] collection related to a single [`User`].

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::{user, User};

use super::StoreQuery;

/// Queries a [`User`] by its [`user::Id`].
pub type ById = StoreQuery<By<Option<User>, user::Id>>;
