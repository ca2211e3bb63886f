//! [`Query`] collection related to multiple [`User`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::User, read};

use super::StoreQuery;

/// Queries a list of [`User`]s.
pub type List = StoreQuery<By<Vec<User>, read::user::list::Selector>>;
