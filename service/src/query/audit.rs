//! [`Query`] collection related to [`AuditLogEntry`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::AuditLogEntry, read};

use super::StoreQuery;

/// Queries a list of [`AuditLogEntry`]s.
pub type List = StoreQuery<By<Vec<AuditLogEntry>, read::audit::list::Selector>>;
