//! [`InMemory`] record store.

use std::sync::Arc;

use common::operations::{By, Delete, Insert, Select, Update};
use tokio::sync::RwLock;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{user, AuditLogEntry, User},
    read::{self, Ordering},
};

use super::{record, Error, Store};

/// Record store keeping every table in process memory.
///
/// Tables hold raw JSON records, exactly as a hosted record store would;
/// all typing happens at the [`record`] DTO boundary on the way in and out.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// `users` table.
    users: Arc<RwLock<Vec<serde_json::Value>>>,

    /// `auditLog` table.
    audit: Arc<RwLock<Vec<serde_json::Value>>>,
}

impl InMemory {
    /// Creates a new empty [`InMemory`] store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`InMemory`] store pre-populated with the provided raw
    /// records.
    ///
    /// Records may use camelCase or snake_case field names; both are
    /// accepted on read.
    #[must_use]
    pub fn seeded(
        users: Vec<serde_json::Value>,
        audit: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            audit: Arc::new(RwLock::new(audit)),
        }
    }
}

/// Returns the `id` field of the provided raw `record`, if any.
fn record_id(record: &serde_json::Value) -> Option<&str> {
    record.get("id").and_then(serde_json::Value::as_str)
}

impl Store<Insert<User>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(user): Insert<User>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("inserting `User(id: {})`", user.id);

        self.users.write().await.push(record::encode_user(&user));
        Ok(())
    }
}

impl Store<Update<User>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Update(user): Update<User>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("updating `User(id: {})`", user.id);

        let id = user.id.to_string();
        let mut users = self.users.write().await;
        let record = users
            .iter_mut()
            .find(|r| record_id(r) == Some(id.as_str()))
            .ok_or_else(|| tracerr::new!(Error::NoSuchRecord(id.clone())))?;
        *record = record::encode_user(&user);
        Ok(())
    }
}

impl Store<Delete<By<User, user::Id>>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<User, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner().to_string();
        log::debug!("deleting `User(id: {id})`");

        self.users
            .write()
            .await
            .retain(|r| record_id(r) != Some(id.as_str()));
        Ok(())
    }
}

impl Store<Select<By<Option<User>, user::Id>>> for InMemory {
    type Ok = Option<User>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner().to_string();

        self.users
            .read()
            .await
            .iter()
            .find(|r| record_id(r) == Some(id.as_str()))
            .map(|r| record::decode_user(r).map_err(tracerr::wrap!()))
            .transpose()
    }
}

impl<'l> Store<Select<By<Option<User>, &'l user::Email>>> for InMemory {
    type Ok = Option<User>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, &'l user::Email>>,
    ) -> Result<Self::Ok, Self::Err> {
        let email = by.into_inner();

        for record in self.users.read().await.iter() {
            let user = record::decode_user(record).map_err(tracerr::wrap!())?;
            if user.email == *email {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }
}

impl Store<Select<By<Vec<User>, read::user::list::Selector>>> for InMemory {
    type Ok = Vec<User>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<User>, read::user::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        let mut users = self
            .users
            .read()
            .await
            .iter()
            .map(|r| record::decode_user(r).map_err(tracerr::wrap!()))
            .collect::<Result<Vec<_>, _>>()?;

        match selector.order {
            Ordering::CreatedAtDesc => {
                users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            Ordering::CreatedAtAsc => {
                users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            }
        }
        if let Some(limit) = selector.limit {
            users.truncate(limit);
        }

        Ok(users)
    }
}

impl Store<Insert<AuditLogEntry>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(entry): Insert<AuditLogEntry>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!(
            "appending `AuditLogEntry(action: {}, resource: {})`",
            entry.action,
            entry.resource,
        );

        self.audit.write().await.push(record::encode_audit(&entry));
        Ok(())
    }
}

impl Store<Select<By<Vec<AuditLogEntry>, read::audit::list::Selector>>>
    for InMemory
{
    type Ok = Vec<AuditLogEntry>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<AuditLogEntry>, read::audit::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        let mut entries = self
            .audit
            .read()
            .await
            .iter()
            .map(|r| record::decode_audit(r).map_err(tracerr::wrap!()))
            .collect::<Result<Vec<_>, _>>()?;

        match selector.order {
            Ordering::CreatedAtDesc => {
                entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            Ordering::CreatedAtAsc => {
                entries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            }
        }
        if let Some(limit) = selector.limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Delete, Insert, Select, Update},
        DateTime,
    };
    use serde_json::json;

    use crate::{
        domain::user::{Email, Id, Role, Status, User},
        read,
    };

    use super::{InMemory, Store as _};

    fn user(first: &str, email: &str) -> User {
        let now = DateTime::now();
        User {
            id: Id::new(),
            email: Email::new(email).unwrap(),
            first_name: first.into(),
            last_name: "Doe".into(),
            role: Role::Surveyor,
            status: Status::Active,
            email_verified: false,
            created_at: now.coerce(),
            updated_at: now.coerce(),
            last_login: None,
        }
    }

    #[tokio::test]
    async fn inserts_and_selects_by_id() {
        let store = InMemory::new();
        let john = user("John", "john@example.com");

        store.execute(Insert(john.clone())).await.unwrap();

        let found = store
            .execute(Select(By::<Option<User>, _>::new(john.id)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.first_name, "John");

        let missing = store
            .execute(Select(By::<Option<User>, _>::new(Id::new())))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn updates_replace_the_record() {
        let store = InMemory::new();
        let mut john = user("John", "john@example.com");
        store.execute(Insert(john.clone())).await.unwrap();

        john.status = Status::Banned;
        store.execute(Update(john.clone())).await.unwrap();

        let found = store
            .execute(Select(By::<Option<User>, _>::new(john.id)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.status, Status::Banned);
    }

    #[tokio::test]
    async fn updating_a_missing_record_errors() {
        let store = InMemory::new();
        let err = store
            .execute(Update(user("Ghost", "ghost@example.com")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no record"));
    }

    #[tokio::test]
    async fn deletes_are_permanent() {
        let store = InMemory::new();
        let john = user("John", "john@example.com");
        store.execute(Insert(john.clone())).await.unwrap();

        store
            .execute(Delete(By::<User, _>::new(john.id)))
            .await
            .unwrap();

        let found = store
            .execute(Select(By::<Option<User>, _>::new(john.id)))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn selects_by_email() {
        let store = InMemory::new();
        let john = user("John", "john@example.com");
        let jane = user("Jane", "jane@example.com");
        store.execute(Insert(john)).await.unwrap();
        store.execute(Insert(jane)).await.unwrap();

        let email = Email::new("jane@example.com").unwrap();
        let found = store
            .execute(Select(By::<Option<User>, _>::new(&email)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.first_name, "Jane");
    }

    #[tokio::test]
    async fn lists_newest_first_and_honors_the_limit() {
        let store = InMemory::seeded(
            vec![
                json!({
                    "id": "11111111-1111-4111-8111-111111111111",
                    "email": "old@example.com",
                    "first_name": "Old",
                    "last_name": "Timer",
                    "role": "admin",
                    "status": "active",
                    "email_verified": 1,
                    "created_at": "2024-01-05T11:10:00Z",
                    "updated_at": "2024-01-05T11:10:00Z",
                }),
                json!({
                    "id": "22222222-2222-4222-8222-222222222222",
                    "email": "new@example.com",
                    "firstName": "New",
                    "lastName": "Comer",
                    "role": "surveyor",
                    "status": "active",
                    "emailVerified": true,
                    "createdAt": "2024-01-15T10:30:00Z",
                    "updatedAt": "2024-01-15T10:30:00Z",
                }),
            ],
            Vec::new(),
        );

        let listed = store
            .execute(Select(By::<Vec<User>, _>::new(
                read::user::list::Selector::default(),
            )))
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].first_name, "New");

        let limited = store
            .execute(Select(By::<Vec<User>, _>::new(
                read::user::list::Selector {
                    limit: Some(1),
                    ..read::user::list::Selector::default()
                },
            )))
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].first_name, "New");
    }
}
