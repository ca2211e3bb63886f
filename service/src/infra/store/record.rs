//! Record DTO boundary.
//!
//! Records cross the store boundary as loosely-typed JSON objects whose
//! field names may follow EITHER camelCase or snake_case. This module is the
//! single point where both spellings are accepted; every record written back
//! uses canonical camelCase.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{audit, user, AuditLogEntry, User};

use super::Error;

/// Decodes a raw record into a [`User`].
pub(super) fn decode_user(record: &serde_json::Value) -> Result<User, Error> {
    let record: UserRecord = serde_json::from_value(record.clone())
        .map_err(|e| Error::MalformedRecord(e.to_string()))?;
    record.try_into()
}

/// Encodes a [`User`] into a raw record.
pub(super) fn encode_user(user: &User) -> serde_json::Value {
    serde_json::to_value(UserRecord::from(user))
        .expect("`UserRecord` always serializes")
}

/// Decodes a raw record into an [`AuditLogEntry`].
pub(super) fn decode_audit(
    record: &serde_json::Value,
) -> Result<AuditLogEntry, Error> {
    let record: AuditRecord = serde_json::from_value(record.clone())
        .map_err(|e| Error::MalformedRecord(e.to_string()))?;
    record.try_into()
}

/// Encodes an [`AuditLogEntry`] into a raw record.
pub(super) fn encode_audit(entry: &AuditLogEntry) -> serde_json::Value {
    serde_json::to_value(AuditRecord::from(entry))
        .expect("`AuditRecord` always serializes")
}

/// Raw record shape of a [`User`].
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    /// ID of the user.
    id: user::Id,

    /// Email address, kept raw until checked.
    email: String,

    /// First name.
    #[serde(alias = "first_name")]
    first_name: String,

    /// Last name.
    #[serde(alias = "last_name")]
    last_name: String,

    /// Role.
    role: user::Role,

    /// Account status.
    status: user::Status,

    /// Email verification flag, tolerating the numeric encoding some
    /// writers use.
    #[serde(
        alias = "email_verified",
        deserialize_with = "bool_or_number"
    )]
    email_verified: bool,

    /// Creation timestamp.
    #[serde(
        alias = "created_at",
        with = "common::datetime::serde::rfc3339"
    )]
    created_at: user::CreationDateTime,

    /// Last update timestamp.
    #[serde(
        alias = "updated_at",
        with = "common::datetime::serde::rfc3339"
    )]
    updated_at: user::UpdateDateTime,

    /// Last login timestamp, if any.
    #[serde(
        alias = "last_login",
        default,
        with = "common::datetime::serde::rfc3339::option"
    )]
    last_login: Option<user::LastLoginDateTime>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            status: user.status,
            email_verified: user.email_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login: user.last_login,
        }
    }
}

impl TryFrom<UserRecord> for User {
    type Error = Error;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let email = user::Email::new(&record.email).ok_or_else(|| {
            Error::MalformedRecord(format!(
                "`{}` is not a valid email",
                record.email,
            ))
        })?;

        Ok(Self {
            id: record.id,
            email,
            first_name: record.first_name,
            last_name: record.last_name,
            role: record.role,
            status: record.status,
            email_verified: record.email_verified,
            created_at: record.created_at,
            updated_at: record.updated_at,
            last_login: record.last_login,
        })
    }
}

/// Raw record shape of an [`AuditLogEntry`].
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditRecord {
    /// ID of the entry.
    id: audit::Id,

    /// Actor of the action: a user ID, or the literal `system`.
    #[serde(alias = "user_id")]
    user_id: Option<String>,

    /// Action verb.
    action: audit::Action,

    /// Affected resource kind.
    #[serde(alias = "resource_type")]
    resource_type: audit::Resource,

    /// Affected resource ID, if any.
    #[serde(alias = "resource_id", default)]
    resource_id: Option<String>,

    /// Human-readable details, if any.
    #[serde(default)]
    details: Option<String>,

    /// Originating IP address, if any.
    #[serde(alias = "ip_address", default)]
    ip_address: Option<String>,

    /// Originating user agent, if any.
    #[serde(alias = "user_agent", default)]
    user_agent: Option<String>,

    /// Creation timestamp.
    #[serde(
        alias = "created_at",
        with = "common::datetime::serde::rfc3339"
    )]
    created_at: audit::CreationDateTime,
}

/// Actor name the store uses when no user is signed in.
const SYSTEM_ACTOR: &str = "system";

impl From<&AuditLogEntry> for AuditRecord {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            id: entry.id,
            user_id: Some(
                entry
                    .user_id
                    .map_or_else(|| SYSTEM_ACTOR.to_owned(), |id| {
                        id.to_string()
                    }),
            ),
            action: entry.action,
            resource_type: entry.resource,
            resource_id: entry.resource_id.clone(),
            details: entry.details.clone(),
            ip_address: entry.ip_address.clone(),
            user_agent: entry.user_agent.clone(),
            created_at: entry.created_at,
        }
    }
}

impl TryFrom<AuditRecord> for AuditLogEntry {
    type Error = Error;

    fn try_from(record: AuditRecord) -> Result<Self, Self::Error> {
        let user_id = match record.user_id.as_deref() {
            None | Some(SYSTEM_ACTOR) => None,
            Some(raw) => Some(raw.parse().map_err(|_| {
                Error::MalformedRecord(format!(
                    "`{raw}` is not a valid actor ID",
                ))
            })?),
        };

        Ok(Self {
            id: record.id,
            user_id,
            action: record.action,
            resource: record.resource_type,
            resource_id: record.resource_id,
            details: record.details,
            ip_address: record.ip_address,
            user_agent: record.user_agent,
            created_at: record.created_at,
        })
    }
}

/// Deserializes a [`bool`] from either a JSON boolean or a number, where
/// any non-zero number reads as `true`.
fn bool_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => b,
        Raw::Number(n) => n != 0,
    })
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use crate::domain::user::{Role, Status};

    use super::{decode_audit, decode_user, encode_user};

    #[test]
    fn accepts_camel_case_records() {
        let user = decode_user(&json!({
            "id": "9f1a5f0e-8e54-4a3f-9136-8d9f4e2f1a11",
            "email": "john.doe@example.com",
            "firstName": "John",
            "lastName": "Doe",
            "role": "admin",
            "status": "active",
            "emailVerified": true,
            "createdAt": "2024-01-15T10:30:00Z",
            "updatedAt": "2024-01-15T10:30:00Z",
            "lastLogin": "2024-01-18T09:15:00Z",
        }))
        .unwrap();

        assert_eq!(user.first_name, "John");
        assert_eq!(user.role, Role::Admin);
        assert!(user.email_verified);
        assert!(user.last_login.is_some());
    }

    #[test]
    fn accepts_snake_case_records_with_numeric_flags() {
        let user = decode_user(&json!({
            "id": "9f1a5f0e-8e54-4a3f-9136-8d9f4e2f1a11",
            "email": "jane.smith@example.com",
            "first_name": "Jane",
            "last_name": "Smith",
            "role": "property_manager",
            "status": "inactive",
            "email_verified": 1,
            "created_at": "2024-01-10T14:20:00Z",
            "updated_at": "2024-01-10T14:20:00Z",
        }))
        .unwrap();

        assert_eq!(user.last_name, "Smith");
        assert_eq!(user.role, Role::PropertyManager);
        assert_eq!(user.status, Status::Inactive);
        assert!(user.email_verified);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn written_records_are_canonical_camel_case() {
        let user = decode_user(&json!({
            "id": "9f1a5f0e-8e54-4a3f-9136-8d9f4e2f1a11",
            "email": "jane.smith@example.com",
            "first_name": "Jane",
            "last_name": "Smith",
            "role": "surveyor",
            "status": "active",
            "email_verified": 0,
            "created_at": "2024-01-10T14:20:00Z",
            "updated_at": "2024-01-10T14:20:00Z",
        }))
        .unwrap();

        let record = encode_user(&user);
        assert!(record.get("firstName").is_some());
        assert!(record.get("first_name").is_none());
        assert_eq!(record["emailVerified"], serde_json::json!(false));
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(decode_user(&json!({"id": "nope"})).is_err());
        assert!(decode_user(&json!({
            "id": "9f1a5f0e-8e54-4a3f-9136-8d9f4e2f1a11",
            "email": "not an email",
            "firstName": "John",
            "lastName": "Doe",
            "role": "admin",
            "status": "active",
            "emailVerified": true,
            "createdAt": "2024-01-15T10:30:00Z",
            "updatedAt": "2024-01-15T10:30:00Z",
        }))
        .is_err());
    }

    #[test]
    fn system_actor_reads_as_no_user() {
        let entry = decode_audit(&json!({
            "id": "4c32aa3f-55a1-4a0d-bb6c-0a88a823f012",
            "user_id": "system",
            "action": "INVITE",
            "resource_type": "user",
            "resource_id": "admin-1",
            "details": "Invited new team member: John Doe (john@example.com)",
            "created_at": "2024-01-15T10:30:00Z",
        }))
        .unwrap();

        assert_eq!(entry.user_id, None);
        assert_eq!(entry.action.to_string(), "INVITE");
    }
}
