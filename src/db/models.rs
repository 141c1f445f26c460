use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Coarse permission tag attached to every user. Stored as text in the
/// `users.role` column; only these three spellings are ever accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Captain,
    Owner,
    Authority,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Captain => "captain",
            Role::Owner => "owner",
            Role::Authority => "authority",
        }
    }

    /// Whether this role is allowed to register boats.
    pub fn can_register_boats(&self) -> bool {
        matches!(self, Role::Captain | Role::Owner)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Captain
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "captain" => Ok(Role::Captain),
            "owner" => Ok(Role::Owner),
            "authority" => Ok(Role::Authority),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

// The role column is plain TEXT; decoding refuses spellings outside the
// enumeration rather than defaulting them away.
impl sqlx::Type<sqlx::Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Role {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(raw.parse::<Role>()?)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub mobile_number: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a user; id and created_at come from the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub mobile_number: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Clone, FromRow)]
pub struct Boat {
    pub id: i64,
    pub name: String,
    pub registration: Option<String>,
    pub boat_type: Option<String>,
    pub length_m: Option<i32>,
    pub home_port: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBoat {
    pub name: String,
    pub registration: Option<String>,
    pub boat_type: Option<String>,
    pub length_m: Option<i32>,
    pub home_port: Option<String>,
}
