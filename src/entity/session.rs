//! Play session entity model for Sea-ORM database interaction.
//!
//! This module defines the database schema representation for issued play
//! sessions. It provides the Sea-ORM entity definition that maps to the
//! `wash_sessions` table.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing an issued play session.
///
/// A session is a time-boxed, single-use authorization to submit one score
/// for one kiosk location. `SessionAuthority` creates these rows and is the
/// only component that transitions them to consumed.
///
/// # Database Schema
///
/// | Column      | Type                    | Description                         |
/// |-------------|-------------------------|-------------------------------------|
/// | id          | BIGINT (Primary Key)    | Durable session identifier          |
/// | location_id | TEXT                    | Physical kiosk the session is for   |
/// | token       | TEXT (Unique)           | Unguessable session credential      |
/// | created_at  | TIMESTAMPTZ             | Issue time                          |
/// | expires_at  | TIMESTAMPTZ             | Issue time plus the fixed TTL       |
/// | used_at     | TIMESTAMPTZ (Nullable)  | Consumption time, NULL while usable |
///
/// Expiry is computed against `expires_at` at the moment of consumption; no
/// state flag is stored for it. Once `used_at` is set it is never cleared.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wash_sessions")]
pub struct Model {
    /// Auto-assigned durable identifier.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Identifier of the physical kiosk this session was issued for.
    pub location_id: String,

    /// The unguessable credential identifying this session.
    ///
    /// Generated as a UUIDv4 string, unique across all sessions.
    #[sea_orm(unique)]
    pub token: String,

    /// When the session was issued.
    pub created_at: DateTimeWithTimeZone,

    /// When the session stops being consumable.
    pub expires_at: DateTimeWithTimeZone,

    /// When the session was consumed, or NULL if it never was.
    pub used_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    /// Whether this session could still be consumed at `now`.
    ///
    /// A session is consumable iff it has never been used and has not yet
    /// expired.
    pub fn is_consumable(&self, now: DateTimeWithTimeZone) -> bool {
        self.used_at.is_none() && now < self.expires_at
    }
}

/// Required enum for Sea-ORM entity relations.
///
/// Sessions and scores are deliberately decoupled after consumption, so this
/// entity has no relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn session_at(expires_in: Duration, used: bool) -> Model {
        let now = Utc::now();
        Model {
            id: 1,
            location_id: "bay-1".to_owned(),
            token: "token".to_owned(),
            created_at: now.into(),
            expires_at: (now + expires_in).into(),
            used_at: used.then(|| now.into()),
        }
    }

    #[test]
    fn fresh_session_is_consumable() {
        let session = session_at(Duration::minutes(10), false);
        assert!(session.is_consumable(Utc::now().into()));
    }

    #[test]
    fn used_session_is_not_consumable() {
        let session = session_at(Duration::minutes(10), true);
        assert!(!session.is_consumable(Utc::now().into()));
    }

    #[test]
    fn expired_session_is_not_consumable() {
        let session = session_at(Duration::minutes(-1), false);
        assert!(!session.is_consumable(Utc::now().into()));
    }
}
