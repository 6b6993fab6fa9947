//! Score entity model for Sea-ORM database interaction.
//!
//! Maps to the `scores` table. Rows are created by `ScoreLedger` and are
//! immutable once written; the leaderboard query only ever reads them.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Sea-ORM entity model representing a recorded score.
///
/// Every row corresponds to at most one consumed session; the submission
/// protocol enforces this rather than a foreign key, so sessions and scores
/// stay decoupled after consumption.
///
/// # Database Schema
///
/// | Column      | Type                  | Description                        |
/// |-------------|-----------------------|------------------------------------|
/// | id          | BIGINT (Primary Key)  | Strictly increasing identifier     |
/// | location_id | TEXT                  | Kiosk the score was achieved at    |
/// | value       | INTEGER               | Score value, within [0, 1_000_000] |
/// | nickname    | TEXT (Nullable)       | Player nickname, at most 24 chars  |
/// | created_at  | TIMESTAMPTZ           | Server-assigned insert time        |
///
/// The model serializes with camelCase field names so the boundary layer can
/// return leaderboard entries directly.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "scores")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Auto-assigned durable identifier, also the final ranking tie-break.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Identifier of the kiosk the score was achieved at.
    pub location_id: String,

    /// The clamped, truncated score value.
    pub value: i32,

    /// Optional player nickname, trimmed and truncated on submission.
    pub nickname: Option<String>,

    /// When the ledger recorded the score.
    pub created_at: DateTimeWithTimeZone,
}

/// Required enum for Sea-ORM entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
