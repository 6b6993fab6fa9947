//! Database entity models for wash-ledger.
//!
//! This module contains the Sea-ORM entity definitions for the two relations
//! the ledger persists: play sessions and recorded scores. These entities
//! define the database schema and provide the data structures used by the
//! components to interact with the store.

/// Recorded score entity model.
pub mod score;

/// Play session entity model.
pub mod session;
