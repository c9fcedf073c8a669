//! Roster normalization subsystem.
//!
//! # Data Flow
//! ```text
//! uploaded table (headers + rows) or JSON payload
//!     → columns.rs (detect which column holds which field)
//!     → builder.rs (row filtering, phone normalization, id derivation)
//!     → Roster (canonical teacher → students mapping, insertion order)
//!     → handed to callers by value; nothing is stored
//! ```
//!
//! # Design Decisions
//! - Pure, synchronous, single-pass; safe to call from any handler
//! - Mandatory columns (teacher, name) fail the whole build; bad rows
//!   are skipped silently (best-effort policy)
//! - Phone fields are digit strings only; display formatting is a
//!   separate presentation helper and never feeds back into the data

pub mod builder;
pub mod columns;
pub mod error;
pub mod phone;
pub mod types;

pub use builder::{build_roster, roster_from_json};
pub use columns::{detect_columns, ColumnMap, Field};
pub use error::RosterError;
pub use phone::{format_phone_for_display, normalize_phone};
pub use types::{Roster, StudentRecord, TeacherGroup};
