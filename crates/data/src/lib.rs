//! File persistence for position snapshots.
//!
//! The core never touches the filesystem; this crate is the persistence
//! collaborator that consumes `PositionSnapshot` records and writes them as
//! human-inspectable JSON. Decimal fields serialize as textual numbers, so
//! a save/load round-trip preserves numeric precision exactly.

pub mod snapshot_file;

pub use snapshot_file::{PersistError, SnapshotFile};
