//! Deduplicating filter pass over a stream of variant files.
//!
//! Files are ingested one at a time; each is keyed by its plain
//! logical path (derived directory components and file-name tokens
//! rewritten to their roots). A derived file is kept only when its
//! dimensional tokens perfectly match the active selectors, the
//! highest-scoring match per key winning; a plain file never displaces
//! a match. Finalizing the pass emits exactly one record per key, its
//! path rewritten to the logical plain path.
//!
//! Ingest and finalize are two explicit phases: `ingest` borrows the
//! pass mutably and `finalize` consumes it, so every ingest has
//! completed before finalize can run.

pub use self::error::{Error, Result};
pub use self::pass::FilterPass;
pub use self::record::FileRecord;
pub use self::sink::write_records;
pub use self::walk::ingest_tree;

mod error;
mod pass;
mod record;
mod sink;
mod walk;
