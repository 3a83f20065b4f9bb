//! Sequence inference engine
//!
//! Infers numbered file sequences from bare filenames: which digit run is
//! the frame counter, which files share a sequence skeleton, and where the
//! contiguous ranges break. No I/O happens here: callers hand in a
//! materialized list of basenames and get back one descriptor per sequence
//! family.

pub mod detector;
pub mod error;
pub mod formatter;
pub mod grouper;
pub mod ranges;
pub mod report;
pub mod tokenizer;

// Re-export main types
pub use detector::{IncrementCandidate, detect};
pub use error::{Error, Result};
pub use formatter::{Placeholder, format_all, format_at};
pub use grouper::{SequenceGroup, group_files};
pub use ranges::{RangeBreak, collapse};
pub use report::{ScanReport, SequenceEntry, SequenceMetadata, scan};
pub use tokenizer::{FilenameInfo, Span, tokenize};
