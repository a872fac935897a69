//! Domain layer - Entry model and input validation

pub mod entry;
pub mod form;
pub mod kind;

pub use entry::{Coordinate, Entry, EntryId, EntryMetrics, KindInput};
pub use form::{RawForm, ValidatedForm};
pub use kind::EntryKind;
