mod meeting;
mod recurrence;
mod shared;

pub use meeting::{DeletionScope, MeetingOccurrence};
pub use recurrence::{expand_occurrences, InvalidRecurrenceKindError, RecurrenceKind};
pub use shared::entity::{Entity, ID};
