use crate::recurrence::RecurrenceKind;
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One dated instance of a committee meeting, recurring or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingOccurrence {
    pub id: ID,
    /// Shared by every occurrence of the same series and equal to the series
    /// anchor's own id. `None` only between the anchor insert and the
    /// relabel step; a fully created series never exposes it to readers.
    pub group_id: Option<ID>,
    pub title: String,
    pub location: String,
    pub scheduled_at: DateTime<Utc>,
    pub recurrence_kind: RecurrenceKind,
    /// Inclusive calendar-day bound used when the series was generated.
    /// Kept for reference, never re-evaluated afterwards.
    pub recurrence_end_date: Option<NaiveDate>,
}

impl MeetingOccurrence {
    pub fn is_recurring(&self) -> bool {
        self.recurrence_kind.is_recurring()
    }
}

impl Entity for MeetingOccurrence {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Whether a delete targets one occurrence or the whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionScope {
    Single,
    Series,
}
