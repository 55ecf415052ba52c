mod create_meeting_series;
mod delete_meeting;

use crate::error::QuorumError;
use crate::shared::usecase::execute;
use chrono::{DateTime, NaiveDate, Utc};
pub use create_meeting_series::CreateMeetingSeriesUseCase;
pub use delete_meeting::DeleteMeetingUseCase;
use quorum_domain::{DeletionScope, MeetingOccurrence, RecurrenceKind, ID};
use quorum_infra::QuorumContext;

/// Creates a meeting and, when a recurrence rule is given, the rest of its
/// series. Returns the anchor occurrence carrying its final group id.
pub async fn create_meeting_series(
    ctx: &QuorumContext,
    title: String,
    scheduled_at: DateTime<Utc>,
    location: String,
    recurrence_kind: RecurrenceKind,
    recurrence_end_date: Option<NaiveDate>,
) -> Result<MeetingOccurrence, QuorumError> {
    let usecase = CreateMeetingSeriesUseCase {
        title,
        location,
        scheduled_at,
        recurrence_kind,
        recurrence_end_date,
    };

    execute(usecase, ctx).await.map_err(QuorumError::from)
}

/// Deletes one occurrence or, with [`DeletionScope::Series`], every
/// occurrence sharing the target's group id.
pub async fn delete_meeting(
    ctx: &QuorumContext,
    occurrence_id: ID,
    scope: DeletionScope,
) -> Result<(), QuorumError> {
    let usecase = DeleteMeetingUseCase {
        occurrence_id,
        scope,
    };

    execute(usecase, ctx).await.map_err(QuorumError::from)
}
