use crate::error::QuorumError;
use crate::shared::usecase::UseCase;
use chrono::{DateTime, NaiveDate, Utc};
use quorum_domain::{expand_occurrences, MeetingOccurrence, RecurrenceKind, ID};
use quorum_infra::QuorumContext;
use tracing::warn;

#[derive(Debug)]
pub struct CreateMeetingSeriesUseCase {
    pub title: String,
    pub location: String,
    pub scheduled_at: DateTime<Utc>,
    pub recurrence_kind: RecurrenceKind,
    pub recurrence_end_date: Option<NaiveDate>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingEndDate,
    EndDateBeforeStart(NaiveDate),
    StorageError,
}

impl From<UseCaseError> for QuorumError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingEndDate => {
                Self::BadClientData("An end date is required for a recurring meeting".into())
            }
            UseCaseError::EndDateBeforeStart(end_date) => Self::BadClientData(format!(
                "The end date: {} is before the first scheduled occurrence",
                end_date
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateMeetingSeriesUseCase {
    type Response = MeetingOccurrence;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateMeetingSeries";

    async fn execute(&mut self, ctx: &QuorumContext) -> Result<Self::Response, Self::Error> {
        // Rejected before any persistence attempt.
        let end_date = match self.recurrence_kind {
            RecurrenceKind::None => None,
            _ => {
                let end_date = self
                    .recurrence_end_date
                    .ok_or(UseCaseError::MissingEndDate)?;
                if end_date < self.scheduled_at.date_naive() {
                    return Err(UseCaseError::EndDateBeforeStart(end_date));
                }
                Some(end_date)
            }
        };

        let mut anchor = MeetingOccurrence {
            id: Default::default(),
            // The group id is the anchor's own generated id, so it can only
            // be assigned once the first insert has happened.
            group_id: None,
            title: self.title.clone(),
            location: self.location.clone(),
            scheduled_at: self.scheduled_at,
            recurrence_kind: self.recurrence_kind,
            recurrence_end_date: end_date,
        };

        ctx.repos
            .occurrences
            .insert(&anchor)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let group_id = anchor.id.clone();
        if ctx
            .repos
            .occurrences
            .assign_group_id(&anchor.id, &group_id)
            .await
            .is_err()
        {
            rollback_series(ctx, &anchor.id, None).await;
            return Err(UseCaseError::StorageError);
        }
        anchor.group_id = Some(group_id.clone());

        let timestamps = match end_date {
            Some(end_date) => expand_occurrences(self.scheduled_at, self.recurrence_kind, end_date),
            None => Vec::new(),
        };
        if !timestamps.is_empty() {
            let followups = timestamps
                .into_iter()
                .map(|scheduled_at| MeetingOccurrence {
                    id: Default::default(),
                    group_id: Some(group_id.clone()),
                    title: self.title.clone(),
                    location: self.location.clone(),
                    scheduled_at,
                    recurrence_kind: self.recurrence_kind,
                    recurrence_end_date: end_date,
                })
                .collect::<Vec<_>>();

            if ctx
                .repos
                .occurrences
                .insert_many(&followups)
                .await
                .is_err()
            {
                rollback_series(ctx, &anchor.id, Some(&group_id)).await;
                return Err(UseCaseError::StorageError);
            }
        }

        Ok(anchor)
    }
}

/// Removes whatever part of a half-created series reached the store, so the
/// caller observes either a fully created series or none at all. Best-effort:
/// a cleanup that fails is logged and not retried.
async fn rollback_series(ctx: &QuorumContext, anchor_id: &ID, group_id: Option<&ID>) {
    match group_id {
        Some(group_id) => {
            if let Err(e) = ctx.repos.occurrences.delete_by_group(group_id).await {
                warn!(
                    "Unable to rollback meeting series with group id: {}. Error: {:?}",
                    group_id, e
                );
            }
        }
        None => {
            if ctx.repos.occurrences.delete(anchor_id).await.is_none() {
                warn!("Unable to rollback meeting occurrence with id: {}", anchor_id);
            }
        }
    }
}
