use crate::error::QuorumError;
use crate::shared::usecase::UseCase;
use quorum_domain::{DeletionScope, ID};
use quorum_infra::QuorumContext;

#[derive(Debug)]
pub struct DeleteMeetingUseCase {
    pub occurrence_id: ID,
    pub scope: DeletionScope,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for QuorumError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(occurrence_id) => Self::NotFound(format!(
                "The meeting occurrence with id: {}, was not found.",
                occurrence_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteMeetingUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteMeeting";

    async fn execute(&mut self, ctx: &QuorumContext) -> Result<Self::Response, Self::Error> {
        let occurrence = match ctx.repos.occurrences.find(&self.occurrence_id).await {
            Some(occurrence) => occurrence,
            None => return Err(UseCaseError::NotFound(self.occurrence_id.clone())),
        };

        if occurrence.is_recurring() && self.scope == DeletionScope::Series {
            // A fully persisted occurrence always carries its group label;
            // the anchor's own id doubles as a fallback.
            let group_id = occurrence
                .group_id
                .clone()
                .unwrap_or_else(|| occurrence.id.clone());
            ctx.repos
                .occurrences
                .delete_by_group(&group_id)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        } else {
            ctx.repos
                .occurrences
                .delete(&occurrence.id)
                .await
                .ok_or_else(|| UseCaseError::NotFound(self.occurrence_id.clone()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::meeting::CreateMeetingSeriesUseCase;
    use crate::shared::usecase::execute;
    use chrono::{NaiveDate, TimeZone, Utc};
    use quorum_domain::{MeetingOccurrence, RecurrenceKind};

    async fn create_biweekly_series(ctx: &QuorumContext) -> MeetingOccurrence {
        let usecase = CreateMeetingSeriesUseCase {
            title: "Steering committee".into(),
            location: "Boardroom".into(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 1, 1, 14, 0, 0).unwrap(),
            recurrence_kind: RecurrenceKind::Biweekly,
            // 4 occurrences: Jan 1, Jan 15, Jan 29 and Feb 12
            recurrence_end_date: Some(NaiveDate::from_ymd_opt(2025, 2, 12).unwrap()),
        };
        execute(usecase, ctx).await.unwrap()
    }

    #[tokio::test]
    async fn deletes_single_occurrence_from_series() {
        let ctx = QuorumContext::create_inmemory();
        let anchor = create_biweekly_series(&ctx).await;
        let group = ctx
            .repos
            .occurrences
            .find_by_group(&anchor.id)
            .await
            .unwrap();
        assert_eq!(group.len(), 4);

        let mut usecase = DeleteMeetingUseCase {
            occurrence_id: group[1].id.clone(),
            scope: DeletionScope::Single,
        };
        usecase.execute(&ctx).await.unwrap();

        let group = ctx
            .repos
            .occurrences
            .find_by_group(&anchor.id)
            .await
            .unwrap();
        assert_eq!(group.len(), 3);
        assert!(ctx.repos.occurrences.find(&usecase.occurrence_id).await.is_none());
    }

    #[tokio::test]
    async fn deletes_whole_series_from_any_member() {
        let ctx = QuorumContext::create_inmemory();
        let anchor = create_biweekly_series(&ctx).await;
        let group = ctx
            .repos
            .occurrences
            .find_by_group(&anchor.id)
            .await
            .unwrap();

        // Target a follow-up occurrence, not the anchor.
        let mut usecase = DeleteMeetingUseCase {
            occurrence_id: group[3].id.clone(),
            scope: DeletionScope::Series,
        };
        usecase.execute(&ctx).await.unwrap();

        let group = ctx
            .repos
            .occurrences
            .find_by_group(&anchor.id)
            .await
            .unwrap();
        assert!(group.is_empty());
        assert!(ctx.repos.occurrences.find(&anchor.id).await.is_none());
    }

    #[tokio::test]
    async fn series_scope_on_non_recurring_meeting_deletes_one_row() {
        let ctx = QuorumContext::create_inmemory();
        let usecase = CreateMeetingSeriesUseCase {
            title: "Kickoff".into(),
            location: "Online".into(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap(),
            recurrence_kind: RecurrenceKind::None,
            recurrence_end_date: None,
        };
        let anchor = execute(usecase, &ctx).await.unwrap();

        let mut usecase = DeleteMeetingUseCase {
            occurrence_id: anchor.id.clone(),
            scope: DeletionScope::Series,
        };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx.repos.occurrences.find(&anchor.id).await.is_none());
    }

    #[tokio::test]
    async fn rejects_unknown_occurrence_id() {
        let ctx = QuorumContext::create_inmemory();
        let mut usecase = DeleteMeetingUseCase {
            occurrence_id: ID::default(),
            scope: DeletionScope::Single,
        };

        let res = usecase.execute(&ctx).await;

        assert_eq!(
            res.unwrap_err(),
            UseCaseError::NotFound(usecase.occurrence_id)
        );
    }
}
