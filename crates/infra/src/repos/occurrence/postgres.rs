use super::IOccurrenceRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{NaiveDate, TimeZone, Utc};
use quorum_domain::{MeetingOccurrence, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresOccurrenceRepo {
    pool: PgPool,
}

impl PostgresOccurrenceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OccurrenceRaw {
    occurrence_uid: Uuid,
    group_uid: Option<Uuid>,
    title: String,
    location: String,
    scheduled_at: i64,
    recurrence_kind: String,
    recurrence_end_date: Option<String>,
}

impl Into<MeetingOccurrence> for OccurrenceRaw {
    fn into(self) -> MeetingOccurrence {
        MeetingOccurrence {
            id: self.occurrence_uid.into(),
            group_id: self.group_uid.map(|group_uid| group_uid.into()),
            title: self.title,
            location: self.location,
            scheduled_at: Utc.timestamp_millis(self.scheduled_at),
            recurrence_kind: self.recurrence_kind.parse().unwrap(),
            recurrence_end_date: self
                .recurrence_end_date
                .map(|date| NaiveDate::parse_from_str(&date, "%F").unwrap()),
        }
    }
}

fn format_end_date(end_date: &Option<NaiveDate>) -> Option<String> {
    end_date.map(|date| date.format("%F").to_string())
}

#[async_trait::async_trait]
impl IOccurrenceRepo for PostgresOccurrenceRepo {
    async fn insert(&self, occurrence: &MeetingOccurrence) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO meeting_occurrences(
                occurrence_uid,
                group_uid,
                title,
                location,
                scheduled_at,
                recurrence_kind,
                recurrence_end_date
            )
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(occurrence.id.inner_ref())
        .bind(occurrence.group_id.as_ref().map(|id| *id.inner_ref()))
        .bind(&occurrence.title)
        .bind(&occurrence.location)
        .bind(occurrence.scheduled_at.timestamp_millis())
        .bind(occurrence.recurrence_kind.to_string())
        .bind(format_end_date(&occurrence.recurrence_end_date))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_many(&self, occurrences: &[MeetingOccurrence]) -> anyhow::Result<()> {
        if occurrences.is_empty() {
            return Ok(());
        }

        let mut occurrence_uids = Vec::with_capacity(occurrences.len());
        let mut group_uids = Vec::with_capacity(occurrences.len());
        let mut titles = Vec::with_capacity(occurrences.len());
        let mut locations = Vec::with_capacity(occurrences.len());
        let mut scheduled_ats = Vec::with_capacity(occurrences.len());
        let mut recurrence_kinds = Vec::with_capacity(occurrences.len());
        let mut recurrence_end_dates = Vec::with_capacity(occurrences.len());
        for occurrence in occurrences {
            occurrence_uids.push(*occurrence.id.inner_ref());
            group_uids.push(occurrence.group_id.as_ref().map(|id| *id.inner_ref()));
            titles.push(occurrence.title.clone());
            locations.push(occurrence.location.clone());
            scheduled_ats.push(occurrence.scheduled_at.timestamp_millis());
            recurrence_kinds.push(occurrence.recurrence_kind.to_string());
            recurrence_end_dates.push(format_end_date(&occurrence.recurrence_end_date));
        }

        sqlx::query(
            r#"
            INSERT INTO meeting_occurrences(
                occurrence_uid,
                group_uid,
                title,
                location,
                scheduled_at,
                recurrence_kind,
                recurrence_end_date
            )
            SELECT * FROM UNNEST(
                $1::uuid[],
                $2::uuid[],
                $3::text[],
                $4::text[],
                $5::bigint[],
                $6::text[],
                $7::text[]
            )
            "#,
        )
        .bind(&occurrence_uids)
        .bind(&group_uids)
        .bind(&titles)
        .bind(&locations)
        .bind(&scheduled_ats)
        .bind(&recurrence_kinds)
        .bind(&recurrence_end_dates)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn assign_group_id(&self, occurrence_id: &ID, group_id: &ID) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE meeting_occurrences
            SET group_uid = $2
            WHERE occurrence_uid = $1
            "#,
        )
        .bind(occurrence_id.inner_ref())
        .bind(group_id.inner_ref())
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            anyhow::bail!(
                "No meeting occurrence with id: {} to assign a group to",
                occurrence_id
            );
        }
        Ok(())
    }

    async fn find(&self, occurrence_id: &ID) -> Option<MeetingOccurrence> {
        let occurrence = match sqlx::query_as::<_, OccurrenceRaw>(
            r#"
            SELECT * FROM meeting_occurrences AS o
            WHERE o.occurrence_uid = $1
            "#,
        )
        .bind(occurrence_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(occurrence) => occurrence,
            Err(_) => return None,
        };
        Some(occurrence.into())
    }

    async fn find_by_group(&self, group_id: &ID) -> anyhow::Result<Vec<MeetingOccurrence>> {
        let occurrences = sqlx::query_as::<_, OccurrenceRaw>(
            r#"
            SELECT * FROM meeting_occurrences AS o
            WHERE o.group_uid = $1
            ORDER BY o.scheduled_at
            "#,
        )
        .bind(group_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(occurrences.into_iter().map(|o| o.into()).collect())
    }

    async fn delete(&self, occurrence_id: &ID) -> Option<MeetingOccurrence> {
        match sqlx::query_as::<_, OccurrenceRaw>(
            r#"
            DELETE FROM meeting_occurrences AS o
            WHERE o.occurrence_uid = $1
            RETURNING *
            "#,
        )
        .bind(occurrence_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(occurrence) => Some(occurrence.into()),
            Err(_) => None,
        }
    }

    async fn delete_by_group(&self, group_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM meeting_occurrences AS o
            WHERE o.group_uid = $1
            "#,
        )
        .bind(group_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
