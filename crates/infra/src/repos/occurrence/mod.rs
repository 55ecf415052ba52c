mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryOccurrenceRepo;
pub use postgres::PostgresOccurrenceRepo;
use quorum_domain::{MeetingOccurrence, ID};

#[async_trait::async_trait]
pub trait IOccurrenceRepo: Send + Sync {
    async fn insert(&self, occurrence: &MeetingOccurrence) -> anyhow::Result<()>;
    /// Persists all given occurrences in one batched call.
    async fn insert_many(&self, occurrences: &[MeetingOccurrence]) -> anyhow::Result<()>;
    /// Relabels one occurrence with the group it belongs to. Fails if no
    /// occurrence with that id exists.
    async fn assign_group_id(&self, occurrence_id: &ID, group_id: &ID) -> anyhow::Result<()>;
    async fn find(&self, occurrence_id: &ID) -> Option<MeetingOccurrence>;
    /// All occurrences of a series, ordered by scheduled time.
    async fn find_by_group(&self, group_id: &ID) -> anyhow::Result<Vec<MeetingOccurrence>>;
    async fn delete(&self, occurrence_id: &ID) -> Option<MeetingOccurrence>;
    async fn delete_by_group(&self, group_id: &ID) -> anyhow::Result<DeleteResult>;
}
