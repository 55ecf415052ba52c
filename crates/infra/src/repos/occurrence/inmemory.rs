use super::IOccurrenceRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use quorum_domain::{MeetingOccurrence, ID};

pub struct InMemoryOccurrenceRepo {
    occurrences: std::sync::Mutex<Vec<MeetingOccurrence>>,
}

impl InMemoryOccurrenceRepo {
    pub fn new() -> Self {
        Self {
            occurrences: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IOccurrenceRepo for InMemoryOccurrenceRepo {
    async fn insert(&self, occurrence: &MeetingOccurrence) -> anyhow::Result<()> {
        insert(occurrence, &self.occurrences);
        Ok(())
    }

    async fn insert_many(&self, occurrences: &[MeetingOccurrence]) -> anyhow::Result<()> {
        for occurrence in occurrences {
            insert(occurrence, &self.occurrences);
        }
        Ok(())
    }

    async fn assign_group_id(&self, occurrence_id: &ID, group_id: &ID) -> anyhow::Result<()> {
        if find(occurrence_id, &self.occurrences).is_none() {
            anyhow::bail!(
                "No meeting occurrence with id: {} to assign a group to",
                occurrence_id
            );
        }
        update_many(
            &self.occurrences,
            |occurrence| occurrence.id == *occurrence_id,
            |occurrence| occurrence.group_id = Some(group_id.clone()),
        );
        Ok(())
    }

    async fn find(&self, occurrence_id: &ID) -> Option<MeetingOccurrence> {
        find(occurrence_id, &self.occurrences)
    }

    async fn find_by_group(&self, group_id: &ID) -> anyhow::Result<Vec<MeetingOccurrence>> {
        let mut occurrences = find_by(&self.occurrences, |occurrence| {
            occurrence.group_id.as_ref() == Some(group_id)
        });
        occurrences.sort_by_key(|occurrence| occurrence.scheduled_at);
        Ok(occurrences)
    }

    async fn delete(&self, occurrence_id: &ID) -> Option<MeetingOccurrence> {
        delete(occurrence_id, &self.occurrences)
    }

    async fn delete_by_group(&self, group_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.occurrences, |occurrence| {
            occurrence.group_id.as_ref() == Some(group_id)
        }))
    }
}
