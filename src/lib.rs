//! Meeting-series core of the quorum committee-management application.
//!
//! Expands a recurrence rule into a bounded series of dated occurrences,
//! persists the series as one group or not at all, and deletes either a
//! single occurrence or a whole series.

pub use quorum_core::meeting::{
    create_meeting_series, delete_meeting, CreateMeetingSeriesUseCase, DeleteMeetingUseCase,
};
pub use quorum_core::{execute, QuorumError, UseCase};
pub use quorum_domain::{
    expand_occurrences, DeletionScope, Entity, MeetingOccurrence, RecurrenceKind, ID,
};
pub use quorum_infra::{
    run_migration, setup_context, Config, DeleteResult, IOccurrenceRepo, QuorumContext, Repos,
};
