use serde::{Deserialize, Serialize};

use super::domain::{
    ShortlistAssessment, TaskCategory, TaskDraft, TaskPriority, UniversityId, UserId,
};

/// Shortlist row keyed by (user, university). Owned by the persistence layer;
/// this crate only computes the derived assessment fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistRecord {
    pub user_id: UserId,
    pub university_id: UniversityId,
    pub assessment: ShortlistAssessment,
}

impl ShortlistRecord {
    pub fn view(&self) -> ShortlistView {
        ShortlistView {
            university_id: self.university_id.clone(),
            category: self.assessment.category.shortlist_label(),
            acceptance_chance: self.assessment.acceptance_chance.label(),
            fit_reason: self.assessment.fit_reason.clone(),
            risks: self.assessment.risks.clone(),
        }
    }
}

/// Sanitized representation of a shortlist row for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistView {
    pub university_id: UniversityId,
    pub category: &'static str,
    pub acceptance_chance: &'static str,
    pub fit_reason: String,
    pub risks: String,
}

/// Storage abstraction so the service module can be exercised in isolation.
/// `upsert` inserts when absent and overwrites the derived fields otherwise.
pub trait ShortlistRepository: Send + Sync {
    fn upsert(&self, record: ShortlistRecord) -> Result<ShortlistRecord, RepositoryError>;
    fn fetch(
        &self,
        user: &UserId,
        university: &UniversityId,
    ) -> Result<Option<ShortlistRecord>, RepositoryError>;
    fn remove(&self, user: &UserId, university: &UniversityId) -> Result<(), RepositoryError>;
    fn for_user(&self, user: &UserId) -> Result<Vec<ShortlistRecord>, RepositoryError>;
}

/// Checklist item persisted for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub completed: bool,
}

impl TaskRecord {
    pub fn from_draft(user_id: UserId, draft: TaskDraft) -> Self {
        Self {
            user_id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            completed: false,
        }
    }
}

/// Task storage abstraction; the starter checklist is bulk-inserted once.
pub trait TaskRepository: Send + Sync {
    fn count_for_user(&self, user: &UserId) -> Result<usize, RepositoryError>;
    fn insert_batch(&self, records: Vec<TaskRecord>) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
