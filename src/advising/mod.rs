//! Fit scoring and recommendation engine for study-abroad advising.
//!
//! Everything below the service facade is a pure function over in-memory
//! records: the persistence and chat layers supply resolved profiles and
//! catalog rows, and consume the derived fields this module computes.

pub mod category;
pub mod chance;
pub mod domain;
pub mod engine;
pub mod explain;
pub mod repository;
pub mod service;
pub mod strength;
pub mod tasks;

#[cfg(test)]
mod tests;

pub use category::{CategoryStrategy, RequirementCount, ScoreBand};
pub use chance::acceptance_chance;
pub use domain::{
    AcceptanceChance, FitCategory, OnboardingAnswers, ProfileStrength, ShortlistAssessment,
    SopStatus, StrengthRating, StudentProfile, TaskCategory, TaskDraft, TaskPriority, TestStatus,
    University, UniversityId, UserId,
};
pub use engine::{EngineConfig, MatchEngine, MatchOutcome, ScoreComponent, ScoreFactor};
pub use explain::{fit_reasons, risks, NO_FIT_SIGNALS, NO_RISKS};
pub use repository::{
    RepositoryError, ShortlistRecord, ShortlistRepository, ShortlistView, TaskRecord,
    TaskRepository,
};
pub use service::{AdvisingService, AdvisingServiceError, ShortlistAction};
pub use tasks::generate_initial_tasks;
