use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::category::CategoryStrategy;
use super::chance::acceptance_chance;
use super::domain::{
    AcceptanceChance, FitCategory, ProfileStrength, ShortlistAssessment, StudentProfile,
    TaskDraft, University, UniversityId, UserId,
};
use super::engine::{EngineConfig, MatchEngine, MatchOutcome};
use super::explain;
use super::repository::{
    RepositoryError, ShortlistRecord, ShortlistRepository, ShortlistView, TaskRecord,
    TaskRepository,
};
use super::tasks::generate_initial_tasks;

/// Service composing the match engine, category strategy, and storage seams.
pub struct AdvisingService<S, T> {
    shortlist: Arc<S>,
    tasks: Arc<T>,
    engine: MatchEngine,
    strategy: Arc<dyn CategoryStrategy>,
}

impl<S, T> AdvisingService<S, T>
where
    S: ShortlistRepository + 'static,
    T: TaskRepository + 'static,
{
    pub fn new(
        shortlist: Arc<S>,
        tasks: Arc<T>,
        config: EngineConfig,
        strategy: Arc<dyn CategoryStrategy>,
    ) -> Self {
        Self {
            shortlist,
            tasks,
            engine: MatchEngine::new(config),
            strategy,
        }
    }

    /// Score one university for a caller that may not have a profile yet.
    pub fn match_outcome(
        &self,
        profile: Option<&StudentProfile>,
        university: &University,
    ) -> MatchOutcome {
        self.engine.score(profile, university)
    }

    /// Compute the four derived shortlist fields for one university.
    pub fn assess(&self, profile: &StudentProfile, university: &University) -> ShortlistAssessment {
        let outcome = self.engine.score(Some(profile), university);
        let category = self
            .strategy
            .classify(profile, university, outcome.score);

        ShortlistAssessment {
            category,
            fit_reason: explain::fit_reasons(profile, university),
            risks: explain::risks(profile, university),
            acceptance_chance: acceptance_chance(profile.gpa, university),
        }
    }

    /// Assess and upsert a shortlist row for the user.
    pub fn shortlist(
        &self,
        user: &UserId,
        profile: &StudentProfile,
        university: &University,
    ) -> Result<ShortlistRecord, AdvisingServiceError> {
        let assessment = self.assess(profile, university);
        let record = ShortlistRecord {
            user_id: user.clone(),
            university_id: university.id.clone(),
            assessment,
        };

        let stored = self.shortlist.upsert(record)?;
        info!(
            user = %stored.user_id.0,
            university = %stored.university_id.0,
            category = stored.assessment.category.shortlist_label(),
            "shortlist row stored"
        );
        Ok(stored)
    }

    pub fn remove(
        &self,
        user: &UserId,
        university: &UniversityId,
    ) -> Result<(), AdvisingServiceError> {
        self.shortlist.remove(user, university)?;
        info!(user = %user.0, university = %university.0, "shortlist row removed");
        Ok(())
    }

    /// List the user's shortlist rows in their sanitized view form.
    pub fn shortlist_views(
        &self,
        user: &UserId,
    ) -> Result<Vec<ShortlistView>, AdvisingServiceError> {
        let records = self.shortlist.for_user(user)?;
        Ok(records.iter().map(ShortlistRecord::view).collect())
    }

    /// Store an already-validated shortlist payload surfaced by the chat layer.
    pub fn apply_shortlist_action(
        &self,
        action: ShortlistAction,
    ) -> Result<ShortlistRecord, AdvisingServiceError> {
        let record = ShortlistRecord {
            user_id: action.user_id,
            university_id: action.university_id,
            assessment: ShortlistAssessment {
                category: action.category,
                fit_reason: action.fit_reason,
                risks: action.risks,
                acceptance_chance: action.acceptance_chance,
            },
        };
        Ok(self.shortlist.upsert(record)?)
    }

    /// Insert the starter checklist when the user has no tasks yet.
    ///
    /// Returns the drafts inserted; an empty vec means the user already had
    /// tasks and nothing was written.
    pub fn bootstrap_tasks(
        &self,
        user: &UserId,
        profile: &StudentProfile,
    ) -> Result<Vec<TaskDraft>, AdvisingServiceError> {
        let existing = self.tasks.count_for_user(user)?;
        if existing > 0 {
            debug!(user = %user.0, existing, "starter checklist skipped");
            return Ok(Vec::new());
        }

        let drafts = generate_initial_tasks(profile);
        let records = drafts
            .iter()
            .cloned()
            .map(|draft| TaskRecord::from_draft(user.clone(), draft))
            .collect();
        self.tasks.insert_batch(records)?;

        info!(user = %user.0, count = drafts.len(), "starter checklist created");
        Ok(drafts)
    }

    /// Recompute the derived strength ratings; called on every profile save.
    pub fn profile_strength(&self, profile: &StudentProfile) -> ProfileStrength {
        ProfileStrength::derive(profile)
    }

    pub fn engine_config(&self) -> &EngineConfig {
        self.engine.config()
    }
}

/// Chat-layer action payload, validated before it reaches this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistAction {
    pub user_id: UserId,
    pub university_id: UniversityId,
    pub category: FitCategory,
    pub fit_reason: String,
    pub risks: String,
    pub acceptance_chance: AcceptanceChance,
}

/// Error raised by the advising service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
