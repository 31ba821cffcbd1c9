mod config;
mod rules;

pub use config::EngineConfig;

use super::domain::{StudentProfile, University};
use serde::{Deserialize, Serialize};

/// Stateless engine applying the scoring rubric to a (profile, university) pair.
pub struct MatchEngine {
    config: EngineConfig,
}

impl MatchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the fit score for one university.
    ///
    /// A caller with no saved profile gets the neutral score with an empty
    /// component trail. Identical inputs always produce identical output.
    pub fn score(&self, profile: Option<&StudentProfile>, university: &University) -> MatchOutcome {
        let Some(profile) = profile else {
            return MatchOutcome {
                score: self.config.neutral_score,
                components: Vec::new(),
            };
        };

        let (components, adjustment) = rules::score_adjustments(profile, university, &self.config);
        let raw = self.config.base_score + adjustment;
        let score = raw.clamp(self.config.min_score as i16, self.config.max_score as i16) as u8;

        MatchOutcome { score, components }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Attribute the rubric weighs when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreFactor {
    Academics,
    Budget,
    Selectivity,
}

/// Discrete contribution to a fit score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub delta: i16,
    pub notes: String,
}

/// Scoring output for one (profile, university) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}
