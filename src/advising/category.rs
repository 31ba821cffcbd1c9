use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{FitCategory, StudentProfile, University};

/// Categorization strategy chosen explicitly by the caller.
///
/// Two strategies are kept side by side because they answer the question from
/// different angles: `ScoreBand` buckets the numeric fit score, while
/// `RequirementCount` counts hard requirements met. They can disagree for the
/// same inputs; callers must pick one and must not assume the outputs line up.
pub trait CategoryStrategy: Send + Sync {
    fn classify(
        &self,
        profile: &StudentProfile,
        university: &University,
        score: u8,
    ) -> FitCategory;
}

/// Buckets the numeric fit score: below 40 is a reach, 75 and above is safe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub target_floor: u8,
    pub safe_floor: u8,
}

impl Default for ScoreBand {
    fn default() -> Self {
        Self {
            target_floor: 40,
            safe_floor: 75,
        }
    }
}

impl ScoreBand {
    pub fn band(&self, score: u8) -> FitCategory {
        if score < self.target_floor {
            FitCategory::Reach
        } else if score < self.safe_floor {
            FitCategory::Target
        } else {
            FitCategory::Safe
        }
    }
}

impl CategoryStrategy for ScoreBand {
    fn classify(
        &self,
        _profile: &StudentProfile,
        _university: &University,
        score: u8,
    ) -> FitCategory {
        self.band(score)
    }
}

/// Counts hard requirements met against the university's published minimums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementCount {
    pub safe_acceptance_rate: f32,
}

impl Default for RequirementCount {
    fn default() -> Self {
        Self {
            safe_acceptance_rate: 30.0,
        }
    }
}

impl RequirementCount {
    pub fn categorize(&self, profile: &StudentProfile, university: &University) -> FitCategory {
        // Missing GPA and English scores count as zero here; a missing budget
        // cannot satisfy the tuition check.
        let gpa_met = profile.gpa.unwrap_or(0.0) >= university.min_gpa;
        let budget_met = profile
            .budget_max
            .map(|budget| university.tuition_max <= budget)
            .unwrap_or(false);
        let english_met =
            profile.ielts_score.unwrap_or(0.0) >= university.min_ielts.unwrap_or(0.0);

        let matched = [gpa_met, budget_met, english_met]
            .iter()
            .filter(|met| **met)
            .count();

        if matched == 3 && university.acceptance_rate > self.safe_acceptance_rate {
            FitCategory::Safe
        } else if matched >= 2 {
            FitCategory::Target
        } else {
            FitCategory::Reach
        }
    }
}

impl CategoryStrategy for RequirementCount {
    fn classify(
        &self,
        profile: &StudentProfile,
        university: &University,
        _score: u8,
    ) -> FitCategory {
        self.categorize(profile, university)
    }
}

/// Named strategy selection for configuration and CLI surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    ScoreBand,
    RequirementCount,
}

impl StrategyKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "score-band" | "score_band" => Some(Self::ScoreBand),
            "requirement-count" | "requirement_count" => Some(Self::RequirementCount),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StrategyKind::ScoreBand => "score-band",
            StrategyKind::RequirementCount => "requirement-count",
        }
    }

    pub fn strategy(self) -> Arc<dyn CategoryStrategy> {
        match self {
            StrategyKind::ScoreBand => Arc::new(ScoreBand::default()),
            StrategyKind::RequirementCount => Arc::new(RequirementCount::default()),
        }
    }
}
