use super::super::domain::{StudentProfile, University};
use super::config::EngineConfig;
use super::{ScoreComponent, ScoreFactor};

pub(crate) fn score_adjustments(
    profile: &StudentProfile,
    university: &University,
    config: &EngineConfig,
) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let mut adjustment: i16 = 0;

    if let Some(gpa) = profile.gpa {
        if university.min_gpa > 0.0 {
            if gpa >= university.min_gpa {
                components.push(ScoreComponent {
                    factor: ScoreFactor::Academics,
                    delta: config.gpa_met_bonus,
                    notes: format!(
                        "GPA {gpa} meets the minimum {}",
                        university.min_gpa
                    ),
                });
                adjustment += config.gpa_met_bonus;
            } else if gpa < university.min_gpa - config.gpa_tolerance {
                components.push(ScoreComponent {
                    factor: ScoreFactor::Academics,
                    delta: -config.gpa_shortfall_penalty,
                    notes: format!(
                        "GPA {gpa} falls more than {} below the minimum {}",
                        config.gpa_tolerance, university.min_gpa
                    ),
                });
                adjustment -= config.gpa_shortfall_penalty;
            } else {
                components.push(ScoreComponent {
                    factor: ScoreFactor::Academics,
                    delta: 0,
                    notes: format!(
                        "GPA {gpa} is within {} of the minimum {}",
                        config.gpa_tolerance, university.min_gpa
                    ),
                });
            }
        }
    }

    if let Some(budget_max) = profile.budget_max {
        let stretch_floor = university.tuition_max as f32 * config.budget_stretch_ratio;
        if budget_max >= university.tuition_max {
            components.push(ScoreComponent {
                factor: ScoreFactor::Budget,
                delta: config.budget_met_bonus,
                notes: format!(
                    "budget {budget_max} covers tuition up to {}",
                    university.tuition_max
                ),
            });
            adjustment += config.budget_met_bonus;
        } else if (budget_max as f32) < stretch_floor {
            components.push(ScoreComponent {
                factor: ScoreFactor::Budget,
                delta: -config.budget_stretch_penalty,
                notes: format!(
                    "budget {budget_max} is under {:.0}% of tuition {}",
                    config.budget_stretch_ratio * 100.0,
                    university.tuition_max
                ),
            });
            adjustment -= config.budget_stretch_penalty;
        } else {
            components.push(ScoreComponent {
                factor: ScoreFactor::Budget,
                delta: 0,
                notes: format!(
                    "budget {budget_max} is a manageable stretch against tuition {}",
                    university.tuition_max
                ),
            });
        }
    }

    if university.acceptance_rate < config.selective_rate {
        components.push(ScoreComponent {
            factor: ScoreFactor::Selectivity,
            delta: -config.selective_penalty,
            notes: format!(
                "acceptance rate {}% marks a highly selective school",
                university.acceptance_rate
            ),
        });
        adjustment -= config.selective_penalty;
    } else if university.acceptance_rate > config.open_rate {
        components.push(ScoreComponent {
            factor: ScoreFactor::Selectivity,
            delta: config.open_bonus,
            notes: format!(
                "acceptance rate {}% leaves room to get in",
                university.acceptance_rate
            ),
        });
        adjustment += config.open_bonus;
    }

    (components, adjustment)
}
