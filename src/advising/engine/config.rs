use serde::{Deserialize, Serialize};

/// Scoring weights and thresholds applied by the match engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub base_score: i16,
    pub neutral_score: u8,
    pub gpa_met_bonus: i16,
    pub gpa_shortfall_penalty: i16,
    pub gpa_tolerance: f32,
    pub budget_met_bonus: i16,
    pub budget_stretch_penalty: i16,
    pub budget_stretch_ratio: f32,
    pub selective_rate: f32,
    pub selective_penalty: i16,
    pub open_rate: f32,
    pub open_bonus: i16,
    pub min_score: u8,
    pub max_score: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_score: 70,
            neutral_score: 50,
            gpa_met_bonus: 15,
            gpa_shortfall_penalty: 20,
            gpa_tolerance: 0.5,
            budget_met_bonus: 10,
            budget_stretch_penalty: 15,
            budget_stretch_ratio: 0.8,
            selective_rate: 10.0,
            selective_penalty: 10,
            open_rate: 40.0,
            open_bonus: 5,
            min_score: 5,
            max_score: 99,
        }
    }
}
