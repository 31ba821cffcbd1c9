use super::domain::{AcceptanceChance, University};

/// Estimate admission likelihood from the GPA ratio and acceptance rate.
///
/// A missing GPA counts as zero. A university publishing a minimum GPA of
/// zero (or below) leaves the ratio undefined; the estimate falls back to
/// low rather than dividing by zero.
pub fn acceptance_chance(gpa: Option<f32>, university: &University) -> AcceptanceChance {
    if university.min_gpa <= 0.0 {
        return AcceptanceChance::Low;
    }

    let gpa_ratio = gpa.unwrap_or(0.0) / university.min_gpa;
    let base_rate = university.acceptance_rate;

    if gpa_ratio > 1.2 && base_rate > 30.0 {
        AcceptanceChance::High
    } else if gpa_ratio >= 1.0 && base_rate > 15.0 {
        AcceptanceChance::Medium
    } else {
        AcceptanceChance::Low
    }
}
