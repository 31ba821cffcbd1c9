use super::domain::{StudentProfile, University};

/// Emitted when no risk sentence applies.
pub const NO_RISKS: &str = "No major risks identified. Strong fit overall.";

/// Emitted when no fit sentence applies, so stored rows are never blank.
pub const NO_FIT_SIGNALS: &str = "No strong fit signals for this profile yet.";

/// Enumerate the reasons a university fits the profile, joined by ". ".
///
/// Every comparison branches on presence: a profile with no GPA or budget
/// simply produces no sentence for that dimension.
pub fn fit_reasons(profile: &StudentProfile, university: &University) -> String {
    let mut reasons = Vec::new();

    if let Some(gpa) = profile.gpa {
        if gpa >= university.min_gpa {
            reasons.push(format!(
                "Your GPA ({gpa}) meets the minimum requirement ({})",
                university.min_gpa
            ));
        }
    }

    if let Some(budget_max) = profile.budget_max {
        if university.tuition_max <= budget_max {
            reasons.push(format!(
                "Tuition fits within your budget (${}-{})",
                university.tuition_min, university.tuition_max
            ));
        }
    }

    if profile
        .preferred_countries
        .iter()
        .any(|country| country == &university.country)
    {
        reasons.push(format!(
            "Located in your preferred country ({})",
            university.country
        ));
    }

    if university.acceptance_rate > 20.0 {
        reasons.push(format!(
            "Reasonable acceptance rate ({}%)",
            university.acceptance_rate
        ));
    }

    if reasons.is_empty() {
        return NO_FIT_SIGNALS.to_string();
    }

    reasons.join(". ")
}

/// Enumerate the risks of targeting this university, joined by ". ".
pub fn risks(profile: &StudentProfile, university: &University) -> String {
    let mut risks = Vec::new();

    if let Some(gpa) = profile.gpa {
        if gpa < university.min_gpa {
            risks.push(format!(
                "GPA below minimum requirement (need {}, have {gpa})",
                university.min_gpa
            ));
        }
    }

    if let Some(budget_max) = profile.budget_max {
        if university.tuition_max > budget_max {
            risks.push("Tuition may exceed your budget".to_string());
        }
    }

    if university.acceptance_rate < 15.0 {
        risks.push(format!(
            "Highly competitive ({}% acceptance rate)",
            university.acceptance_rate
        ));
    }

    // Only evaluated when both scores are on file.
    if let (Some(score), Some(minimum)) = (profile.ielts_score, university.min_ielts) {
        if score < minimum {
            risks.push(format!(
                "IELTS score below requirement (need {minimum}, have {score})"
            ));
        }
    }

    if risks.is_empty() {
        return NO_RISKS.to_string();
    }

    risks.join(". ")
}
