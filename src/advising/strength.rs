use super::domain::{ProfileStrength, SopStatus, StrengthRating, StudentProfile, TestStatus};

impl ProfileStrength {
    /// Derive the three readiness ratings from raw profile fields.
    ///
    /// Ratings are recomputed on every profile save; they are never edited
    /// directly. Missing values degrade to the weakest applicable rating,
    /// except academic strength where an absent GPA is reported as average
    /// rather than punishing an incomplete form.
    pub fn derive(profile: &StudentProfile) -> Self {
        Self {
            academic: academic_strength(profile.gpa),
            exam: exam_strength(profile),
            sop: sop_strength(profile.sop_status),
        }
    }
}

fn academic_strength(gpa: Option<f32>) -> StrengthRating {
    match gpa {
        Some(value) if value >= 3.7 => StrengthRating::Strong,
        Some(value) if value < 3.0 => StrengthRating::Weak,
        _ => StrengthRating::Average,
    }
}

fn exam_strength(profile: &StudentProfile) -> StrengthRating {
    let mut rating = StrengthRating::Weak;

    if profile.ielts_status == TestStatus::Completed {
        if let Some(score) = profile.ielts_score {
            if score >= 7.5 {
                rating = StrengthRating::Strong;
            } else if score >= 7.0 {
                rating = StrengthRating::Average;
            }
        }
    }

    // A strong GRE result wins regardless of the English-test rating.
    if profile.gre_status == TestStatus::Completed {
        if let Some(score) = profile.gre_score {
            if score >= 320 {
                rating = StrengthRating::Strong;
            }
        }
    }

    rating
}

fn sop_strength(status: SopStatus) -> StrengthRating {
    match status {
        SopStatus::NotStarted => StrengthRating::Weak,
        SopStatus::Draft => StrengthRating::Average,
        SopStatus::Ready => StrengthRating::Strong,
    }
}
