use serde::{Deserialize, Serialize};

/// Identifier wrapper for advised users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for catalog universities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversityId(pub String);

/// Progress of a standardized test (IELTS, GRE) on the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TestStatus {
    pub(crate) fn parse(value: &str) -> Self {
        match value.trim() {
            "completed" => Self::Completed,
            "in_progress" => Self::InProgress,
            _ => Self::NotStarted,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TestStatus::NotStarted => "not_started",
            TestStatus::InProgress => "in_progress",
            TestStatus::Completed => "completed",
        }
    }
}

/// Progress of the Statement of Purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SopStatus {
    NotStarted,
    Draft,
    Ready,
}

impl SopStatus {
    pub(crate) fn parse(value: &str) -> Self {
        match value.trim() {
            "draft" => Self::Draft,
            "ready" => Self::Ready,
            _ => Self::NotStarted,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SopStatus::NotStarted => "not_started",
            SopStatus::Draft => "draft",
            SopStatus::Ready => "ready",
        }
    }
}

/// Qualitative readiness rating for one profile dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthRating {
    Weak,
    Average,
    Strong,
}

impl StrengthRating {
    pub const fn label(self) -> &'static str {
        match self {
            StrengthRating::Weak => "weak",
            StrengthRating::Average => "average",
            StrengthRating::Strong => "strong",
        }
    }
}

/// Admission-difficulty bucket for a (profile, university) pair.
///
/// The score band strategy reports this as reach/target/safe; shortlist rows
/// historically store the same buckets as dream/target/safe. Both label views
/// are kept so either surface can render without re-mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitCategory {
    Reach,
    Target,
    Safe,
}

impl FitCategory {
    pub const fn label(self) -> &'static str {
        match self {
            FitCategory::Reach => "reach",
            FitCategory::Target => "target",
            FitCategory::Safe => "safe",
        }
    }

    pub const fn shortlist_label(self) -> &'static str {
        match self {
            FitCategory::Reach => "dream",
            FitCategory::Target => "target",
            FitCategory::Safe => "safe",
        }
    }
}

/// Coarse admission likelihood, cruder than the numeric fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceChance {
    Low,
    Medium,
    High,
}

impl AcceptanceChance {
    pub const fn label(self) -> &'static str {
        match self {
            AcceptanceChance::Low => "low",
            AcceptanceChance::Medium => "medium",
            AcceptanceChance::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Exam,
    Document,
    Research,
    Application,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// The typed, parse-checked profile the engine consumes.
///
/// Numeric fields that arrive as free-text form input are `Option`s: an
/// unparseable or blank value is absent, never silently zero, so downstream
/// comparisons branch explicitly on presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub education_level: String,
    pub degree: String,
    pub major: String,
    pub graduation_year: Option<u16>,
    pub gpa: Option<f32>,
    pub intended_degree: String,
    pub field_of_study: String,
    pub intake_year: Option<u16>,
    pub preferred_countries: Vec<String>,
    pub budget_min: Option<u32>,
    pub budget_max: Option<u32>,
    pub funding_plan: String,
    pub ielts_status: TestStatus,
    pub ielts_score: Option<f32>,
    pub gre_status: TestStatus,
    pub gre_score: Option<u16>,
    pub sop_status: SopStatus,
}

impl StudentProfile {
    /// Convert the raw onboarding form payload into a typed profile.
    pub fn from_answers(answers: &OnboardingAnswers) -> Self {
        Self {
            education_level: answers.education_level.trim().to_string(),
            degree: answers.degree.trim().to_string(),
            major: answers.major.trim().to_string(),
            graduation_year: parse_integer(answers.graduation_year.as_deref()),
            gpa: parse_decimal(answers.gpa.as_deref()),
            intended_degree: answers.intended_degree.trim().to_string(),
            field_of_study: answers.field_of_study.trim().to_string(),
            intake_year: parse_integer(answers.intake_year.as_deref()),
            preferred_countries: answers
                .preferred_countries
                .iter()
                .map(|country| country.trim().to_string())
                .filter(|country| !country.is_empty())
                .collect(),
            budget_min: parse_integer(answers.budget_min.as_deref()),
            budget_max: parse_integer(answers.budget_max.as_deref()),
            funding_plan: answers.funding_plan.trim().to_string(),
            ielts_status: TestStatus::parse(&answers.ielts_status),
            ielts_score: parse_decimal(answers.ielts_score.as_deref()),
            gre_status: TestStatus::parse(&answers.gre_status),
            gre_score: parse_integer(answers.gre_score.as_deref()),
            sop_status: SopStatus::parse(&answers.sop_status),
        }
    }
}

/// Raw, string-typed onboarding submission as posted by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnswers {
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub graduation_year: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub intended_degree: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub intake_year: Option<String>,
    #[serde(default)]
    pub preferred_countries: Vec<String>,
    #[serde(default)]
    pub budget_min: Option<String>,
    #[serde(default)]
    pub budget_max: Option<String>,
    #[serde(default)]
    pub funding_plan: String,
    #[serde(default)]
    pub ielts_status: String,
    #[serde(default)]
    pub ielts_score: Option<String>,
    #[serde(default)]
    pub gre_status: String,
    #[serde(default)]
    pub gre_score: Option<String>,
    #[serde(default)]
    pub sop_status: String,
}

/// Catalog entry, read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub ranking: Option<u16>,
    pub min_gpa: f32,
    pub min_ielts: Option<f32>,
    pub min_gre: Option<u16>,
    pub tuition_min: u32,
    pub tuition_max: u32,
    pub living_cost: u32,
    pub acceptance_rate: f32,
    pub website: String,
    pub description: String,
}

/// Per-dimension readiness ratings, always recomputed from source fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStrength {
    pub academic: StrengthRating,
    pub exam: StrengthRating,
    pub sop: StrengthRating,
}

/// Starter checklist item produced by the task generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: TaskPriority,
}

/// The four derived fields stored on a shortlist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistAssessment {
    pub category: FitCategory,
    pub fit_reason: String,
    pub risks: String,
    pub acceptance_chance: AcceptanceChance,
}

pub(crate) fn parse_decimal(raw: Option<&str>) -> Option<f32> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f32>().ok().filter(|parsed| parsed.is_finite())
}

pub(crate) fn parse_integer<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<T>().ok()
}
