use super::domain::{SopStatus, StudentProfile, TaskCategory, TaskDraft, TaskPriority, TestStatus};

/// The GRE preparation task only applies to this intended degree.
const GRE_DEGREE: &str = "Master's";

/// Build the starter checklist for a freshly completed profile.
///
/// Order is fixed: exam tasks, then the SOP task, then the research task that
/// is always appended. The caller is responsible for invoking this only when
/// the user has no tasks yet.
pub fn generate_initial_tasks(profile: &StudentProfile) -> Vec<TaskDraft> {
    let mut tasks = Vec::new();

    if profile.ielts_status == TestStatus::NotStarted {
        tasks.push(TaskDraft {
            title: "Register for IELTS exam".to_string(),
            description: "Book your IELTS test date. Aim for at least 2-3 months before application deadlines.".to_string(),
            category: TaskCategory::Exam,
            priority: TaskPriority::High,
        });
    }

    if profile.gre_status == TestStatus::NotStarted && profile.intended_degree == GRE_DEGREE {
        tasks.push(TaskDraft {
            title: "Prepare for GRE exam".to_string(),
            description: "Start GRE preparation. Consider taking a practice test to assess your baseline.".to_string(),
            category: TaskCategory::Exam,
            priority: TaskPriority::High,
        });
    }

    if profile.sop_status == SopStatus::NotStarted {
        tasks.push(TaskDraft {
            title: "Start drafting Statement of Purpose".to_string(),
            description: "Begin writing your SOP. Focus on your academic journey, goals, and why you want to study abroad.".to_string(),
            category: TaskCategory::Document,
            priority: TaskPriority::High,
        });
    }

    tasks.push(TaskDraft {
        title: "Research universities and programs".to_string(),
        description: "Explore universities that match your profile, budget, and career goals.".to_string(),
        category: TaskCategory::Research,
        priority: TaskPriority::Medium,
    });

    tasks
}
