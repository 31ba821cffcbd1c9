use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::advising::category::StrategyKind;
use crate::advising::domain::{
    SopStatus, StudentProfile, TestStatus, University, UniversityId, UserId,
};
use crate::advising::engine::EngineConfig;
use crate::advising::repository::{
    RepositoryError, ShortlistRecord, ShortlistRepository, TaskRecord, TaskRepository,
};
use crate::advising::service::AdvisingService;

pub(super) fn profile() -> StudentProfile {
    StudentProfile {
        education_level: "Bachelor's".to_string(),
        degree: "B.Tech".to_string(),
        major: "Computer Science".to_string(),
        graduation_year: Some(2025),
        gpa: Some(3.8),
        intended_degree: "Master's".to_string(),
        field_of_study: "Computer Science".to_string(),
        intake_year: Some(2026),
        preferred_countries: vec!["USA".to_string(), "Canada".to_string()],
        budget_min: Some(20000),
        budget_max: Some(50000),
        funding_plan: "self_funded".to_string(),
        ielts_status: TestStatus::Completed,
        ielts_score: Some(7.5),
        gre_status: TestStatus::NotStarted,
        gre_score: None,
        sop_status: SopStatus::Draft,
    }
}

pub(super) fn fresh_profile() -> StudentProfile {
    StudentProfile {
        gpa: None,
        budget_max: None,
        ielts_status: TestStatus::NotStarted,
        ielts_score: None,
        gre_status: TestStatus::NotStarted,
        gre_score: None,
        sop_status: SopStatus::NotStarted,
        ..profile()
    }
}

pub(super) fn university() -> University {
    University {
        id: UniversityId("state-university".to_string()),
        name: "State University".to_string(),
        country: "USA".to_string(),
        city: "Columbus".to_string(),
        ranking: Some(120),
        min_gpa: 3.5,
        min_ielts: Some(6.5),
        min_gre: Some(310),
        tuition_min: 32000,
        tuition_max: 40000,
        living_cost: 12000,
        acceptance_rate: 25.0,
        website: "https://state.example.edu".to_string(),
        description: "Large public research university.".to_string(),
    }
}

pub(super) fn selective_university() -> University {
    University {
        id: UniversityId("ivy-institute".to_string()),
        name: "Ivy Institute".to_string(),
        min_gpa: 3.8,
        acceptance_rate: 8.0,
        tuition_min: 48000,
        tuition_max: 60000,
        ..university()
    }
}

pub(super) fn user() -> UserId {
    UserId("user-42".to_string())
}

pub(super) fn build_service() -> (
    AdvisingService<MemoryShortlist, MemoryTasks>,
    Arc<MemoryShortlist>,
    Arc<MemoryTasks>,
) {
    let shortlist = Arc::new(MemoryShortlist::default());
    let tasks = Arc::new(MemoryTasks::default());
    let service = AdvisingService::new(
        shortlist.clone(),
        tasks.clone(),
        EngineConfig::default(),
        StrategyKind::RequirementCount.strategy(),
    );
    (service, shortlist, tasks)
}

#[derive(Default)]
pub(super) struct MemoryShortlist {
    pub(super) records: Mutex<HashMap<(UserId, UniversityId), ShortlistRecord>>,
}

impl ShortlistRepository for MemoryShortlist {
    fn upsert(&self, record: ShortlistRecord) -> Result<ShortlistRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("shortlist mutex poisoned");
        guard.insert(
            (record.user_id.clone(), record.university_id.clone()),
            record.clone(),
        );
        Ok(record)
    }

    fn fetch(
        &self,
        user: &UserId,
        university: &UniversityId,
    ) -> Result<Option<ShortlistRecord>, RepositoryError> {
        let guard = self.records.lock().expect("shortlist mutex poisoned");
        Ok(guard.get(&(user.clone(), university.clone())).cloned())
    }

    fn remove(&self, user: &UserId, university: &UniversityId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("shortlist mutex poisoned");
        guard
            .remove(&(user.clone(), university.clone()))
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn for_user(&self, user: &UserId) -> Result<Vec<ShortlistRecord>, RepositoryError> {
        let guard = self.records.lock().expect("shortlist mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.user_id == user)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(super) struct MemoryTasks {
    pub(super) records: Mutex<Vec<TaskRecord>>,
}

impl TaskRepository for MemoryTasks {
    fn count_for_user(&self, user: &UserId) -> Result<usize, RepositoryError> {
        let guard = self.records.lock().expect("task mutex poisoned");
        Ok(guard.iter().filter(|record| &record.user_id == user).count())
    }

    fn insert_batch(&self, records: Vec<TaskRecord>) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("task mutex poisoned");
        guard.extend(records);
        Ok(())
    }
}

pub(super) struct UnavailableTasks;

impl TaskRepository for UnavailableTasks {
    fn count_for_user(&self, _user: &UserId) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_batch(&self, _records: Vec<TaskRecord>) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
