use std::sync::Arc;

use super::common::*;
use crate::advising::category::StrategyKind;
use crate::advising::domain::{AcceptanceChance, FitCategory, StrengthRating};
use crate::advising::engine::EngineConfig;
use crate::advising::explain::NO_RISKS;
use crate::advising::repository::{RepositoryError, ShortlistRepository};
use crate::advising::service::{AdvisingService, AdvisingServiceError, ShortlistAction};

#[test]
fn shortlist_stores_all_four_derived_fields() {
    let (service, shortlist, _tasks) = build_service();

    let record = service
        .shortlist(&user(), &profile(), &university())
        .expect("shortlist upsert succeeds");

    assert_eq!(record.assessment.category, FitCategory::Target);
    assert_eq!(record.assessment.acceptance_chance, AcceptanceChance::Medium);
    assert!(record
        .assessment
        .fit_reason
        .contains("meets the minimum requirement"));
    assert_eq!(record.assessment.risks, NO_RISKS);

    let stored = shortlist
        .fetch(&user(), &university().id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn reshortlisting_overwrites_the_assessment() {
    let (service, shortlist, _tasks) = build_service();
    service
        .shortlist(&user(), &profile(), &university())
        .expect("first upsert");

    let mut weaker = profile();
    weaker.gpa = Some(2.8);
    weaker.budget_max = Some(20000);
    let updated = service
        .shortlist(&user(), &weaker, &university())
        .expect("second upsert");

    assert_eq!(updated.assessment.category, FitCategory::Reach);
    assert_ne!(updated.assessment.risks, NO_RISKS);

    let stored = shortlist
        .fetch(&user(), &university().id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.assessment, updated.assessment);
    assert_eq!(
        shortlist.records.lock().expect("shortlist mutex poisoned").len(),
        1
    );
}

#[test]
fn removing_a_missing_row_surfaces_not_found() {
    let (service, _shortlist, _tasks) = build_service();
    let error = service
        .remove(&user(), &university().id)
        .expect_err("nothing to remove");
    assert!(matches!(
        error,
        AdvisingServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn chat_action_payload_is_stored_verbatim() {
    let (service, shortlist, _tasks) = build_service();

    let action = ShortlistAction {
        user_id: user(),
        university_id: university().id,
        category: FitCategory::Safe,
        fit_reason: "Suggested during counselling chat".to_string(),
        risks: NO_RISKS.to_string(),
        acceptance_chance: AcceptanceChance::High,
    };
    service
        .apply_shortlist_action(action.clone())
        .expect("action stored");

    let stored = shortlist
        .fetch(&user(), &university().id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.assessment.category, action.category);
    assert_eq!(stored.assessment.fit_reason, action.fit_reason);
    assert_eq!(stored.view().category, "safe");
}

#[test]
fn bootstrap_inserts_the_starter_checklist_once() {
    let (service, _shortlist, tasks) = build_service();

    let drafts = service
        .bootstrap_tasks(&user(), &fresh_profile())
        .expect("first bootstrap");
    assert_eq!(drafts.len(), 4);
    assert_eq!(
        tasks.records.lock().expect("task mutex poisoned").len(),
        4
    );

    let second = service
        .bootstrap_tasks(&user(), &fresh_profile())
        .expect("second bootstrap");
    assert!(second.is_empty());
    assert_eq!(
        tasks.records.lock().expect("task mutex poisoned").len(),
        4
    );
}

#[test]
fn bootstrap_surfaces_task_store_failures() {
    let shortlist = Arc::new(MemoryShortlist::default());
    let tasks = Arc::new(UnavailableTasks);
    let service = AdvisingService::new(
        shortlist,
        tasks,
        EngineConfig::default(),
        StrategyKind::ScoreBand.strategy(),
    );

    let error = service
        .bootstrap_tasks(&user(), &fresh_profile())
        .expect_err("task store offline");
    assert!(matches!(
        error,
        AdvisingServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn strength_ratings_are_recomputed_from_the_profile() {
    let (service, _shortlist, _tasks) = build_service();
    let strength = service.profile_strength(&profile());
    assert_eq!(strength.academic, StrengthRating::Strong);
    assert_eq!(strength.exam, StrengthRating::Strong);
    assert_eq!(strength.sop, StrengthRating::Average);
}
