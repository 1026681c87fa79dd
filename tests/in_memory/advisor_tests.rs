//! Degradation tests for the generative helpers behind the facade.

use super::helpers::{TestActions, actions, actions_with_replies};
use bitacora::facade::ActionOutcome;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_against_a_failing_backend_yield_an_empty_list(actions: TestActions) {
    let outcome = actions.suggest_tasks("Printer").await;
    assert_eq!(outcome, ActionOutcome::Success(Vec::new()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn relevance_against_a_failing_backend_yields_the_unavailable_verdict(
    actions: TestActions,
) {
    let outcome = actions
        .check_task_relevance("Printer", None, "Replace toner cartridge")
        .await;

    let verdict = outcome
        .into_success()
        .expect("degraded check still succeeds");
    assert!(!verdict.is_relevant());
    assert!(!verdict.explanation().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn healthy_backend_replies_reach_the_caller_unchanged() {
    let actions = actions_with_replies([
        json!({"tasks": ["Clean the print heads", "Replace toner cartridge"]}),
        json!({
            "isRelevant": true,
            "relevanceExplanation": "Toner is a printer consumable.",
        }),
    ]);

    let suggestions = actions
        .suggest_tasks("Printer")
        .await
        .into_success()
        .expect("suggestions should succeed");
    assert_eq!(suggestions.len(), 2);

    let verdict = actions
        .check_task_relevance("Printer", Some("Firmware 2.1"), "Replace toner cartridge")
        .await
        .into_success()
        .expect("relevance check should succeed");
    assert!(verdict.is_relevant());
    assert_eq!(verdict.explanation(), "Toner is a printer consumable.");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_malformed_reply_degrades_instead_of_failing() {
    let actions = actions_with_replies([json!({"unexpected": "shape"})]);

    let outcome = actions.suggest_tasks("Server").await;

    assert_eq!(outcome, ActionOutcome::Success(Vec::new()));
}
