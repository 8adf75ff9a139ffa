//! In-memory integration tests for the guarded comment-sync task.

use super::helpers::{SyncHarness, build_harness, seed_linked_records};
use rstest::{fixture, rstest};
use syncline::comment_sync::domain::ActorId;
use syncline::lifecycle::domain::LifecycleOutcome;
use syncline::provider::ports::IssueProviderError;

#[fixture]
fn harness() -> SyncHarness {
    build_harness()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enabled_installation_propagates_the_note(harness: SyncHarness) {
    let (issue_ref_id, activity_id, _) = seed_linked_records(&harness, "foo-1234", true);
    let actor_id = ActorId::new();

    harness
        .service
        .sync_comment(issue_ref_id, actor_id, activity_id)
        .await
        .expect("sync should succeed");

    let calls = harness.client.calls();
    assert_eq!(calls.len(), 1);
    let call = calls.first().expect("one provider call should be recorded");
    assert_eq!(call.issue_key.as_str(), "foo-1234");
    assert_eq!(call.actor_id, actor_id);
    assert_eq!(call.note.body(), "Test comment");

    let events = harness.recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events.first().map(syncline::lifecycle::domain::LifecycleEvent::outcome),
        Some(LifecycleOutcome::Success)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disabled_installation_stays_silent(harness: SyncHarness) {
    let (issue_ref_id, activity_id, _) = seed_linked_records(&harness, "foo-1234", false);

    harness
        .service
        .sync_comment(issue_ref_id, ActorId::new(), activity_id)
        .await
        .expect("disabled gate should not be an error");

    assert!(harness.client.calls().is_empty());
    assert!(harness.recorder.events().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_deleted_installation_stays_silent(harness: SyncHarness) {
    let (issue_ref_id, activity_id, installation_id) =
        seed_linked_records(&harness, "foo-1234", true);
    harness
        .store
        .remove_installation(installation_id)
        .expect("installation removal should succeed");

    harness
        .service
        .sync_comment(issue_ref_id, ActorId::new(), activity_id)
        .await
        .expect("missing installation should not be an error");

    assert!(harness.client.calls().is_empty());
    assert!(harness.recorder.events().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provider_failure_keeps_the_original_message(harness: SyncHarness) {
    let (issue_ref_id, activity_id, _) = seed_linked_records(&harness, "foo-1234", true);
    harness.client.fail_with(IssueProviderError::Rejected(
        "Something went wrong updating comment".to_owned(),
    ));

    let result = harness
        .service
        .sync_comment(issue_ref_id, ActorId::new(), activity_id)
        .await;

    let error = result.expect_err("provider failure should propagate");
    assert_eq!(error.to_string(), "Something went wrong updating comment");

    let events = harness.recorder.events();
    assert_eq!(events.len(), 1);
    let event = events.first().expect("one event should be recorded");
    assert_eq!(event.outcome(), LifecycleOutcome::Failure);
    assert_eq!(
        event.failure().map(syncline::lifecycle::domain::FailureDetail::message),
        Some("Something went wrong updating comment")
    );
}
