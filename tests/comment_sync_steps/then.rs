//! Then steps for comment-sync BDD scenarios.

use super::world::SyncWorld;
use rstest_bdd_macros::then;
use syncline::lifecycle::domain::LifecycleOutcome;

#[then("the task completes without error")]
fn task_completes_without_error(world: &SyncWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task result in scenario world"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("unexpected task failure: {err}"));
    }
    Ok(())
}

#[then(r#"the task fails with "{message}""#)]
fn task_fails_with(world: &SyncWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task result in scenario world"))?;
    let Err(err) = result else {
        return Err(eyre::eyre!("expected task failure, task succeeded"));
    };
    if err.to_string() != message {
        return Err(eyre::eyre!(
            "expected failure message {message:?}, found {:?}",
            err.to_string()
        ));
    }
    Ok(())
}

#[then(r#"the provider receives exactly one comment update for "{issue_key}""#)]
fn provider_receives_exactly_one_update(
    world: &SyncWorld,
    issue_key: String,
) -> Result<(), eyre::Report> {
    let calls = world.client.calls();
    eyre::ensure!(
        calls.len() == 1,
        "expected exactly one provider call, found {}",
        calls.len()
    );
    let call = calls
        .first()
        .ok_or_else(|| eyre::eyre!("expected a recorded provider call"))?;
    eyre::ensure!(
        call.issue_key.as_str() == issue_key,
        "expected issue key {issue_key:?}, found {:?}",
        call.issue_key.as_str()
    );
    eyre::ensure!(
        call.actor_id == world.actor_id,
        "provider call actor does not match the scenario actor"
    );
    Ok(())
}

#[then("the provider receives no comment updates")]
fn provider_receives_no_updates(world: &SyncWorld) -> Result<(), eyre::Report> {
    let calls = world.client.calls();
    eyre::ensure!(
        calls.is_empty(),
        "expected no provider calls, found {}",
        calls.len()
    );
    Ok(())
}

fn assert_single_event(
    world: &SyncWorld,
    expected: LifecycleOutcome,
) -> Result<(), eyre::Report> {
    let events = world.recorder.events();
    eyre::ensure!(
        events.len() == 1,
        "expected exactly one lifecycle event, found {}",
        events.len()
    );
    let event = events
        .first()
        .ok_or_else(|| eyre::eyre!("expected a recorded lifecycle event"))?;
    eyre::ensure!(
        event.outcome() == expected,
        "expected {expected} outcome, found {}",
        event.outcome()
    );
    Ok(())
}

#[then("exactly one success lifecycle event is recorded")]
fn one_success_event_recorded(world: &SyncWorld) -> Result<(), eyre::Report> {
    assert_single_event(world, LifecycleOutcome::Success)
}

#[then("exactly one failure lifecycle event is recorded")]
fn one_failure_event_recorded(world: &SyncWorld) -> Result<(), eyre::Report> {
    assert_single_event(world, LifecycleOutcome::Failure)
}

#[then("no lifecycle events are recorded")]
fn no_lifecycle_events_recorded(world: &SyncWorld) -> Result<(), eyre::Report> {
    let events = world.recorder.events();
    eyre::ensure!(
        events.is_empty(),
        "expected no lifecycle events, found {}",
        events.len()
    );
    Ok(())
}
