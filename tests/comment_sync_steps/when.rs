//! When steps for comment-sync BDD scenarios.

use super::world::{SyncWorld, run_async};
use rstest_bdd_macros::when;
use syncline::comment_sync::domain::{ActivityId, ExternalIssueId};

#[when("the comment sync task runs")]
fn comment_sync_task_runs(world: &mut SyncWorld) -> Result<(), eyre::Report> {
    let issue_ref_id = world
        .issue_ref_id
        .ok_or_else(|| eyre::eyre!("missing issue reference in scenario world"))?;
    let activity_id = world
        .activity_id
        .ok_or_else(|| eyre::eyre!("missing activity in scenario world"))?;
    world.last_result = Some(run_async(world.service.sync_comment(
        issue_ref_id,
        world.actor_id,
        activity_id,
    )));
    Ok(())
}

#[when("the comment sync task runs for an unknown issue reference")]
fn comment_sync_task_runs_for_unknown_reference(
    world: &mut SyncWorld,
) -> Result<(), eyre::Report> {
    let activity_id = world
        .activity_id
        .ok_or_else(|| eyre::eyre!("missing activity in scenario world"))?;
    world.last_result = Some(run_async(world.service.sync_comment(
        ExternalIssueId::new(),
        world.actor_id,
        activity_id,
    )));
    Ok(())
}

#[when("the comment sync task runs for an unknown activity")]
fn comment_sync_task_runs_for_unknown_activity(
    world: &mut SyncWorld,
) -> Result<(), eyre::Report> {
    let issue_ref_id = world
        .issue_ref_id
        .ok_or_else(|| eyre::eyre!("missing issue reference in scenario world"))?;
    world.last_result = Some(run_async(world.service.sync_comment(
        issue_ref_id,
        world.actor_id,
        ActivityId::new(),
    )));
    Ok(())
}
