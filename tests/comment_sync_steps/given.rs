//! Given steps for comment-sync BDD scenarios.

use super::world::SyncWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use syncline::comment_sync::domain::{
    ActivityId, ActivityKind, ActivityNote, ExternalIssueId, ExternalIssueKey, ExternalIssueRef,
    InstallationConfig, InstallationId, IntegrationInstallation, SYNC_COMMENTS,
};
use syncline::provider::{domain::ProviderKind, ports::IssueProviderError};

fn seed_installation(
    world: &mut SyncWorld,
    provider: &str,
    sync_comments: bool,
) -> Result<(), eyre::Report> {
    let kind = ProviderKind::try_from(provider).wrap_err("parse provider kind")?;
    let installation_id = InstallationId::new();
    let config = InstallationConfig::new().with_flag(SYNC_COMMENTS, sync_comments);
    world
        .store
        .insert_installation(IntegrationInstallation::new(installation_id, kind, config))
        .wrap_err("insert installation record")?;
    world.installation_id = Some(installation_id);
    Ok(())
}

#[given(r#"an installation for provider "{provider}" with comment sync enabled"#)]
fn installation_with_sync_enabled(
    world: &mut SyncWorld,
    provider: String,
) -> Result<(), eyre::Report> {
    seed_installation(world, &provider, true)
}

#[given(r#"an installation for provider "{provider}" with comment sync disabled"#)]
fn installation_with_sync_disabled(
    world: &mut SyncWorld,
    provider: String,
) -> Result<(), eyre::Report> {
    seed_installation(world, &provider, false)
}

#[given(r#"an external issue "{issue_key}" linked to that installation"#)]
fn external_issue_linked_to_installation(
    world: &mut SyncWorld,
    issue_key: String,
) -> Result<(), eyre::Report> {
    let installation_id = world
        .installation_id
        .ok_or_else(|| eyre::eyre!("missing installation in scenario world"))?;
    let issue_ref_id = ExternalIssueId::new();
    let key = ExternalIssueKey::new(issue_key).wrap_err("construct issue key")?;
    world
        .store
        .insert_issue_ref(ExternalIssueRef::new(issue_ref_id, key, installation_id))
        .wrap_err("insert issue reference record")?;
    world.issue_ref_id = Some(issue_ref_id);
    Ok(())
}

#[given(r#"a note activity with text "{text}""#)]
fn note_activity_with_text(world: &mut SyncWorld, text: String) -> Result<(), eyre::Report> {
    let activity_id = ActivityId::new();
    world
        .store
        .insert_activity(ActivityNote::new(activity_id, ActivityKind::Note, text))
        .wrap_err("insert activity record")?;
    world.activity_id = Some(activity_id);
    Ok(())
}

#[given("the installation has since been deleted")]
fn installation_has_been_deleted(world: &mut SyncWorld) -> Result<(), eyre::Report> {
    let installation_id = world
        .installation_id
        .ok_or_else(|| eyre::eyre!("missing installation in scenario world"))?;
    world
        .store
        .remove_installation(installation_id)
        .wrap_err("remove installation record")?;
    Ok(())
}

#[given(r#"the provider fails with "{message}""#)]
fn provider_fails_with(world: &mut SyncWorld, message: String) {
    world.client.fail_with(IssueProviderError::Rejected(message));
}
