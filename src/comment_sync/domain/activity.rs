//! Activity note records authored inside the internal tracker.

use super::{ActivityId, ParseActivityKindError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an activity record.
///
/// Only [`ActivityKind::Note`] activities are meaningful to comment sync;
/// the other kinds belong to sibling sync directions and are carried here
/// because the store persists them on the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A user-authored comment.
    Note,
    /// A status transition on the owning group.
    StatusChange,
    /// An assignee change on the owning group.
    Assignment,
}

impl ActivityKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::StatusChange => "status_change",
            Self::Assignment => "assignment",
        }
    }
}

impl TryFrom<&str> for ActivityKind {
    type Error = ParseActivityKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "note" => Ok(Self::Note),
            "status_change" => Ok(Self::StatusChange),
            "assignment" => Ok(Self::Assignment),
            _ => Err(ParseActivityKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-authored activity record whose text is propagated outbound.
///
/// Immutable for the purposes of comment sync. The optional external comment
/// identifier distinguishes update-from-create upstream; this task passes it
/// through to the provider client untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityNote {
    id: ActivityId,
    kind: ActivityKind,
    body: String,
    external_comment_id: Option<String>,
}

impl ActivityNote {
    /// Creates an activity note.
    #[must_use]
    pub fn new(id: ActivityId, kind: ActivityKind, body: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            body: body.into(),
            external_comment_id: None,
        }
    }

    /// Sets the provider-side comment identifier this note mirrors.
    #[must_use]
    pub fn with_external_comment_id(mut self, comment_id: impl Into<String>) -> Self {
        self.external_comment_id = Some(comment_id.into());
        self
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the activity kind.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the free-text body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the provider-side comment identifier, if known.
    #[must_use]
    pub fn external_comment_id(&self) -> Option<&str> {
        self.external_comment_id.as_deref()
    }
}
