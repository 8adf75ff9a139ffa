//! Diesel schema for comment-sync record lookup.
//!
//! All three tables are written by external collaborators; this crate only
//! reads them.

diesel::table! {
    /// References linking internal groups to tracked issues.
    external_issue_refs (id) {
        /// Internal reference identifier.
        id -> Uuid,
        /// Issue key in the provider's own format.
        #[max_length = 255]
        issue_key -> Varchar,
        /// Owning installation identifier.
        installation_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// User-authored activity records.
    activity_notes (id) {
        /// Internal activity identifier.
        id -> Uuid,
        /// Activity kind.
        #[max_length = 50]
        kind -> Varchar,
        /// Free-text body.
        body -> Text,
        /// Optional provider-side comment identifier.
        #[max_length = 255]
        external_comment_id -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Configured organization-provider connections.
    integration_installations (id) {
        /// Installation identifier.
        id -> Uuid,
        /// Provider name in canonical storage format.
        #[max_length = 50]
        provider -> Varchar,
        /// Per-direction sync flag mapping.
        config -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
