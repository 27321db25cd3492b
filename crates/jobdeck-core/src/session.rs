//! Read-only projection of the external auth collaborator's session
//!
//! The shell never mutates auth state; it reacts to a [`SessionView`]
//! supplied from outside. While the collaborator is still resolving, the
//! gate selects a neutral variant so the header never flashes the wrong
//! action buttons.
//!
//! The role attribute is client-supplied metadata and is not validated
//! here; whether the server enforces it again is outside this crate's
//! visibility.

/// Application-defined role attribute on the user record.
///
/// Arrives as a free-form metadata string and goes through [`Role::parse`]
/// rather than serde, so unknown values degrade to [`Role::Member`] instead
/// of failing the whole session payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Recruiter,
    Member,
}

impl Role {
    /// Parse the collaborator's role string; anything that is not
    /// "recruiter" (case-insensitive) maps to [`Role::Member`].
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("recruiter") {
            Role::Recruiter
        } else {
            Role::Member
        }
    }
}

/// Snapshot of the auth collaborator's session state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionView {
    /// Collaborator has not resolved the session yet
    #[default]
    Loading,
    SignedOut,
    SignedIn {
        role: Role,
    },
}

impl SessionView {
    pub fn signed_in(&self) -> bool {
        matches!(self, SessionView::SignedIn { .. })
    }

    pub fn is_recruiter(&self) -> bool {
        matches!(
            self,
            SessionView::SignedIn {
                role: Role::Recruiter
            }
        )
    }
}

/// Which action-area variant the header renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    /// No affordances while the session is unresolved
    Neutral,
    /// Sign In + Get Started
    SignedOut,
    /// User button + recruiter-only Post a Job action
    Recruiter,
    /// User button only
    Member,
}

impl NavVariant {
    /// Pure selector over the session projection.
    pub fn for_session(session: &SessionView) -> Self {
        match session {
            SessionView::Loading => NavVariant::Neutral,
            SessionView::SignedOut => NavVariant::SignedOut,
            SessionView::SignedIn {
                role: Role::Recruiter,
            } => NavVariant::Recruiter,
            SessionView::SignedIn { role: Role::Member } => NavVariant::Member,
        }
    }

    /// The recruiter-only action is visible iff signed in with the
    /// recruiter role.
    pub fn shows_post_job(&self) -> bool {
        matches!(self, NavVariant::Recruiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("recruiter"), Role::Recruiter);
        assert_eq!(Role::parse("Recruiter"), Role::Recruiter);
        assert_eq!(Role::parse("candidate"), Role::Member);
        assert_eq!(Role::parse(""), Role::Member);
        assert_eq!(Role::parse("admin"), Role::Member);
    }

    #[test]
    fn test_loading_selects_neutral_variant() {
        assert_eq!(
            NavVariant::for_session(&SessionView::Loading),
            NavVariant::Neutral
        );
        assert!(!NavVariant::Neutral.shows_post_job());
    }

    #[test]
    fn test_signed_out_never_shows_recruiter_action() {
        let variant = NavVariant::for_session(&SessionView::SignedOut);
        assert_eq!(variant, NavVariant::SignedOut);
        assert!(!variant.shows_post_job());
    }

    #[test]
    fn test_recruiter_gate() {
        let recruiter = SessionView::SignedIn {
            role: Role::Recruiter,
        };
        assert!(NavVariant::for_session(&recruiter).shows_post_job());

        let member = SessionView::SignedIn { role: Role::Member };
        assert_eq!(NavVariant::for_session(&member), NavVariant::Member);
        assert!(!NavVariant::for_session(&member).shows_post_job());
    }
}
