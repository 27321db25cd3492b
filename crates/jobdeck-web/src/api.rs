//! Client for the hosted auth provider's session API
//!
//! The provider owns credentials, tokens, and failures; this client only
//! projects its session document into the read-only [`SessionView`] the
//! navigation shell consumes. Any fetch or decode failure is treated as
//! signed-out, never surfaced as an error.

use gloo_net::http::Request;
use jobdeck_core::{Role, SessionView, SiteConfig};
use serde::{Deserialize, Serialize};

/// Session document returned by `GET {auth_origin}/v1/session`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    #[serde(default)]
    pub signed_in: bool,
    #[serde(default)]
    pub user: Option<UserPayload>,
}

/// User record embedded in the session document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Application-defined metadata; the role attribute lives here
    #[serde(default)]
    pub metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

/// Display info for the signed-in user button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl SessionPayload {
    /// Project the provider's document into the shell's session view.
    pub fn to_view(&self) -> SessionView {
        if !self.signed_in {
            return SessionView::SignedOut;
        }
        let role = self
            .user
            .as_ref()
            .and_then(|user| user.metadata.role.as_deref())
            .map(Role::parse)
            .unwrap_or(Role::Member);
        SessionView::SignedIn { role }
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.user.as_ref().map(|user| UserProfile {
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        })
    }
}

/// Fetch the current session from the auth provider.
pub async fn fetch_session(auth_origin: &str) -> (SessionView, Option<UserProfile>) {
    let url = format!("{}/v1/session", auth_origin);
    let payload = match Request::get(&url).send().await {
        Ok(response) => response.json::<SessionPayload>().await.unwrap_or_default(),
        Err(e) => {
            leptos::logging::warn!("session probe failed: {:?}", e);
            SessionPayload::default()
        }
    };
    (payload.to_view(), payload.profile())
}

/// Fetch the site config the server loaded from disk (`GET /api/site`).
/// Falls back to defaults when the app is served without the API.
pub async fn fetch_site_config() -> SiteConfig {
    match Request::get("/api/site").send().await {
        Ok(response) => response.json::<SiteConfig>().await.unwrap_or_default(),
        Err(e) => {
            leptos::logging::warn!("site config fetch failed: {:?}", e);
            SiteConfig::default()
        }
    }
}

/// Tell the auth provider to end the session (fire and forget).
pub async fn request_sign_out(auth_origin: &str) {
    let url = format!("{}/v1/sign-out", auth_origin);
    if let Err(e) = Request::post(&url).send().await {
        leptos::logging::warn!("sign-out request failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_payload() {
        let payload: SessionPayload = serde_json::from_str(r#"{"signedIn": false}"#).unwrap();
        assert_eq!(payload.to_view(), SessionView::SignedOut);
        assert!(payload.profile().is_none());
    }

    #[test]
    fn test_recruiter_payload() {
        let payload: SessionPayload = serde_json::from_str(
            r#"{
                "signedIn": true,
                "user": {
                    "name": "Dana",
                    "avatarUrl": "https://img.example/d.png",
                    "metadata": {"role": "recruiter"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            payload.to_view(),
            SessionView::SignedIn {
                role: Role::Recruiter
            }
        );
        assert_eq!(payload.profile().unwrap().name, "Dana");
    }

    #[test]
    fn test_missing_role_defaults_to_member() {
        let payload: SessionPayload =
            serde_json::from_str(r#"{"signedIn": true, "user": {"name": "Kim"}}"#).unwrap();
        assert_eq!(
            payload.to_view(),
            SessionView::SignedIn { role: Role::Member }
        );
    }

    #[test]
    fn test_empty_payload_is_signed_out() {
        let payload: SessionPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.to_view(), SessionView::SignedOut);
    }
}
