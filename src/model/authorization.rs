//! Response representations of granted authorizations.

// self
use crate::{_prelude::*, credentials::Secret};

/// A granted OAuth authorization as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
	/// Numeric authorization identifier.
	pub id: u64,
	/// Canonical API URL of this authorization.
	pub url: Url,
	/// The authorization's OAuth token. Redacted in Debug and Display output.
	pub token: Secret,
	/// Last eight characters of the token, safe to show in UIs.
	#[serde(default)]
	pub token_last_eight: Option<String>,
	/// SHA-256 digest of the token, exposed by deployments that never return
	/// full tokens on reads.
	#[serde(default)]
	pub hashed_token: Option<String>,
	/// The OAuth application this authorization belongs to.
	pub app: AppSummary,
	/// Free-form note attached at creation time.
	#[serde(default)]
	pub note: Option<String>,
	/// URL documenting the purpose of the authorization.
	#[serde(default)]
	pub note_url: Option<Url>,
	/// Granted scopes.
	#[serde(default)]
	pub scopes: Vec<String>,
	/// Caller-supplied fingerprint distinguishing multiple grants per app.
	#[serde(default)]
	pub fingerprint: Option<String>,
	/// Creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Minimal description of the OAuth application owning an authorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSummary {
	/// Application display name.
	pub name: String,
	/// Application homepage URL.
	pub url: Url,
	/// Application client identifier.
	pub client_id: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const PAYLOAD: &str = r#"{
		"id": 42,
		"url": "https://api.github.com/authorizations/42",
		"token": "deadbeefcafe0123",
		"token_last_eight": "cafe0123",
		"app": {
			"name": "my-ci",
			"url": "https://example.com/my-ci",
			"client_id": "abcdef0123456789abcd"
		},
		"note": "ci token",
		"scopes": ["repo", "gist"],
		"created_at": "2017-01-02T03:04:05Z",
		"updated_at": "2017-01-02T03:04:05Z"
	}"#;

	#[test]
	fn authorization_deserializes_with_optional_fields_absent() {
		let authorization: Authorization =
			serde_json::from_str(PAYLOAD).expect("Authorization payload should deserialize.");

		assert_eq!(authorization.id, 42);
		assert_eq!(authorization.token.expose(), "deadbeefcafe0123");
		assert_eq!(authorization.scopes, ["repo", "gist"]);
		assert_eq!(authorization.app.name, "my-ci");
		assert_eq!(authorization.hashed_token, None);
		assert_eq!(authorization.fingerprint, None);
		assert_eq!(authorization.created_at.year(), 2017);
	}

	#[test]
	fn authorization_debug_redacts_token() {
		let authorization: Authorization =
			serde_json::from_str(PAYLOAD).expect("Authorization payload should deserialize.");
		let rendered = format!("{authorization:?}");

		assert!(!rendered.contains("deadbeefcafe0123"));
		assert!(rendered.contains("<redacted>"));
	}
}
