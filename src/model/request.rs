//! Request payloads for creating and updating authorizations.

// self
use crate::_prelude::*;

/// Payload for `create` and `get_or_create_for_app`.
///
/// All fields are optional from the service's point of view, except that
/// `get_or_create_for_app` requires [`client_secret`](Self::client_secret) so
/// the service can prove the caller owns the application.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewAuthorization {
	/// Scopes the new authorization should be granted.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub scopes: Vec<String>,
	/// Free-form note describing the purpose of the authorization.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	/// URL documenting the purpose of the authorization.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note_url: Option<Url>,
	/// Fingerprint distinguishing multiple grants per application.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fingerprint: Option<String>,
	/// Application client secret, required by the create-or-get endpoint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_secret: Option<String>,
}
impl NewAuthorization {
	/// Creates an empty payload.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one scope to the grant request.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scopes.push(scope.into());

		self
	}

	/// Sets the note.
	pub fn note(mut self, note: impl Into<String>) -> Self {
		self.note = Some(note.into());

		self
	}

	/// Sets the note URL.
	pub fn note_url(mut self, note_url: Url) -> Self {
		self.note_url = Some(note_url);

		self
	}

	/// Sets the fingerprint.
	pub fn fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
		self.fingerprint = Some(fingerprint.into());

		self
	}

	/// Sets the application client secret for the create-or-get endpoint.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}
}

/// Error returned when an update payload fails local validation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum UpdateError {
	/// No field was set.
	#[error("Update payload must set at least one field.")]
	Empty,
	/// `scopes` replaces the whole scope list and cannot be combined with the
	/// incremental add/remove lists.
	#[error("`scopes` cannot be combined with `add_scopes`/`remove_scopes`.")]
	ConflictingScopes,
}

/// Payload for `update`, built through [`AuthorizationUpdate::builder`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuthorizationUpdate {
	/// Replacement scope list; mutually exclusive with the add/remove lists.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scopes: Option<Vec<String>>,
	/// Scopes appended to the current grant.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub add_scopes: Vec<String>,
	/// Scopes removed from the current grant.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub remove_scopes: Vec<String>,
	/// Replacement note.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	/// Replacement note URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note_url: Option<Url>,
	/// Replacement fingerprint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fingerprint: Option<String>,
}
impl AuthorizationUpdate {
	/// Starts building an update payload.
	pub fn builder() -> AuthorizationUpdateBuilder {
		AuthorizationUpdateBuilder::default()
	}
}

/// Builder enforcing the update payload's field rules at [`build`](Self::build) time.
#[derive(Clone, Debug, Default)]
pub struct AuthorizationUpdateBuilder {
	scopes: Option<Vec<String>>,
	add_scopes: Vec<String>,
	remove_scopes: Vec<String>,
	note: Option<String>,
	note_url: Option<Url>,
	fingerprint: Option<String>,
}
impl AuthorizationUpdateBuilder {
	/// Replaces the whole scope list.
	pub fn scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Appends one scope to the current grant.
	pub fn add_scope(mut self, scope: impl Into<String>) -> Self {
		self.add_scopes.push(scope.into());

		self
	}

	/// Removes one scope from the current grant.
	pub fn remove_scope(mut self, scope: impl Into<String>) -> Self {
		self.remove_scopes.push(scope.into());

		self
	}

	/// Sets the replacement note.
	pub fn note(mut self, note: impl Into<String>) -> Self {
		self.note = Some(note.into());

		self
	}

	/// Sets the replacement note URL.
	pub fn note_url(mut self, note_url: Url) -> Self {
		self.note_url = Some(note_url);

		self
	}

	/// Sets the replacement fingerprint.
	pub fn fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
		self.fingerprint = Some(fingerprint.into());

		self
	}

	/// Validates the field rules and produces the payload.
	pub fn build(self) -> Result<AuthorizationUpdate, UpdateError> {
		let replaces = self.scopes.is_some();
		let amends = !self.add_scopes.is_empty() || !self.remove_scopes.is_empty();

		if replaces && amends {
			return Err(UpdateError::ConflictingScopes);
		}
		if !replaces
			&& !amends && self.note.is_none()
			&& self.note_url.is_none()
			&& self.fingerprint.is_none()
		{
			return Err(UpdateError::Empty);
		}

		Ok(AuthorizationUpdate {
			scopes: self.scopes,
			add_scopes: self.add_scopes,
			remove_scopes: self.remove_scopes,
			note: self.note,
			note_url: self.note_url,
			fingerprint: self.fingerprint,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn new_authorization_skips_unset_fields() {
		let payload = NewAuthorization::new().scope("repo").note("ci token");
		let rendered =
			serde_json::to_string(&payload).expect("Payload should serialize successfully.");

		assert_eq!(rendered, r#"{"scopes":["repo"],"note":"ci token"}"#);
	}

	#[test]
	fn update_builder_rejects_empty_payload() {
		assert_eq!(AuthorizationUpdate::builder().build(), Err(UpdateError::Empty));
	}

	#[test]
	fn update_builder_rejects_replace_combined_with_amend() {
		let result =
			AuthorizationUpdate::builder().scopes(["repo"]).add_scope("gist").build();

		assert_eq!(result, Err(UpdateError::ConflictingScopes));
	}

	#[test]
	fn update_serializes_amendment_lists() {
		let payload = AuthorizationUpdate::builder()
			.add_scope("gist")
			.remove_scope("repo")
			.note("rotated")
			.build()
			.expect("Amendment payload should build successfully.");
		let rendered =
			serde_json::to_string(&payload).expect("Payload should serialize successfully.");

		assert_eq!(
			rendered,
			r#"{"add_scopes":["gist"],"remove_scopes":["repo"],"note":"rotated"}"#,
		);
	}
}
