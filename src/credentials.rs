//! Credential material and `Authorization` header rendering.
//!
//! Personal authorization endpoints authenticate with the account's login and
//! password (plus an optional one-time password when two-factor is enabled),
//! while the application token-management endpoints authenticate with the OAuth
//! application's client id and secret. Both render as HTTP Basic credentials.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::_prelude::*;

/// Redacted secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Error returned when credential validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialError {
	/// The field was empty.
	#[error("{field} cannot be empty.")]
	Empty {
		/// Field name (login, client id, ...).
		field: &'static str,
	},
	/// The field contains whitespace characters.
	#[error("{field} contains whitespace.")]
	ContainsWhitespace {
		/// Field name (login, client id, ...).
		field: &'static str,
	},
}

/// Credential material attached to every outbound request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
	/// Account credentials for the personal authorization endpoints.
	Basic {
		/// Account login.
		login: String,
		/// Account password.
		password: Secret,
		/// One-time password forwarded via the OTP challenge header, when set.
		otp: Option<String>,
	},
	/// OAuth application credentials for the token-management endpoints.
	App {
		/// Application client identifier.
		client_id: String,
		/// Application client secret.
		client_secret: Secret,
	},
}
impl Credentials {
	/// Creates validated account credentials.
	pub fn basic(
		login: impl Into<String>,
		password: impl Into<String>,
	) -> Result<Self, CredentialError> {
		let login = login.into();

		validate_field("Login", &login)?;

		Ok(Self::Basic { login, password: Secret::new(password), otp: None })
	}

	/// Creates validated application credentials.
	pub fn app(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Result<Self, CredentialError> {
		let client_id = client_id.into();

		validate_field("Client id", &client_id)?;

		Ok(Self::App { client_id, client_secret: Secret::new(client_secret) })
	}

	/// Attaches a one-time password to account credentials.
	///
	/// Application credentials are returned unchanged; the token-management
	/// endpoints never take part in a two-factor exchange.
	pub fn with_otp(self, one_time_password: impl Into<String>) -> Self {
		match self {
			Self::Basic { login, password, .. } =>
				Self::Basic { login, password, otp: Some(one_time_password.into()) },
			other => other,
		}
	}

	/// Renders the HTTP Basic `Authorization` header value.
	pub(crate) fn authorization_header(&self) -> String {
		let pair = match self {
			Self::Basic { login, password, .. } => format!("{login}:{}", password.expose()),
			Self::App { client_id, client_secret } =>
				format!("{client_id}:{}", client_secret.expose()),
		};

		format!("Basic {}", STANDARD.encode(pair))
	}

	/// Returns the one-time password, when present.
	pub(crate) fn otp(&self) -> Option<&str> {
		match self {
			Self::Basic { otp, .. } => otp.as_deref(),
			Self::App { .. } => None,
		}
	}

	/// Stable label describing the credential kind.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Basic { .. } => "basic",
			Self::App { .. } => "application",
		}
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Basic { login, otp, .. } => f
				.debug_struct("Credentials::Basic")
				.field("login", login)
				.field("otp_set", &otp.is_some())
				.finish_non_exhaustive(),
			Self::App { client_id, .. } => f
				.debug_struct("Credentials::App")
				.field("client_id", client_id)
				.finish_non_exhaustive(),
		}
	}
}

fn validate_field(field: &'static str, view: &str) -> Result<(), CredentialError> {
	if view.is_empty() {
		return Err(CredentialError::Empty { field });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(CredentialError::ContainsWhitespace { field });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = Secret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "Secret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn basic_header_encodes_login_and_password() {
		let credentials =
			Credentials::basic("user", "pass").expect("Basic credentials should be valid.");

		assert_eq!(credentials.authorization_header(), "Basic dXNlcjpwYXNz");
	}

	#[test]
	fn app_header_encodes_client_pair() {
		let credentials =
			Credentials::app("abcdef0123456789abcd", "s3cret").expect("App credentials should be valid.");

		assert_eq!(
			credentials.authorization_header(),
			format!("Basic {}", STANDARD.encode("abcdef0123456789abcd:s3cret")),
		);
	}

	#[test]
	fn validation_rejects_empty_and_whitespace() {
		assert!(matches!(
			Credentials::basic("", "pass"),
			Err(CredentialError::Empty { field: "Login" }),
		));
		assert!(matches!(
			Credentials::app("client id", "secret"),
			Err(CredentialError::ContainsWhitespace { field: "Client id" }),
		));
	}

	#[test]
	fn credential_failures_convert_into_the_crate_error_in_one_hop() {
		fn build() -> crate::error::Result<Credentials> {
			Ok(Credentials::basic("", "pass")?)
		}

		assert!(matches!(
			build(),
			Err(Error::Config(crate::error::ConfigError::Credentials(CredentialError::Empty {
				field: "Login",
			}))),
		));
	}

	#[test]
	fn otp_only_applies_to_basic_credentials() {
		let basic = Credentials::basic("user", "pass")
			.expect("Basic credentials should be valid.")
			.with_otp("123456");

		assert_eq!(basic.otp(), Some("123456"));

		let app = Credentials::app("client", "secret")
			.expect("App credentials should be valid.")
			.with_otp("123456");

		assert_eq!(app.otp(), None);
	}

	#[test]
	fn debug_never_prints_secrets() {
		let basic = Credentials::basic("user", "hunter2")
			.expect("Basic credentials should be valid.")
			.with_otp("123456");
		let rendered = format!("{basic:?}");

		assert!(!rendered.contains("hunter2"));
		assert!(!rendered.contains("123456"));
	}
}
