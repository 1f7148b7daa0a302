//! Client-level error types shared across transport, dispatch, and endpoint layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Temporary upstream failure; retry with backoff.
	#[error(transparent)]
	Transient(#[from] TransientError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The service rejected the supplied credentials.
	#[error("Authentication failed: {reason}.")]
	Unauthorized {
		/// Service-supplied reason string.
		reason: String,
	},
	/// The service demands a one-time password for this call.
	#[error("A one-time password is required (delivery: {delivery}).")]
	OtpRequired {
		/// Delivery channel advertised by the challenge header (e.g. `app`, `sms`).
		delivery: String,
	},
	/// The authenticated identity may not perform this call.
	#[error("Access denied: {reason}.")]
	Forbidden {
		/// Service-supplied reason string.
		reason: String,
	},
	/// The addressed resource does not exist.
	#[error("{resource} was not found.")]
	NotFound {
		/// Human-readable name of the missing resource.
		resource: String,
	},
	/// The service rejected the payload as semantically invalid.
	#[error("Validation failed: {message}.")]
	Validation {
		/// Top-level message from the error envelope.
		message: String,
		/// Structured per-field failures, when the envelope carries them.
		errors: Vec<crate::model::FieldFailure>,
	},
}
impl From<crate::credentials::CredentialError> for Error {
	fn from(e: crate::credentials::CredentialError) -> Self {
		Self::Config(ConfigError::Credentials(e))
	}
}

/// Configuration and argument-validation failures raised before any network call.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL cannot carry path segments (cannot-be-a-base URL).
	#[error("Base URL cannot carry path segments.")]
	OpaqueBaseUrl,
	/// An endpoint argument failed local validation.
	#[error("Argument `{name}` is invalid: {reason}.")]
	InvalidArgument {
		/// Argument name as it appears in the method signature.
		name: &'static str,
		/// Why the argument was rejected.
		reason: &'static str,
	},
	/// The client holds the wrong credential kind for this endpoint.
	#[error("The `{endpoint}` endpoint requires {required} credentials.")]
	MissingCredentials {
		/// Endpoint method name.
		endpoint: &'static str,
		/// Required credential kind label.
		required: &'static str,
	},
	/// Credential material failed validation.
	#[error("Credentials are invalid.")]
	Credentials(#[from] crate::credentials::CredentialError),
	/// Request payload could not be serialized.
	#[error("Request payload could not be serialized.")]
	SerializePayload(#[from] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Temporary failure variants (safe to retry).
#[derive(Debug, ThisError)]
pub enum TransientError {
	/// Service returned an unexpected but non-fatal response (429, 5xx).
	#[error("Service returned an unexpected response: {message}.")]
	Api {
		/// Service- or client-supplied message summarizing the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Service responded with malformed JSON that could not be parsed.
	#[error("Service returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure naming the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the service.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
