//! High-level endpoint methods over the dispatch layer.

pub mod app;
pub mod personal;

// self
use crate::{
	_prelude::*,
	credentials::Credentials,
	error::ConfigError,
	http::RestHttpClient,
	obs::{self, CallKind, CallOutcome, CallSpan},
	rest::RestErrorMapper,
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestRestClient, rest::ReqwestRestErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestAuthzClient = AuthzClient<ReqwestRestClient, ReqwestRestErrorMapper>;

/// Default API root for the hosted service.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Issues authorization management calls on behalf of a single identity.
///
/// The client owns the HTTP transport, the transport error mapper, the API root,
/// and one credential set, so individual endpoint methods can focus on argument
/// validation and a single delegated request. Which endpoints are reachable
/// depends on the credential kind: personal endpoints need
/// [`Credentials::Basic`], application token-management endpoints need
/// [`Credentials::App`].
#[derive(Clone)]
pub struct AuthzClient<C, M>
where
	C: ?Sized + RestHttpClient,
	M: ?Sized + RestErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// API root every endpoint path is joined onto.
	pub base_url: Url,
	/// Credential material attached to every request.
	pub credentials: Credentials,
}
impl<C, M> AuthzClient<C, M>
where
	C: ?Sized + RestHttpClient,
	M: ?Sized + RestErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let base_url = Url::parse(DEFAULT_BASE_URL)
			.map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			base_url,
			credentials,
		})
	}

	/// Points the client at a different API root (e.g. an on-premise deployment).
	pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
		self.base_url = Url::parse(base_url.as_ref())
			.map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(self)
	}

	pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
		let mut url = self.base_url.clone();

		{
			let mut path = url.path_segments_mut().map_err(|()| ConfigError::OpaqueBaseUrl)?;

			path.pop_if_empty();
			path.extend(segments);
		}

		Ok(url)
	}

	/// Rejects calls to personal endpoints when the client holds app credentials.
	pub(crate) fn ensure_basic(&self, endpoint: &'static str) -> Result<()> {
		match &self.credentials {
			Credentials::Basic { .. } => Ok(()),
			Credentials::App { .. } =>
				Err(ConfigError::MissingCredentials { endpoint, required: "basic" }.into()),
		}
	}

	/// Returns the application client id, rejecting basic credentials.
	pub(crate) fn app_client_id(&self, endpoint: &'static str) -> Result<&str> {
		match &self.credentials {
			Credentials::App { client_id, .. } => Ok(client_id),
			Credentials::Basic { .. } =>
				Err(ConfigError::MissingCredentials { endpoint, required: "application" }.into()),
		}
	}

	/// Wraps one endpoint call with the span + outcome-counter pattern.
	pub(crate) async fn observed<T, F>(&self, kind: CallKind, fut: F) -> Result<T>
	where
		F: Future<Output = Result<T>>,
	{
		let span = CallSpan::new(kind, "call");

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = span.instrument(fut).await;

		match &result {
			Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl ReqwestAuthzClient {
	/// Creates a client with the crate's default reqwest transport.
	pub fn new(credentials: Credentials) -> Result<Self> {
		Self::with_http_client(
			credentials,
			ReqwestRestClient::default(),
			Arc::new(ReqwestRestErrorMapper),
		)
	}
}
impl<C, M> Debug for AuthzClient<C, M>
where
	C: ?Sized + RestHttpClient,
	M: ?Sized + RestErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthzClient")
			.field("base_url", &self.base_url.as_str())
			.field("credentials", &self.credentials.kind())
			.finish()
	}
}

pub(crate) fn positive_id(id: u64) -> Result<()> {
	if id == 0 {
		Err(ConfigError::InvalidArgument { name: "id", reason: "must be positive" }.into())
	} else {
		Ok(())
	}
}

pub(crate) fn non_blank(name: &'static str, value: &str) -> Result<()> {
	if value.is_empty() {
		return Err(ConfigError::InvalidArgument { name, reason: "cannot be empty" }.into());
	}
	if value.chars().any(char::is_whitespace) {
		return Err(ConfigError::InvalidArgument { name, reason: "contains whitespace" }.into());
	}

	Ok(())
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	fn client(credentials: Credentials) -> ReqwestAuthzClient {
		AuthzClient::new(credentials).expect("Client should build with the default base URL.")
	}

	#[test]
	fn endpoint_urls_join_and_encode_segments() {
		let client = client(
			Credentials::basic("user", "pass").expect("Basic credentials should be valid."),
		);
		let url = client
			.endpoint_url(&["authorizations", "42"])
			.expect("Endpoint URL should join successfully.");

		assert_eq!(url.as_str(), "https://api.github.com/authorizations/42");

		let encoded = client
			.endpoint_url(&["applications", "abc", "tokens", "to ken"])
			.expect("Endpoint URL should join successfully.");

		assert!(!encoded.as_str().contains(' '));
	}

	#[test]
	fn credential_kind_checks_reject_mismatches() {
		let app = client(Credentials::app("client", "secret").expect("App credentials are valid."));

		assert!(matches!(
			app.ensure_basic("list"),
			Err(Error::Config(ConfigError::MissingCredentials { endpoint: "list", .. })),
		));

		let basic = client(
			Credentials::basic("user", "pass").expect("Basic credentials should be valid."),
		);

		assert!(matches!(
			basic.app_client_id("check_token"),
			Err(Error::Config(ConfigError::MissingCredentials { endpoint: "check_token", .. })),
		));
	}

	#[test]
	fn argument_validators_catch_local_misuse() {
		assert!(positive_id(0).is_err());
		assert!(positive_id(1).is_ok());
		assert!(non_blank("token", "").is_err());
		assert!(non_blank("token", "with space").is_err());
		assert!(non_blank("token", "abc123").is_ok());
	}
}
