//! Transport primitives for REST calls against the service.
//!
//! The module exposes [`RestHttpClient`] alongside [`RestRequest`] and
//! [`RestResponse`] so downstream crates can integrate custom HTTP clients.
//! Implementations execute exactly one HTTP exchange per call and surface the
//! response hints ([`ResponseMeta`]) the error and pagination layers need:
//! the `Retry-After` duration, the raw `Link` header, and the one-time-password
//! challenge header.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::header::{HeaderMap, LINK, RETRY_AFTER};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
use crate::_prelude::*;

/// Header carrying the two-factor one-time-password challenge and reply.
pub const OTP_HEADER: &str = "x-github-otp";

/// HTTP method subset used by the authorizations API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RestMethod {
	/// GET.
	Get,
	/// POST.
	Post,
	/// PUT.
	Put,
	/// PATCH.
	Patch,
	/// DELETE.
	Delete,
}
impl RestMethod {
	/// Returns the canonical method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			RestMethod::Get => "GET",
			RestMethod::Post => "POST",
			RestMethod::Put => "PUT",
			RestMethod::Patch => "PATCH",
			RestMethod::Delete => "DELETE",
		}
	}
}
impl Display for RestMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
#[cfg(feature = "reqwest")]
impl From<RestMethod> for reqwest::Method {
	fn from(method: RestMethod) -> Self {
		match method {
			RestMethod::Get => reqwest::Method::GET,
			RestMethod::Post => reqwest::Method::POST,
			RestMethod::Put => reqwest::Method::PUT,
			RestMethod::Patch => reqwest::Method::PATCH,
			RestMethod::Delete => reqwest::Method::DELETE,
		}
	}
}

/// A single outbound REST request.
#[derive(Clone)]
pub struct RestRequest {
	/// HTTP method.
	pub method: RestMethod,
	/// Absolute request URL.
	pub url: Url,
	/// Header name/value pairs, names lowercase.
	pub headers: Vec<(&'static str, String)>,
	/// Serialized JSON body, when the endpoint takes one.
	pub body: Option<Vec<u8>>,
}
impl Debug for RestRequest {
	// Headers carry credentials, so Debug only shows the request line.
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RestRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("body_set", &self.body.is_some())
			.finish_non_exhaustive()
	}
}

/// Response hints needed by the error and pagination layers.
#[derive(Clone, Debug, Default)]
pub struct ResponseMeta {
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
	/// Raw `Link` header value, when present.
	pub link: Option<String>,
	/// Raw one-time-password challenge header value, when present.
	pub otp: Option<String>,
}

/// Raw response surfaced by a [`RestHttpClient`].
#[derive(Clone, Debug)]
pub struct RestResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
	/// Parsed header hints.
	pub meta: ResponseMeta,
}
impl RestResponse {
	/// Whether the status code signals success (2xx).
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Future alias returned by [`RestHttpClient::execute`].
pub type RestFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing authorization API calls.
///
/// The trait is the crate's only dependency on an HTTP stack. Callers provide an
/// implementation (typically behind `Arc<T>`) and every endpoint method funnels
/// its single request through [`execute`](Self::execute). Implementations must
/// be `Send + Sync + 'static` so one client can be shared across tasks, and the
/// returned future must be `Send` for the lifetime of the in-flight call.
pub trait RestHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes one request and returns the raw response with parsed hints.
	fn execute(&self, request: RestRequest) -> RestFuture<'_, RestResponse, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Authorization calls should not follow redirects; configure any custom
/// [`ReqwestClient`] accordingly before wrapping it.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestRestClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestRestClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestRestClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestRestClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl RestHttpClient for ReqwestRestClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: RestRequest) -> RestFuture<'_, RestResponse, ReqwestError> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.request(request.method.into(), request.url);

			for (name, value) in &request.headers {
				builder = builder.header(*name, value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let meta = parse_meta(response.headers());
			let body = response.bytes().await?.to_vec();

			Ok(RestResponse { status, body, meta })
		})
	}
}

#[cfg(feature = "reqwest")]
fn parse_meta(headers: &HeaderMap) -> ResponseMeta {
	ResponseMeta {
		retry_after: parse_retry_after(headers),
		link: headers.get(LINK).and_then(|value| value.to_str().ok()).map(str::to_owned),
		otp: headers.get(OTP_HEADER).and_then(|value| value.to_str().ok()).map(str::to_owned),
	}
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
