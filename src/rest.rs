//! Request construction, dispatch, and response classification shared by every
//! endpoint method.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	credentials::Credentials,
	error::{ConfigError, TransientError, TransportError},
	http::{OTP_HEADER, ResponseMeta, RestHttpClient, RestMethod, RestRequest, RestResponse},
	model::ErrorBody,
};

/// Media type requested from the service on every call.
pub const ACCEPT_JSON: &str = "application/vnd.github+json";
/// User agent advertised on every call; the service rejects anonymous agents.
pub const USER_AGENT: &str = concat!("gh-authz/", env!("CARGO_PKG_VERSION"));

/// Maps transport failures into client [`Error`] values.
pub trait RestErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts a transport error into the canonical error type.
	fn map_transport_error(&self, error: E) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestRestErrorMapper;
#[cfg(feature = "reqwest")]
impl RestErrorMapper<ReqwestError> for ReqwestRestErrorMapper {
	fn map_transport_error(&self, error: ReqwestError) -> Error {
		if error.is_builder() {
			return ConfigError::from(error).into();
		}
		if error.is_timeout() {
			return TransientError::Api {
				message: "Request timed out while calling the service.".into(),
				status: error.status().map(|code| code.as_u16()),
				retry_after: None,
			}
			.into();
		}

		TransportError::from(error).into()
	}
}

/// Builds a request carrying the standard headers and an optional JSON body.
pub(crate) fn build_request<B>(
	method: RestMethod,
	url: Url,
	credentials: &Credentials,
	body: Option<&B>,
) -> Result<RestRequest>
where
	B: ?Sized + Serialize,
{
	let mut headers = vec![
		("accept", ACCEPT_JSON.to_owned()),
		("user-agent", USER_AGENT.to_owned()),
		("authorization", credentials.authorization_header()),
	];

	if let Some(otp) = credentials.otp() {
		headers.push((OTP_HEADER, otp.to_owned()));
	}

	let body = match body {
		Some(payload) => {
			headers.push(("content-type", "application/json".to_owned()));

			Some(serde_json::to_vec(payload).map_err(ConfigError::from)?)
		},
		None => None,
	};

	Ok(RestRequest { method, url, headers, body })
}

/// Executes one request, funneling transport failures through the mapper.
pub(crate) async fn dispatch<C, M>(
	client: &C,
	mapper: &M,
	request: RestRequest,
) -> Result<RestResponse>
where
	C: ?Sized + RestHttpClient,
	M: ?Sized + RestErrorMapper<C::TransportError>,
{
	client.execute(request).await.map_err(|error| mapper.map_transport_error(error))
}

/// Decodes a success body through `serde_path_to_error` so parse failures name
/// the offending path.
pub(crate) fn decode_json<T>(response: &RestResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
		TransientError::ResponseParse { source, status: Some(response.status) }.into()
	})
}

/// Classifies a non-success response into the canonical error type.
///
/// `resource` names what the call addressed, so 404s read as "Authorization 42
/// was not found" rather than a bare status code.
pub(crate) fn classify_failure(resource: &str, response: &RestResponse) -> Error {
	let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();
	let message = body.message.unwrap_or_else(|| format!("HTTP {}", response.status));

	match response.status {
		401 => match otp_challenge(&response.meta) {
			Some(delivery) => Error::OtpRequired { delivery },
			None => Error::Unauthorized { reason: message },
		},
		403 => Error::Forbidden { reason: message },
		404 => Error::NotFound { resource: resource.to_owned() },
		422 => Error::Validation { message, errors: body.errors },
		status => TransientError::Api {
			message,
			status: Some(status),
			retry_after: response.meta.retry_after,
		}
		.into(),
	}
}

/// Finishes a call that returns a JSON representation.
pub(crate) fn into_decoded<T>(resource: &str, response: RestResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	if response.is_success() {
		decode_json(&response)
	} else {
		Err(classify_failure(resource, &response))
	}
}

/// Finishes a call whose success carries no body (204, or 200 with an empty
/// body on some deployments).
pub(crate) fn into_empty(resource: &str, response: RestResponse) -> Result<()> {
	if response.is_success() {
		Ok(())
	} else {
		Err(classify_failure(resource, &response))
	}
}

fn otp_challenge(meta: &ResponseMeta) -> Option<String> {
	let raw = meta.otp.as_deref()?.trim();
	let mut sections = raw.split(';');

	if !sections.next()?.trim().eq_ignore_ascii_case("required") {
		return None;
	}

	Some(sections.next().map(str::trim).filter(|s| !s.is_empty()).unwrap_or("unknown").to_owned())
}
