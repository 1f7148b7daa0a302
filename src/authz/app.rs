//! Application token-management endpoints (app credentials).
//!
//! These endpoints let an OAuth application inspect, rotate, and revoke the
//! tokens it has issued. The token travels in the URL path and the application
//! authenticates with its client id + secret, so the client id is taken from
//! [`Credentials::App`](crate::credentials::Credentials::App) rather than a
//! method argument.

// self
use crate::{
	_prelude::*,
	authz::{AuthzClient, non_blank},
	http::{RestHttpClient, RestMethod},
	model::Authorization,
	obs::CallKind,
	rest::{self, RestErrorMapper},
};

impl<C, M> AuthzClient<C, M>
where
	C: ?Sized + RestHttpClient,
	M: ?Sized + RestErrorMapper<C::TransportError>,
{
	/// Checks whether `token` is a valid authorization for this application.
	///
	/// An unknown or revoked token answers 404, surfaced as [`Error::NotFound`].
	pub async fn check_token(&self, token: &str) -> Result<Authorization> {
		self.observed(CallKind::CheckToken, async move {
			non_blank("token", token)?;

			let client_id = self.app_client_id("check_token")?;
			let url = self.endpoint_url(&["applications", client_id, "tokens", token])?;
			let request =
				rest::build_request(RestMethod::Get, url, &self.credentials, None::<&()>)?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_decoded("Application token", response)
		})
		.await
	}

	/// Replaces `token` with a newly minted one, keeping the authorization's
	/// scopes and metadata. The response carries the new token.
	pub async fn reset_token(&self, token: &str) -> Result<Authorization> {
		self.observed(CallKind::ResetToken, async move {
			non_blank("token", token)?;

			let client_id = self.app_client_id("reset_token")?;
			let url = self.endpoint_url(&["applications", client_id, "tokens", token])?;
			let request =
				rest::build_request(RestMethod::Post, url, &self.credentials, None::<&()>)?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_decoded("Application token", response)
		})
		.await
	}

	/// Revokes a single token issued to this application (204 on success).
	pub async fn revoke_token(&self, token: &str) -> Result<()> {
		self.observed(CallKind::RevokeToken, async move {
			non_blank("token", token)?;

			let client_id = self.app_client_id("revoke_token")?;
			let url = self.endpoint_url(&["applications", client_id, "tokens", token])?;
			let request =
				rest::build_request(RestMethod::Delete, url, &self.credentials, None::<&()>)?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_empty("Application token", response)
		})
		.await
	}

	/// Revokes every token issued to this application (204 on success).
	pub async fn revoke_all_tokens(&self) -> Result<()> {
		self.observed(CallKind::RevokeAll, async move {
			let client_id = self.app_client_id("revoke_all_tokens")?;
			let url = self.endpoint_url(&["applications", client_id, "tokens"])?;
			let request =
				rest::build_request(RestMethod::Delete, url, &self.credentials, None::<&()>)?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_empty("Application tokens", response)
		})
		.await
	}
}
