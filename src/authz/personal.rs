//! Personal authorization endpoints (basic credentials).
//!
//! Each method validates its arguments locally, checks that the client holds
//! account credentials, then delegates exactly one request to the transport.
//! The listing endpoint is the crate's push-based surface: it adapts the
//! service's `Link`-paginated collection into a lazy [`Stream`].

// self
use crate::{
	_prelude::*,
	authz::{AuthzClient, non_blank, positive_id},
	error::ConfigError,
	http::{RestHttpClient, RestMethod},
	model::{Authorization, AuthorizationUpdate, NewAuthorization},
	obs::CallKind,
	page::{self, Page},
	rest::{self, RestErrorMapper},
};

impl<C, M> AuthzClient<C, M>
where
	C: ?Sized + RestHttpClient,
	M: ?Sized + RestErrorMapper<C::TransportError>,
{
	/// Streams every authorization granted to the authenticated account.
	///
	/// Pages are fetched lazily: each `Link: rel="next"` page is requested only
	/// after the previous page's items have been drained. Credential-kind and
	/// transport failures surface as the stream's first error item.
	pub fn list(&self) -> impl Stream<Item = Result<Authorization>> + '_ {
		page::paginate(move |cursor| self.list_page(cursor))
	}

	/// Fetches one page of authorizations.
	///
	/// `cursor` is `None` for the first page and the `rel="next"` URL taken from
	/// the previous [`Page`] afterwards.
	pub async fn list_page(&self, cursor: Option<Url>) -> Result<Page<Authorization>> {
		self.observed(CallKind::List, async move {
			self.ensure_basic("list")?;

			let url = match cursor {
				Some(url) => url,
				None => self.endpoint_url(&["authorizations"])?,
			};
			let request =
				rest::build_request(RestMethod::Get, url, &self.credentials, None::<&()>)?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			if !response.is_success() {
				return Err(rest::classify_failure("Authorization list", &response));
			}

			let next = response.meta.link.as_deref().and_then(page::parse_next_link);
			let items = rest::decode_json(&response)?;

			Ok(Page { items, next })
		})
		.await
	}

	/// Fetches a single authorization by id.
	pub async fn get(&self, id: u64) -> Result<Authorization> {
		self.observed(CallKind::Get, async move {
			positive_id(id)?;
			self.ensure_basic("get")?;

			let url = self.endpoint_url(&["authorizations", &id.to_string()])?;
			let request =
				rest::build_request(RestMethod::Get, url, &self.credentials, None::<&()>)?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_decoded(&format!("Authorization {id}"), response)
		})
		.await
	}

	/// Creates a new authorization.
	pub async fn create(&self, new: &NewAuthorization) -> Result<Authorization> {
		self.observed(CallKind::Create, async move {
			self.ensure_basic("create")?;

			let url = self.endpoint_url(&["authorizations"])?;
			let request = rest::build_request(RestMethod::Post, url, &self.credentials, Some(new))?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_decoded("Authorization", response)
		})
		.await
	}

	/// Fetches the account's existing authorization for the given application,
	/// creating one when none exists yet.
	///
	/// The payload must carry the application's
	/// [`client_secret`](NewAuthorization::client_secret) so the service can
	/// verify application ownership.
	pub async fn get_or_create_for_app(
		&self,
		client_id: &str,
		new: &NewAuthorization,
	) -> Result<Authorization> {
		self.observed(CallKind::GetOrCreate, async move {
			non_blank("client_id", client_id)?;

			if new.client_secret.is_none() {
				return Err(ConfigError::InvalidArgument {
					name: "new.client_secret",
					reason: "required by the create-or-get endpoint",
				}
				.into());
			}

			self.ensure_basic("get_or_create_for_app")?;

			let url = self.endpoint_url(&["authorizations", "clients", client_id])?;
			let request = rest::build_request(RestMethod::Put, url, &self.credentials, Some(new))?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_decoded(&format!("Authorization for application {client_id}"), response)
		})
		.await
	}

	/// Updates an existing authorization.
	pub async fn update(&self, id: u64, update: &AuthorizationUpdate) -> Result<Authorization> {
		self.observed(CallKind::Update, async move {
			positive_id(id)?;
			self.ensure_basic("update")?;

			let url = self.endpoint_url(&["authorizations", &id.to_string()])?;
			let request =
				rest::build_request(RestMethod::Patch, url, &self.credentials, Some(update))?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_decoded(&format!("Authorization {id}"), response)
		})
		.await
	}

	/// Deletes an authorization. Succeeds with no payload (204).
	pub async fn delete(&self, id: u64) -> Result<()> {
		self.observed(CallKind::Delete, async move {
			positive_id(id)?;
			self.ensure_basic("delete")?;

			let url = self.endpoint_url(&["authorizations", &id.to_string()])?;
			let request =
				rest::build_request(RestMethod::Delete, url, &self.credentials, None::<&()>)?;
			let response = rest::dispatch(
				self.http_client.as_ref(),
				self.transport_mapper.as_ref(),
				request,
			)
			.await?;

			rest::into_empty(&format!("Authorization {id}"), response)
		})
		.await
	}
}
