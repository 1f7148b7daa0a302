//! Checks two OAuth tokens against a mock deployment with application credentials: one still
//! live, one already revoked.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use gh_authz::{
	authz::AuthzClient,
	credentials::Credentials,
	error::Error,
	http::ReqwestRestClient,
	rest::ReqwestRestErrorMapper,
};

const CLIENT_ID: &str = "abcdef0123456789abcd";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/applications/{CLIENT_ID}/tokens/live-token"));
			then.status(200).header("content-type", "application/json").body(format!(
				"{{\"id\":7,\
				\"url\":\"https://api.github.com/authorizations/7\",\
				\"token\":\"live-token\",\
				\"app\":{{\"name\":\"demo-app\",\"url\":\"https://example.com/demo-app\",\
				\"client_id\":\"{CLIENT_ID}\"}},\
				\"scopes\":[\"repo\"],\
				\"created_at\":\"2017-01-02T03:04:05Z\",\
				\"updated_at\":\"2017-01-02T03:04:05Z\"}}"
			));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/applications/{CLIENT_ID}/tokens/revoked-token"));
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"message\":\"Not Found\"}");
		})
		.await;

	let credentials = Credentials::app(CLIENT_ID, "app-secret")?;
	let client: AuthzClient<ReqwestRestClient, ReqwestRestErrorMapper> =
		AuthzClient::with_http_client(
		credentials,
		ReqwestRestClient::default(),
		Arc::new(ReqwestRestErrorMapper),
	)?
	.with_base_url(server.base_url())?;

	for token in ["live-token", "revoked-token"] {
		match client.check_token(token).await {
			Ok(authorization) =>
				println!("{token}: valid for #{} scopes={:?}", authorization.id, authorization.scopes),
			Err(Error::NotFound { .. }) => println!("{token}: revoked or unknown"),
			Err(e) => return Err(e.into()),
		}
	}

	Ok(())
}
