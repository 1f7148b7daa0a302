//! Streams every authorization owned by an account from a mock deployment and prints the
//! page-by-page results as one flat listing.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use futures::TryStreamExt;
use httpmock::prelude::*;
// self
use gh_authz::{
	authz::AuthzClient,
	credentials::Credentials,
	http::ReqwestRestClient,
	rest::ReqwestRestErrorMapper,
};

fn authorization_json(id: u64) -> String {
	format!(
		"{{\"id\":{id},\
		\"url\":\"https://api.github.com/authorizations/{id}\",\
		\"token\":\"demo-token-{id}\",\
		\"app\":{{\"name\":\"demo-app\",\"url\":\"https://example.com/demo-app\",\
		\"client_id\":\"abcdef0123456789abcd\"}},\
		\"scopes\":[\"repo\"],\
		\"note\":\"demo authorization {id}\",\
		\"created_at\":\"2017-01-02T03:04:05Z\",\
		\"updated_at\":\"2017-01-02T03:04:05Z\"}}"
	)
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let next = format!("{}/authorizations?page=2", server.base_url());

	server
		.mock_async(|when, then| {
			when.method(GET).path("/authorizations").query_param_missing("page");
			then.status(200)
				.header("content-type", "application/json")
				.header("link", format!("<{next}>; rel=\"next\""))
				.body(format!("[{},{}]", authorization_json(1), authorization_json(2)));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/authorizations").query_param("page", "2");
			then.status(200)
				.header("content-type", "application/json")
				.body(format!("[{}]", authorization_json(3)));
		})
		.await;

	let credentials = Credentials::basic("octocat", "password")?;
	let client: AuthzClient<ReqwestRestClient, ReqwestRestErrorMapper> =
		AuthzClient::with_http_client(
		credentials,
		ReqwestRestClient::default(),
		Arc::new(ReqwestRestErrorMapper),
	)?
	.with_base_url(server.base_url())?;
	let authorizations: Vec<_> = client.list().try_collect().await?;

	for authorization in &authorizations {
		println!(
			"#{} app={} scopes={:?} note={}",
			authorization.id,
			authorization.app.name,
			authorization.scopes,
			authorization.note.as_deref().unwrap_or("-"),
		);
	}

	Ok(())
}
