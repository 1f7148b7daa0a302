// crates.io
use httpmock::prelude::*;
// self
use gh_authz::{
	_preludet::*,
	credentials::Credentials,
	error::{ConfigError, TransientError},
};

const CLIENT_ID: &str = "abcdef0123456789abcd";
const CLIENT_SECRET: &str = "app-secret";

fn app_client(server: &MockServer) -> ReqwestTestClient {
	build_test_client(
		&server.base_url(),
		Credentials::app(CLIENT_ID, CLIENT_SECRET).expect("App credentials should be valid."),
	)
}

fn authorization_json(id: u64, token: &str) -> String {
	format!(
		"{{\"id\":{id},\
		\"url\":\"https://api.github.com/authorizations/{id}\",\
		\"token\":\"{token}\",\
		\"app\":{{\"name\":\"my-ci\",\"url\":\"https://example.com/my-ci\",\
		\"client_id\":\"{CLIENT_ID}\"}},\
		\"scopes\":[\"repo\"],\
		\"created_at\":\"2017-01-02T03:04:05Z\",\
		\"updated_at\":\"2017-01-02T03:04:05Z\"}}"
	)
}

#[tokio::test]
async fn check_token_returns_the_authorization() {
	let server = MockServer::start_async().await;
	let client = app_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/applications/{CLIENT_ID}/tokens/live-token"));
			then.status(200)
				.header("content-type", "application/json")
				.body(authorization_json(13, "live-token"));
		})
		.await;
	let authorization =
		client.check_token("live-token").await.expect("Checking a live token should succeed.");

	assert_eq!(authorization.id, 13);
	assert_eq!(authorization.token.expose(), "live-token");

	mock.assert_async().await;
}

#[tokio::test]
async fn check_token_maps_unknown_tokens_to_not_found() {
	let server = MockServer::start_async().await;
	let client = app_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/applications/{CLIENT_ID}/tokens/dead-token"));
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"message\":\"Not Found\"}");
		})
		.await;
	let err = client
		.check_token("dead-token")
		.await
		.expect_err("Unknown tokens should map to NotFound.");

	assert!(matches!(err, Error::NotFound { .. }));

	mock.assert_async().await;
}

#[tokio::test]
async fn reset_token_returns_the_replacement() {
	let server = MockServer::start_async().await;
	let client = app_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(format!("/applications/{CLIENT_ID}/tokens/old-token"));
			then.status(200)
				.header("content-type", "application/json")
				.body(authorization_json(13, "new-token"));
		})
		.await;
	let authorization =
		client.reset_token("old-token").await.expect("Resetting a token should succeed.");

	assert_eq!(authorization.token.expose(), "new-token");

	mock.assert_async().await;
}

#[tokio::test]
async fn revoke_endpoints_accept_no_content() {
	let server = MockServer::start_async().await;
	let client = app_client(&server);
	let single = server
		.mock_async(|when, then| {
			when.method(DELETE).path(format!("/applications/{CLIENT_ID}/tokens/old-token"));
			then.status(204);
		})
		.await;
	let bulk = server
		.mock_async(|when, then| {
			when.method(DELETE).path(format!("/applications/{CLIENT_ID}/tokens"));
			then.status(204);
		})
		.await;

	client.revoke_token("old-token").await.expect("Revoking a single token should succeed.");
	client.revoke_all_tokens().await.expect("Revoking all tokens should succeed.");

	single.assert_async().await;
	bulk.assert_async().await;
}

#[tokio::test]
async fn blank_tokens_are_rejected_without_a_request() {
	let server = MockServer::start_async().await;
	let client = app_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET);
			then.status(200);
		})
		.await;
	let err = client
		.check_token(" ")
		.await
		.expect_err("Blank tokens should be rejected locally.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::InvalidArgument { name: "token", .. }),
	));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn app_endpoints_reject_basic_credentials() {
	let server = MockServer::start_async().await;
	let client = build_test_client(
		&server.base_url(),
		Credentials::basic("octocat", "password").expect("Basic credentials should be valid."),
	);
	let err = client
		.revoke_all_tokens()
		.await
		.expect_err("App endpoints should demand application credentials.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::MissingCredentials { endpoint: "revoke_all_tokens", .. }),
	));
}

#[tokio::test]
async fn rate_limited_calls_surface_retry_hints() {
	let server = MockServer::start_async().await;
	let client = app_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/applications/{CLIENT_ID}/tokens/live-token"));
			then.status(429)
				.header("retry-after", "30")
				.header("content-type", "application/json")
				.body("{\"message\":\"API rate limit exceeded\"}");
		})
		.await;
	let err = client
		.check_token("live-token")
		.await
		.expect_err("Rate limits should surface as transient errors.");
	let Error::Transient(TransientError::Api { status, retry_after, .. }) = err else {
		panic!("429 should map to TransientError::Api.");
	};

	assert_eq!(status, Some(429));
	assert!(retry_after.is_some());

	mock.assert_async().await;
}
