//! Async client for GitHub's OAuth authorizations API—stream-based listing, typed errors, and
//! pluggable transports.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod authz;
pub mod credentials;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod page;
pub mod rest;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		authz::AuthzClient,
		credentials::Credentials,
		http::ReqwestRestClient,
		rest::ReqwestRestErrorMapper,
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = AuthzClient<ReqwestRestClient, ReqwestRestErrorMapper>;

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_rest_client() -> ReqwestRestClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestRestClient::with_client(client)
	}

	/// Constructs an [`AuthzClient`] pointed at a mock server base URL.
	pub fn build_test_client(base_url: &str, credentials: Credentials) -> ReqwestTestClient {
		AuthzClient::with_http_client(
			credentials,
			test_rest_client(),
			Arc::new(ReqwestRestErrorMapper),
		)
		.and_then(|client| client.with_base_url(base_url))
		.expect("Test client should build successfully.")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use futures::Stream;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, gh_authz as _, httpmock as _};
