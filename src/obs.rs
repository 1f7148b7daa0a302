//! Optional observability helpers for endpoint calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `gh_authz.call` with the `endpoint` and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `gh_authz_call_total` counter for every
//!   attempt/success/failure, labeled by `endpoint` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Endpoint methods observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Paginated authorization listing.
	List,
	/// Single authorization fetch by id.
	Get,
	/// Authorization creation.
	Create,
	/// Create-or-get for a specific application.
	GetOrCreate,
	/// Authorization update by id.
	Update,
	/// Authorization deletion by id.
	Delete,
	/// Application token check.
	CheckToken,
	/// Application token reset.
	ResetToken,
	/// Single application token revocation.
	RevokeToken,
	/// Bulk application token revocation.
	RevokeAll,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::List => "list",
			CallKind::Get => "get",
			CallKind::Create => "create",
			CallKind::GetOrCreate => "get_or_create",
			CallKind::Update => "update",
			CallKind::Delete => "delete",
			CallKind::CheckToken => "check_token",
			CallKind::ResetToken => "reset_token",
			CallKind::RevokeToken => "revoke_token",
			CallKind::RevokeAll => "revoke_all",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to an endpoint method.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
