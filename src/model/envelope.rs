//! Error envelope returned by the service on non-success statuses.

// self
use crate::_prelude::*;

/// Top-level error body (`message` plus optional per-field failures).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
	/// Human-readable summary.
	#[serde(default)]
	pub message: Option<String>,
	/// Structured failures attached to 422 responses.
	#[serde(default)]
	pub errors: Vec<FieldFailure>,
}

/// One structured failure inside a validation error envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
	/// Resource the failure refers to (e.g. `Authorization`).
	#[serde(default)]
	pub resource: Option<String>,
	/// Offending field name.
	#[serde(default)]
	pub field: Option<String>,
	/// Failure code (e.g. `missing_field`, `invalid`, `already_exists`).
	#[serde(default)]
	pub code: Option<String>,
}
impl Display for FieldFailure {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(
			f,
			"{}.{}: {}",
			self.resource.as_deref().unwrap_or("?"),
			self.field.as_deref().unwrap_or("?"),
			self.code.as_deref().unwrap_or("?"),
		)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn envelope_decodes_with_and_without_errors() {
		let bare: ErrorBody = serde_json::from_str(r#"{"message":"Not Found"}"#)
			.expect("Bare envelope should deserialize.");

		assert_eq!(bare.message.as_deref(), Some("Not Found"));
		assert!(bare.errors.is_empty());

		let full: ErrorBody = serde_json::from_str(
			r#"{"message":"Validation Failed","errors":[{"resource":"Authorization","field":"scopes","code":"invalid"}]}"#,
		)
		.expect("Full envelope should deserialize.");

		assert_eq!(full.errors.len(), 1);
		assert_eq!(full.errors[0].to_string(), "Authorization.scopes: invalid");
	}
}
