//! Authorization scheme value object.
//!
//! One concrete authorizer parameterized by a scheme value replaces the
//! per-scheme subclassing found in older middleware designs: the scheme carries
//! the header name, the scheme literal, and the token-extraction rule, and the
//! authorizer composes it.

// crates.io
use http::header::AUTHORIZATION;
// self
use crate::{_prelude::*, error::ConfigError};

/// Header scheme applied to authorized requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthScheme {
	header: HeaderName,
	literal: String,
}
impl AuthScheme {
	/// RFC 6750 bearer scheme on the `Authorization` header.
	pub fn bearer() -> Self {
		Self::new(AUTHORIZATION, "Bearer")
	}

	/// Creates a scheme for the provided header name and scheme literal.
	pub fn new(header: HeaderName, literal: impl Into<String>) -> Self {
		Self { header, literal: literal.into() }
	}

	/// Returns the header name this scheme writes to.
	pub fn header_name(&self) -> &HeaderName {
		&self.header
	}

	/// Returns the scheme literal prefixed to token values.
	pub fn literal(&self) -> &str {
		&self.literal
	}

	/// Formats `"<scheme> <token>"` as a validated header value.
	pub fn header_value(&self, token: &str) -> Result<HeaderValue, ConfigError> {
		let mut value = HeaderValue::from_str(&format!("{} {token}", self.literal))
			.map_err(|source| ConfigError::InvalidHeaderValue { source })?;

		value.set_sensitive(true);

		Ok(value)
	}

	/// Extracts the token from a header value carrying this scheme.
	pub fn extract_token<'v>(&self, value: &'v HeaderValue) -> Option<&'v str> {
		value.to_str().ok()?.strip_prefix(self.literal.as_str())?.strip_prefix(' ')
	}
}
impl Default for AuthScheme {
	fn default() -> Self {
		Self::bearer()
	}
}
