//! Authorizer-level error types shared across the credential lifecycle.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical authorizer error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The provider could not issue or refresh a credential. Propagated unchanged;
	/// the authorizer never retries and never falls back to a stale credential.
	#[error(transparent)]
	Acquisition(#[from] AcquisitionError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Configuration and validation failures raised by the authorizer itself.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Token material cannot form a valid authorization header value.
	#[error("Authorization header value is invalid.")]
	InvalidHeaderValue {
		/// Underlying header validation failure.
		#[source]
		source: http::header::InvalidHeaderValue,
	},
}

/// Failures reported by a [`TokenProvider`](crate::provider::TokenProvider) during
/// token acquisition.
#[derive(Debug, ThisError)]
pub enum AcquisitionError {
	/// Provider rejected the grant (e.g., an expired or already-rotated refresh token).
	#[error("Provider rejected the grant: {reason}.")]
	InvalidGrant {
		/// Provider-supplied reason string.
		reason: String,
	},
	/// Client authentication failed or credentials are malformed.
	#[error("Client authentication failed: {reason}.")]
	InvalidClient {
		/// Provider-supplied reason string.
		reason: String,
	},
	/// Token has been revoked and must not be reused.
	#[error("Token has been revoked.")]
	Revoked,
	/// Token endpoint returned an unexpected response.
	#[error("Token endpoint returned an unexpected response: {message}.")]
	TokenEndpoint {
		/// Provider-supplied message summarizing the failure.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during acquisition.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
}
impl AcquisitionError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AcquisitionError {
	fn from(e: reqwest::Error) -> Self {
		Self::network(e)
	}
}
