//! Token provider boundary contract and grant descriptors.
//!
//! The provider is the collaborator that actually speaks the OAuth 2.0 wire
//! protocol; this crate only decides *when* to call it and with which grant.
//! The trait is object-safe and returns boxed `Send` futures so the authorizer
//! stays agnostic of the provider's HTTP stack.

// self
use crate::{_prelude::*, credential::Credential, error::AcquisitionError};

/// Boxed future returned by [`TokenProvider::acquire_token`].
pub type AcquireFuture<'a> =
	Pin<Box<dyn Future<Output = Result<Credential, AcquisitionError>> + 'a + Send>>;

/// Boundary contract for OAuth 2.0 token issuers.
///
/// The endpoint accessors exist so the authorizer can seed its default
/// exemption set; authorizing requests against these URLs would be circular.
pub trait TokenProvider
where
	Self: Send + Sync,
{
	/// Acquires a brand-new or refreshed credential for the requested grant.
	fn acquire_token(&self, grant: GrantRequest) -> AcquireFuture<'_>;

	/// Returns the provider's authorization endpoint URL.
	fn authorization_endpoint(&self) -> &Url;

	/// Returns the provider's token endpoint URL.
	fn token_endpoint(&self) -> &Url;
}

/// OAuth 2.0 grant types driven by the authorizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Client Credentials grant for app-only tokens.
	ClientCredentials,
	/// Refresh Token grant exchanging a long-lived refresh token.
	RefreshToken,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::ClientCredentials => "client_credentials",
			GrantType::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Grant request dispatched to a [`TokenProvider`], carrying grant-specific
/// parameters.
#[derive(Clone, PartialEq, Eq)]
pub enum GrantRequest {
	/// Request a brand-new credential with no user context.
	ClientCredentials,
	/// Exchange an existing refresh token for a new credential.
	RefreshToken {
		/// Refresh token string taken from the expiring credential.
		refresh_token: String,
	},
}
impl GrantRequest {
	/// Returns the grant type label for this request.
	pub fn grant_type(&self) -> GrantType {
		match self {
			GrantRequest::ClientCredentials => GrantType::ClientCredentials,
			GrantRequest::RefreshToken { .. } => GrantType::RefreshToken,
		}
	}
}
impl Debug for GrantRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			GrantRequest::ClientCredentials => f.debug_struct("ClientCredentials").finish(),
			GrantRequest::RefreshToken { .. } =>
				f.debug_struct("RefreshToken").field("refresh_token", &"<redacted>").finish(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn grant_type_labels_match_rfc_6749() {
		assert_eq!(GrantType::ClientCredentials.as_str(), "client_credentials");
		assert_eq!(GrantType::RefreshToken.to_string(), "refresh_token");
	}

	#[test]
	fn grant_request_maps_to_grant_type() {
		assert_eq!(GrantRequest::ClientCredentials.grant_type(), GrantType::ClientCredentials);
		assert_eq!(
			GrantRequest::RefreshToken { refresh_token: "rt".into() }.grant_type(),
			GrantType::RefreshToken,
		);
	}

	#[test]
	fn grant_request_debug_redacts_refresh_token() {
		let rendered = format!("{:?}", GrantRequest::RefreshToken { refresh_token: "rt-1".into() });

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("rt-1"));
	}
}
