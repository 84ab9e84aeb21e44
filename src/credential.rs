//! Immutable bearer credential value type and lifecycle helpers.

pub mod secret;

pub use secret::TokenSecret;

// self
use crate::_prelude::*;

/// Immutable credential issued by a token provider.
///
/// A credential is replaced wholesale on refresh, never mutated in place; the
/// previous value only survives long enough to reach a renewal listener. A
/// credential without an expiry instant never expires.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
	/// Access token secret; callers must avoid logging it.
	token: TokenSecret,
	/// Absolute expiry instant, if the provider bounded the credential's lifetime.
	expires_at: Option<OffsetDateTime>,
	/// Refresh token secret, if the provider issued one.
	refresh_token: Option<TokenSecret>,
}
impl Credential {
	/// Creates a never-expiring credential carrying only an access token.
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: TokenSecret::new(token), expires_at: None, refresh_token: None }
	}

	/// Sets an absolute expiry instant.
	pub fn with_expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.expires_at = Some(instant);

		self
	}

	/// Sets a relative expiry duration from the current clock.
	pub fn with_expires_in(self, delta: Duration) -> Self {
		self.with_expires_at(OffsetDateTime::now_utc() + delta)
	}

	/// Attaches a refresh token.
	pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Returns the access token secret.
	pub fn token(&self) -> &TokenSecret {
		&self.token
	}

	/// Returns the expiry instant, if any.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.expires_at
	}

	/// Returns the refresh token secret, if the provider issued one.
	pub fn refresh_token(&self) -> Option<&TokenSecret> {
		self.refresh_token.as_ref()
	}

	/// Returns `true` when no expiry instant was recorded.
	pub fn never_expires(&self) -> bool {
		self.expires_at.is_none()
	}

	/// Returns `true` if the credential has expired at the provided instant.
	///
	/// The boundary counts: a credential expiring exactly at `instant` is expired.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		match self.expires_at {
			Some(expires_at) => instant >= expires_at,
			None => false,
		}
	}

	/// Returns `true` if the credential is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn expiry_boundary_counts_as_expired() {
		let instant = macros::datetime!(2025-01-01 00:00 UTC);
		let credential = Credential::new("123").with_expires_at(instant);

		assert!(credential.is_expired_at(instant));
		assert!(credential.is_expired_at(instant + Duration::seconds(1)));
		assert!(!credential.is_expired_at(instant - Duration::seconds(1)));
	}

	#[test]
	fn missing_expiry_never_expires() {
		let credential = Credential::new("eternal");

		assert!(credential.never_expires());
		assert!(!credential.is_expired_at(macros::datetime!(9999-12-31 23:59 UTC)));
		assert!(!credential.is_expired());
	}

	#[test]
	fn builder_modifiers_populate_fields() {
		let expires = macros::datetime!(2025-06-01 12:00 UTC);
		let credential =
			Credential::new("access").with_expires_at(expires).with_refresh_token("refresh");

		assert_eq!(credential.token().expose(), "access");
		assert_eq!(credential.expires_at(), Some(expires));
		assert_eq!(
			credential
				.refresh_token()
				.expect("Refresh token should be recorded by the builder.")
				.expose(),
			"refresh",
		);
	}

	#[test]
	fn debug_output_redacts_secrets() {
		// Fixture values must not collide with the rendered field names, so the
		// assertions catch leaked secret material rather than struct labels.
		let credential =
			Credential::new("bearer-material").with_refresh_token("rotate-material");
		let rendered = format!("{credential:?}");

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("bearer-material"));
		assert!(!rendered.contains("rotate-material"));
	}

	#[test]
	fn credential_round_trips_through_serde() {
		let expires = macros::datetime!(2025-03-01 08:30 UTC);
		let credential =
			Credential::new("persist-me").with_expires_at(expires).with_refresh_token("rotate-me");
		let payload = serde_json::to_string(&credential)
			.expect("Credential should serialize for persistence.");
		let restored: Credential = serde_json::from_str(&payload)
			.expect("Serialized credential should deserialize from JSON.");

		assert_eq!(restored, credential);
	}
}
