//! Request authorization interceptor with demand-driven credential refresh.
//!
//! [`TokenAuthorizer`] owns the current [`Credential`] (copy-on-swap under a
//! singleflight mutex), an exemption matcher consulted before any credential
//! logic runs, and a shared [`TokenProvider`] collaborator that performs the
//! actual token exchanges. Refresh is strictly lazy: nothing is scheduled, the
//! provider is only called when an unauthorized request meets a missing or
//! expired credential.

// self
use crate::{
	_prelude::*,
	credential::Credential,
	exempt::{ExemptionSet, UrlExemptions},
	obs::{self, AcquisitionOutcome, AcquisitionSpan},
	provider::{GrantRequest, TokenProvider},
	request::AuthorizableRequest,
	scheme::AuthScheme,
};

/// Listener notified synchronously after a renewed credential has been swapped in.
///
/// `previous` is absent on the first-ever acquisition and carries the replaced
/// credential on every subsequent refresh. Listener panics are not caught.
pub trait RenewalListener
where
	Self: Send + Sync,
{
	/// Observes the renewed credential and the one it replaced.
	fn credential_renewed(&self, renewed: &Credential, previous: Option<&Credential>);
}
impl<F> RenewalListener for F
where
	F: Fn(&Credential, Option<&Credential>) + Send + Sync,
{
	fn credential_renewed(&self, renewed: &Credential, previous: Option<&Credential>) {
		self(renewed, previous)
	}
}

/// Authorizes outbound requests with provider-issued bearer credentials.
///
/// The authorizer exclusively owns its credential slot and exemption matcher;
/// the provider is injected and shared. Construction follows the builder
/// pattern: [`TokenAuthorizer::new`] seeds the exemption set with the
/// provider's authorization + token endpoints, and `with_*` methods override
/// the defaults.
pub struct TokenAuthorizer<P>
where
	P: ?Sized + TokenProvider,
{
	provider: Arc<P>,
	scheme: AuthScheme,
	exemptions: Box<dyn UrlExemptions>,
	listener: Option<Box<dyn RenewalListener>>,
	// `None` is the already-expired bootstrap state: the first authorize call
	// acquires via client_credentials and the listener sees no previous value.
	credential: AsyncMutex<Option<Credential>>,
}
impl<P> TokenAuthorizer<P>
where
	P: ?Sized + TokenProvider,
{
	/// Creates a bearer authorizer for the provided token provider.
	///
	/// No initial credential is stored, so the very first unauthorized request
	/// triggers a `client_credentials` acquisition. The default exemption set
	/// contains the provider's authorization and token endpoint URLs;
	/// authorizing requests to these endpoints would be circular.
	pub fn new(provider: Arc<P>) -> Self {
		let exemptions = ExemptionSet::new([
			provider.authorization_endpoint().as_str(),
			provider.token_endpoint().as_str(),
		]);

		Self {
			provider,
			scheme: AuthScheme::bearer(),
			exemptions: Box::new(exemptions),
			listener: None,
			credential: AsyncMutex::new(None),
		}
	}

	/// Seeds the authorizer with an initial (e.g. persisted) credential.
	pub fn with_credential(mut self, credential: Credential) -> Self {
		self.credential = AsyncMutex::new(Some(credential));

		self
	}

	/// Replaces the default bearer scheme.
	pub fn with_scheme(mut self, scheme: AuthScheme) -> Self {
		self.scheme = scheme;

		self
	}

	/// Replaces the default endpoint-seeded exemption matcher.
	pub fn with_exemptions(mut self, exemptions: impl 'static + UrlExemptions) -> Self {
		self.exemptions = Box::new(exemptions);

		self
	}

	/// Registers a listener invoked after every credential renewal.
	pub fn with_renewal_listener(mut self, listener: impl 'static + RenewalListener) -> Self {
		self.listener = Some(Box::new(listener));

		self
	}

	/// Returns the scheme applied to authorized requests.
	pub fn scheme(&self) -> &AuthScheme {
		&self.scheme
	}

	/// Returns `true` iff the request already carries the scheme's header.
	///
	/// Pure predicate with no side effects.
	pub fn is_authorized<R>(&self, request: &R) -> bool
	where
		R: AuthorizableRequest,
	{
		request.has_header(self.scheme.header_name())
	}

	/// Extracts the token carried by the request's authorization header, if any.
	pub fn authorized_token<'r, R>(&self, request: &'r R) -> Option<&'r str>
	where
		R: AuthorizableRequest,
	{
		request.header(self.scheme.header_name()).and_then(|value| self.scheme.extract_token(value))
	}

	/// Authorizes an outbound request.
	///
	/// Exempted and already-authorized requests are returned unchanged with no
	/// provider interaction, which also makes the operation idempotent: the
	/// result of one call short-circuits the next. Otherwise a valid credential
	/// is ensured (refreshing or acquiring on demand) and the request comes
	/// back with the header set to `"<scheme> <token>"`. Acquisition failures
	/// propagate unchanged; retrying is the caller's responsibility.
	pub async fn authorize<R>(&self, request: R) -> Result<R>
	where
		R: AuthorizableRequest,
	{
		if self.exemptions.contains(request.url().as_str()) {
			return Ok(request);
		}
		if self.is_authorized(&request) {
			return Ok(request);
		}

		let value = self.ensure_header_value().await?;

		Ok(request.with_header(self.scheme.header_name().clone(), value))
	}

	/// Ensures a valid credential under the singleflight mutex and renders its
	/// header value. Concurrent callers block here instead of issuing duplicate
	/// provider calls.
	async fn ensure_header_value(&self) -> Result<HeaderValue> {
		let mut slot = self.credential.lock().await;
		let now = OffsetDateTime::now_utc();

		if let Some(current) = slot.as_ref().filter(|current| !current.is_expired_at(now)) {
			return Ok(self.scheme.header_value(current.token().expose())?);
		}

		// A credential carrying a refresh token is refreshed; anything else
		// (bootstrap included) goes through client_credentials.
		let grant = match slot.as_ref().and_then(Credential::refresh_token) {
			Some(secret) =>
				GrantRequest::RefreshToken { refresh_token: secret.expose().to_owned() },
			None => GrantRequest::ClientCredentials,
		};
		let grant_type = grant.grant_type();
		let span = AcquisitionSpan::new(grant_type, "authorize");

		obs::record_acquisition(grant_type, AcquisitionOutcome::Attempt);

		let result = span.instrument(self.provider.acquire_token(grant)).await;

		match &result {
			Ok(_) => obs::record_acquisition(grant_type, AcquisitionOutcome::Success),
			Err(_) => obs::record_acquisition(grant_type, AcquisitionOutcome::Failure),
		}

		// On failure the slot is left untouched; the next call decides again.
		let renewed = result.map_err(Error::from)?;
		let previous = slot.take();
		let renewed = slot.insert(renewed);

		if let Some(listener) = &self.listener {
			listener.credential_renewed(renewed, previous.as_ref());
		}

		Ok(self.scheme.header_value(renewed.token().expose())?)
	}
}
impl<P> Debug for TokenAuthorizer<P>
where
	P: ?Sized + TokenProvider,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenAuthorizer")
			.field("scheme", &self.scheme)
			.field("listener_set", &self.listener.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{error::AcquisitionError, provider::AcquireFuture};

	struct UnreachableProvider {
		authorization: Url,
		token: Url,
	}
	impl UnreachableProvider {
		fn new() -> Self {
			Self {
				authorization: Url::parse("https://auth.example/authorize")
					.expect("Authorization endpoint fixture should parse."),
				token: Url::parse("https://auth.example/token")
					.expect("Token endpoint fixture should parse."),
			}
		}
	}
	impl TokenProvider for UnreachableProvider {
		fn acquire_token(&self, _grant: GrantRequest) -> AcquireFuture<'_> {
			Box::pin(async {
				Err(AcquisitionError::InvalidClient {
					reason: "This test never reaches the provider.".into(),
				})
			})
		}

		fn authorization_endpoint(&self) -> &Url {
			&self.authorization
		}

		fn token_endpoint(&self) -> &Url {
			&self.token
		}
	}

	#[derive(Debug)]
	struct PlainRequest {
		url: Url,
		headers: http::HeaderMap,
	}
	impl PlainRequest {
		fn get(url: &str) -> Self {
			Self {
				url: Url::parse(url).expect("Request URL fixture should parse."),
				headers: http::HeaderMap::new(),
			}
		}
	}
	impl AuthorizableRequest for PlainRequest {
		fn url(&self) -> &Url {
			&self.url
		}

		fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
			self.headers.get(name)
		}

		fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
			self.headers.insert(name, value);

			self
		}
	}

	#[tokio::test]
	async fn default_exemptions_cover_provider_endpoints() {
		let authorizer = TokenAuthorizer::new(Arc::new(UnreachableProvider::new()));
		let request = authorizer
			.authorize(PlainRequest::get("https://auth.example/token"))
			.await
			.expect("Requests to the token endpoint should bypass acquisition entirely.");

		assert!(!authorizer.is_authorized(&request));

		let request = authorizer
			.authorize(PlainRequest::get("https://auth.example/authorize"))
			.await
			.expect("Requests to the authorization endpoint should bypass acquisition entirely.");

		assert!(!authorizer.is_authorized(&request));
	}

	#[tokio::test]
	async fn already_authorized_requests_pass_through() {
		let authorizer = TokenAuthorizer::new(Arc::new(UnreachableProvider::new()));
		let request = PlainRequest::get("https://api.example/resource").with_header(
			authorizer.scheme().header_name().clone(),
			HeaderValue::from_static("Bearer pre-existing"),
		);

		assert!(authorizer.is_authorized(&request));

		let request = authorizer
			.authorize(request)
			.await
			.expect("Already-authorized requests should never reach the provider.");

		assert_eq!(authorizer.authorized_token(&request), Some("pre-existing"));
	}

	#[tokio::test]
	async fn acquisition_failure_propagates() {
		let authorizer = TokenAuthorizer::new(Arc::new(UnreachableProvider::new()));
		let err = authorizer
			.authorize(PlainRequest::get("https://api.example/resource"))
			.await
			.expect_err("Provider failure should surface to the authorize caller.");

		assert!(matches!(err, Error::Acquisition(AcquisitionError::InvalidClient { .. })));
	}

	#[test]
	fn debug_output_omits_credential_state() {
		let authorizer = TokenAuthorizer::new(Arc::new(UnreachableProvider::new()))
			.with_credential(Credential::new("secret-token"));
		let rendered = format!("{authorizer:?}");

		assert!(!rendered.contains("secret-token"));
		assert!(rendered.contains("listener_set: false"));
	}
}
