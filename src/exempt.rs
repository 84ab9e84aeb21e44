//! URL exemption contracts and the built-in exact-match set.
//!
//! Requests to a provider's own authorization and token endpoints must never be
//! authorized—obtaining a token to fetch a token is circular—so the authorizer
//! consults an exemption matcher before any credential logic runs. The matching
//! contract is a capability trait; alternative strategies (prefix, pattern) can
//! substitute without touching [`TokenAuthorizer`](crate::authorizer::TokenAuthorizer).

// self
use crate::_prelude::*;

/// Capability contract for deciding whether a URL is exempt from authorization.
pub trait UrlExemptions
where
	Self: Send + Sync,
{
	/// Returns `true` when the URL must not be authorized. Never fails.
	fn contains(&self, url: &str) -> bool;
}

/// Thread-safe exact-match exemption set.
///
/// Cloning is shallow: a cloned handle shares state with the original, so a
/// caller can keep a handle and keep mutating the set the authorizer consults.
#[derive(Clone, Debug, Default)]
pub struct ExemptionSet(Arc<RwLock<HashSet<String>>>);
impl ExemptionSet {
	/// Builds a set from the provided URLs.
	pub fn new(urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self(Arc::new(RwLock::new(urls.into_iter().map(Into::into).collect())))
	}

	/// Adds a URL to the set. Idempotent; duplicates are never stored.
	pub fn add(&self, url: impl Into<String>) {
		self.0.write().insert(url.into());
	}

	/// Removes a URL from the set. No-op when absent.
	pub fn remove(&self, url: &str) {
		self.0.write().remove(url);
	}

	/// Returns `true` when the exact URL is present. An empty candidate never matches.
	pub fn contains(&self, url: &str) -> bool {
		if url.is_empty() {
			return false;
		}

		self.0.read().contains(url)
	}

	/// Returns the number of exempted URLs.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when no URLs are exempted.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
impl UrlExemptions for ExemptionSet {
	fn contains(&self, url: &str) -> bool {
		ExemptionSet::contains(self, url)
	}
}
