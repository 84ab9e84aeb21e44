//! Request value seam consumed by the authorizer.
//!
//! The authorizer treats the HTTP message as an immutable value with
//! get/with-header operations; the trait keeps it independent of any concrete
//! client. A binding for [`reqwest::Request`] ships behind the default-on
//! `reqwest` feature.

// self
use crate::_prelude::*;

/// Immutable request value the authorizer can inspect and extend.
///
/// `with_header` is copy-on-write by move: implementations consume the request
/// and return the modified value, leaving no aliased original behind.
pub trait AuthorizableRequest
where
	Self: Sized,
{
	/// Returns the request's target URL.
	fn url(&self) -> &Url;

	/// Returns `true` when the request carries the named header.
	fn has_header(&self, name: &HeaderName) -> bool {
		self.header(name).is_some()
	}

	/// Returns the named header's value, if present.
	fn header(&self, name: &HeaderName) -> Option<&HeaderValue>;

	/// Returns the request with the named header set, replacing any prior value.
	fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

#[cfg(feature = "reqwest")]
impl AuthorizableRequest for reqwest::Request {
	fn url(&self) -> &Url {
		reqwest::Request::url(self)
	}

	fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
		self.headers().get(name)
	}

	fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers_mut().insert(name, value);

		self
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use http::header::AUTHORIZATION;
	use reqwest::{Client, Method};
	// self
	use super::*;

	fn request(url: &str) -> reqwest::Request {
		Client::new()
			.request(Method::GET, url)
			.build()
			.expect("Test request should build successfully.")
	}

	#[test]
	fn reqwest_binding_reads_url_and_headers() {
		let request = request("https://api.example/resource");

		assert_eq!(AuthorizableRequest::url(&request).as_str(), "https://api.example/resource");
		assert!(!request.has_header(&AUTHORIZATION));

		let request = request.with_header(AUTHORIZATION, HeaderValue::from_static("Bearer 123"));

		assert!(request.has_header(&AUTHORIZATION));
		assert_eq!(
			request.header(&AUTHORIZATION).map(HeaderValue::as_bytes),
			Some(b"Bearer 123".as_slice()),
		);
	}

	#[test]
	fn with_header_replaces_prior_value() {
		let request = request("https://api.example/resource")
			.with_header(AUTHORIZATION, HeaderValue::from_static("Bearer old"))
			.with_header(AUTHORIZATION, HeaderValue::from_static("Bearer new"));

		assert_eq!(
			request.header(&AUTHORIZATION).map(HeaderValue::as_bytes),
			Some(b"Bearer new".as_slice()),
		);
	}
}
