//! OAuth 2.0 request authorization interceptor—exemption-aware bearer injection,
//! demand-driven token refresh, and copy-on-swap credential state in one crate.
//!
//! The crate sits between a request pipeline and its transport: hand
//! [`authorizer::TokenAuthorizer::authorize`] an outbound request and it comes back
//! untouched (exempted or already authorized) or carrying a freshly ensured
//! `Authorization` header. Token acquisition is delegated to a
//! [`provider::TokenProvider`] collaborator; the wire protocol and the transport
//! are deliberately out of scope.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod authorizer;
pub mod credential;
pub mod error;
pub mod exempt;
pub mod obs;
pub mod provider;
pub mod request;
pub mod scheme;

mod _prelude {
	pub use std::{
		collections::HashSet,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use http::header::{HeaderName, HeaderValue};
	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use http;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use time;
pub use url;
#[cfg(test)] use color_eyre as _;
