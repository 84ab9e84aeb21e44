//! Demonstrates authorizing an outbound reqwest request: the first call bootstraps a
//! credential through the client-credentials grant, later calls reuse it until expiry,
//! and requests to the provider's own endpoints pass through untouched.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth2_authorizer::{
	authorizer::TokenAuthorizer,
	credential::Credential,
	provider::{AcquireFuture, GrantRequest, TokenProvider},
	reqwest::{Client, Method},
	time::Duration,
};

struct DemoProvider {
	authorization: Url,
	token: Url,
}
impl TokenProvider for DemoProvider {
	fn acquire_token(&self, grant: GrantRequest) -> AcquireFuture<'_> {
		Box::pin(async move {
			println!("provider called with grant `{}`", grant.grant_type());

			Ok(Credential::new("demo-access")
				.with_expires_in(Duration::minutes(15))
				.with_refresh_token("demo-refresh"))
		})
	}

	fn authorization_endpoint(&self) -> &Url {
		&self.authorization
	}

	fn token_endpoint(&self) -> &Url {
		&self.token
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let provider = Arc::new(DemoProvider {
		authorization: Url::parse("https://auth.example/authorize")?,
		token: Url::parse("https://auth.example/token")?,
	});
	let authorizer = TokenAuthorizer::new(provider).with_renewal_listener(
		|_: &Credential, previous: Option<&Credential>| {
			println!("credential renewed (previous present: {})", previous.is_some());
		},
	);
	let client = Client::new();

	// Bootstraps via client_credentials and injects the bearer header.
	let request = client.request(Method::GET, "https://api.example/resource").build()?;
	let request = authorizer.authorize(request).await?;

	println!(
		"authorized request carries token: {:?}",
		authorizer.authorized_token(&request).unwrap_or("<none>"),
	);

	// The credential is still valid, so no second provider call happens.
	let request = client.request(Method::GET, "https://api.example/other").build()?;
	let _ = authorizer.authorize(request).await?;

	// Requests to the provider's own endpoints are exempt by default.
	let request = client.request(Method::POST, "https://auth.example/token").build()?;
	let request = authorizer.authorize(request).await?;

	println!("token endpoint request authorized: {}", authorizer.is_authorized(&request));

	Ok(())
}
