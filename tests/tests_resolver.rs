mod support;

use crate::support::{Result, client_with_directory, init_tracing};
use httpmock::prelude::*;
use media_relay::resolver::{
	Authentication, DirectoryFuture, DirectoryResolver, HttpDirectory, ResolvedDestination, ServiceConfig, ServicesConfig,
};
use media_relay::{BoxError, Client, Error, WebConfig};
use serde_json::json;
use std::time::{Duration, Instant};

// region:    --- Inline Config

#[tokio::test]
async fn test_resolve_inline_basic_verbatim_ok() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let services = ServicesConfig::from_json_str(
		r#"{ "MediaAPI": { "kind": "rest", "credentials": {
			"url": "https://media.example.com/v1", "authentication": "Basic",
			"username": "jane", "password": "s3cret" } } }"#,
	)?;
	let client = Client::builder().with_config_provider(services).build()?;

	// -- Exec
	let dest = client.resolve_destination("MediaAPI").await?;

	// -- Check
	assert_eq!(
		dest,
		ResolvedDestination::basic(
			"https://media.example.com/v1",
			Some("jane".to_string()),
			Some("s3cret".to_string())
		)
	);

	Ok(())
}

#[tokio::test]
async fn test_resolve_errors_by_kind() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let services = ServicesConfig::from_json_str(
		r#"{
			"NotBasic": { "credentials": { "url": "https://x", "authentication": "OAuth2ClientCredentials" } },
			"NoUrl": { "credentials": { "url": "", "authentication": "Basic", "username": "u" } }
		}"#,
	)?;
	let client = Client::builder().with_config_provider(services).build()?;

	// -- Exec & Check
	let res = client.resolve_destination("Missing").await;
	assert!(matches!(res, Err(Error::Configuration { .. })), "got {res:?}");

	let res = client.resolve_destination("NotBasic").await;
	assert!(matches!(res, Err(Error::Authentication { .. })), "got {res:?}");

	let res = client.resolve_destination("NoUrl").await;
	assert!(matches!(res, Err(Error::Url { .. })), "got {res:?}");
	if let Err(err) = &res {
		assert!(err.is_resolution());
	}

	Ok(())
}

// endregion: --- Inline Config

// region:    --- Remote Directory

#[tokio::test]
async fn test_resolve_price_api_directory_failure_err() -> Result<()> {
	// -- Setup & Fixtures
	let services = ServicesConfig::from_json_str(r#"{ "PriceAPI": { "credentials": { "destination": "priceDest" } } }"#)?;
	let directory = DirectoryResolver::from_resolver_async_fn(|name: String| -> DirectoryFuture {
		Box::pin(async move { Err::<ResolvedDestination, BoxError>(format!("no destination named '{name}'").into()) })
	});
	let client = client_with_directory(services, directory)?;

	// -- Exec
	let res = client.resolve_destination("PriceAPI").await;

	// -- Check
	match res {
		Err(err @ Error::DestinationRetrieval { .. }) => {
			let source = std::error::Error::source(&err).ok_or("should have a source")?;
			assert_eq!(source.to_string(), "no destination named 'priceDest'");
		}
		other => return Err(format!("should be DestinationRetrieval but was {other:?}").into()),
	}

	Ok(())
}

#[tokio::test]
async fn test_resolve_http_directory_basic_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let directory_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/destination-configuration/v1/destinations/priceDest")
				.header("authorization", "Bearer directory-token");
			then.status(200).json_body(json!({
				"owner": { "SubaccountId": "abc" },
				"destinationConfiguration": {
					"Name": "priceDest",
					"Type": "HTTP",
					"URL": "https://prices.example.com",
					"Authentication": "BasicAuthentication",
					"User": "pricer",
					"Password": "pw"
				}
			}));
		})
		.await;

	let services = ServicesConfig::default().with_service("PriceAPI", ServiceConfig::from_destination("priceDest"));
	let directory = DirectoryResolver::from_http(HttpDirectory::new(server.base_url()).with_bearer_token("directory-token"));
	let client = client_with_directory(services, directory)?;

	// -- Exec
	let dest = client.resolve_destination("PriceAPI").await?;

	// -- Check
	directory_mock.assert_async().await;
	assert_eq!(dest.url, "https://prices.example.com");
	assert_eq!(dest.authentication, Authentication::Basic);
	assert_eq!(dest.username.as_deref(), Some("pricer"));
	assert_eq!(dest.password.as_deref(), Some("pw"));

	Ok(())
}

#[tokio::test]
async fn test_resolve_http_directory_token_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/destination-configuration/v1/destinations/oauthDest");
			then.status(200).json_body(json!({
				"destinationConfiguration": {
					"URL": "https://oauth.example.com",
					"Authentication": "OAuth2ClientCredentials"
				},
				"authTokens": [ { "type": "bearer", "value": "remote-token", "http_header": { "key": "Authorization" } } ]
			}));
		})
		.await;

	let services = ServicesConfig::default().with_service("OAuthAPI", ServiceConfig::from_destination("oauthDest"));
	let client = client_with_directory(services, DirectoryResolver::from_http(HttpDirectory::new(server.base_url())))?;

	// -- Exec
	let dest = client.resolve_destination("OAuthAPI").await?;

	// -- Check
	assert_eq!(dest.authentication, Authentication::Bearer);
	assert_eq!(dest.auth_token.as_deref(), Some("remote-token"));

	Ok(())
}

#[tokio::test]
async fn test_resolve_http_directory_not_found_err() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/destination-configuration/v1/destinations/priceDest");
			then.status(404).body("not found");
		})
		.await;

	let services = ServicesConfig::default().with_service("PriceAPI", ServiceConfig::from_destination("priceDest"));
	let client = client_with_directory(services, DirectoryResolver::from_http(HttpDirectory::new(server.base_url())))?;

	// -- Exec
	let res = client.resolve_destination("PriceAPI").await;

	// -- Check
	assert!(matches!(res, Err(Error::DestinationRetrieval { .. })), "got {res:?}");

	Ok(())
}

#[tokio::test]
async fn test_resolve_http_directory_web_config_timeout_err() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/destination-configuration/v1/destinations/slowDest");
			then.status(200).delay(Duration::from_secs(3)).json_body(json!({
				"destinationConfiguration": { "URL": "https://slow.example.com", "Authentication": "NoAuthentication" }
			}));
		})
		.await;

	let services = ServicesConfig::default().with_service("SlowAPI", ServiceConfig::from_destination("slowDest"));
	let client = Client::builder()
		.with_config_provider(services)
		.with_directory(DirectoryResolver::from_http(HttpDirectory::new(server.base_url())))
		.with_web_config(WebConfig::default().with_timeout(Duration::from_millis(200)))
		.build()?;

	// -- Exec
	let start = Instant::now();
	let res = client.resolve_destination("SlowAPI").await;
	let elapsed = start.elapsed();

	// -- Check
	assert!(matches!(res, Err(Error::DestinationRetrieval { .. })), "got {res:?}");
	assert!(elapsed < Duration::from_secs(2), "lookup should time out early, took {elapsed:?}");

	Ok(())
}

#[tokio::test]
async fn test_resolve_http_directory_name_stays_one_segment() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	let other_dest_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/destination-configuration/v1/destinations/a")
				.query_param("x", "1");
			then.status(200).json_body(json!({
				"destinationConfiguration": { "URL": "https://other.example.com", "Authentication": "NoAuthentication" }
			}));
		})
		.await;

	let services = ServicesConfig::default().with_service("OddAPI", ServiceConfig::from_destination("a?x=1"));
	let client = client_with_directory(services, DirectoryResolver::from_http(HttpDirectory::new(server.base_url())))?;

	// -- Exec
	let res = client.resolve_destination("OddAPI").await;

	// -- Check
	assert_eq!(other_dest_mock.hits_async().await, 0, "'a?x=1' must not be looked up as 'a' with a query");
	assert!(matches!(res, Err(Error::DestinationRetrieval { .. })), "got {res:?}");

	Ok(())
}

#[tokio::test]
async fn test_resolve_http_directory_token_error_err() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/destination-configuration/v1/destinations/oauthDest");
			then.status(200).json_body(json!({
				"destinationConfiguration": { "URL": "https://oauth.example.com", "Authentication": "OAuth2ClientCredentials" },
				"authTokens": [ { "type": "bearer", "error": "token retrieval failed" } ]
			}));
		})
		.await;

	let services = ServicesConfig::default().with_service("OAuthAPI", ServiceConfig::from_destination("oauthDest"));
	let client = client_with_directory(services, DirectoryResolver::from_http(HttpDirectory::new(server.base_url())))?;

	// -- Exec
	let res = client.resolve_destination("OAuthAPI").await;

	// -- Check
	match res {
		Err(err @ Error::DestinationRetrieval { .. }) => {
			let source = std::error::Error::source(&err).ok_or("should have a source")?;
			assert!(source.to_string().contains("token retrieval failed"), "source was: {source}");
		}
		other => return Err(format!("should be DestinationRetrieval but was {other:?}").into()),
	}

	Ok(())
}

#[tokio::test]
async fn test_resolve_http_directory_empty_url_err() -> Result<()> {
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/destination-configuration/v1/destinations/blankDest");
			then.status(200).json_body(json!({
				"destinationConfiguration": { "URL": "", "Authentication": "NoAuthentication" }
			}));
		})
		.await;

	let services = ServicesConfig::default().with_service("BlankAPI", ServiceConfig::from_destination("blankDest"));
	let client = client_with_directory(services, DirectoryResolver::from_http(HttpDirectory::new(server.base_url())))?;

	let res = client.fetch("images/1", "BlankAPI").await;

	assert!(matches!(res, Err(Error::DestinationRetrieval { .. })), "got {res:?}");

	Ok(())
}

// endregion: --- Remote Directory

// region:    --- Env Config

#[test]
fn test_services_config_from_env_unset_ok() -> Result<()> {
	let services = ServicesConfig::from_env_var("MEDIA_RELAY_TEST_NEVER_SET_VAR")?;
	assert_eq!(services.service_names().count(), 0);
	Ok(())
}

// endregion: --- Env Config
