//! A `DirectoryResolver` looks up a named destination in a remote destination directory.
//!
//! It can be a sync closure, an async closure, or the built-in `HttpDirectory` client.

use crate::BoxError;
use crate::resolver::{HttpDirectory, ResolvedDestination};
use crate::webc::WebClient;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

// region:    --- DirectoryResolver

#[derive(Debug, Clone)]
pub enum DirectoryResolver {
	/// A sync resolver function.
	ResolverFn(Arc<Box<dyn DirectoryResolverFn>>),

	/// An async resolver function.
	ResolverAsyncFn(Arc<Box<dyn DirectoryResolverAsyncFn>>),

	/// The built-in destination service client.
	Http(HttpDirectory),
}

/// Constructors
impl DirectoryResolver {
	pub fn from_resolver_fn(resolver_fn: impl IntoDirectoryResolverFn) -> Self {
		DirectoryResolver::ResolverFn(resolver_fn.into_resolver_fn())
	}

	pub fn from_resolver_async_fn(resolver_fn: impl IntoDirectoryResolverAsyncFn) -> Self {
		DirectoryResolver::ResolverAsyncFn(resolver_fn.into_async_resolver_fn())
	}

	pub fn from_http(directory: HttpDirectory) -> Self {
		DirectoryResolver::Http(directory)
	}

	/// Give an `HttpDirectory` without its own web client the given one.
	pub(crate) fn with_fallback_web_client(self, web_client: &WebClient) -> Self {
		match self {
			DirectoryResolver::Http(directory) => DirectoryResolver::Http(directory.with_fallback_web_client(web_client)),
			other => other,
		}
	}
}

impl DirectoryResolver {
	pub(crate) async fn resolve(&self, destination_name: &str) -> Result<ResolvedDestination, BoxError> {
		match self {
			DirectoryResolver::ResolverFn(resolver_fn) => resolver_fn.exec_fn(destination_name.to_string()),
			DirectoryResolver::ResolverAsyncFn(resolver_fn) => resolver_fn.exec_fn(destination_name.to_string()).await,
			DirectoryResolver::Http(directory) => directory.fetch_destination(destination_name).await,
		}
	}
}

// endregion: --- DirectoryResolver

// region:    --- DirectoryResolverFn

pub trait DirectoryResolverFn: Send + Sync {
	fn exec_fn(&self, destination_name: String) -> Result<ResolvedDestination, BoxError>;
}

impl<F> DirectoryResolverFn for F
where
	F: Fn(String) -> Result<ResolvedDestination, BoxError> + Send + Sync + 'static,
{
	fn exec_fn(&self, destination_name: String) -> Result<ResolvedDestination, BoxError> {
		(self)(destination_name)
	}
}

impl std::fmt::Debug for dyn DirectoryResolverFn {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "DirectoryResolverFn")
	}
}

pub trait IntoDirectoryResolverFn {
	fn into_resolver_fn(self) -> Arc<Box<dyn DirectoryResolverFn>>;
}

impl<F> IntoDirectoryResolverFn for F
where
	F: Fn(String) -> Result<ResolvedDestination, BoxError> + Send + Sync + 'static,
{
	fn into_resolver_fn(self) -> Arc<Box<dyn DirectoryResolverFn>> {
		Arc::new(Box::new(self))
	}
}

// endregion: --- DirectoryResolverFn

// region:    --- DirectoryResolverAsyncFn

pub type DirectoryFuture = Pin<Box<dyn Future<Output = Result<ResolvedDestination, BoxError>> + Send>>;

pub trait DirectoryResolverAsyncFn: Send + Sync {
	fn exec_fn(&self, destination_name: String) -> DirectoryFuture;
}

impl<F> DirectoryResolverAsyncFn for F
where
	F: Fn(String) -> DirectoryFuture + Send + Sync + 'static,
{
	fn exec_fn(&self, destination_name: String) -> DirectoryFuture {
		(self)(destination_name)
	}
}

impl std::fmt::Debug for dyn DirectoryResolverAsyncFn {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "DirectoryResolverAsyncFn")
	}
}

pub trait IntoDirectoryResolverAsyncFn {
	fn into_async_resolver_fn(self) -> Arc<Box<dyn DirectoryResolverAsyncFn>>;
}

impl<F> IntoDirectoryResolverAsyncFn for F
where
	F: Fn(String) -> DirectoryFuture + Send + Sync + 'static,
{
	fn into_async_resolver_fn(self) -> Arc<Box<dyn DirectoryResolverAsyncFn>> {
		Arc::new(Box::new(self))
	}
}

// endregion: --- DirectoryResolverAsyncFn
