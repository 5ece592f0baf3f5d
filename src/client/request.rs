//! Request dispatch: bearer attachment, the 401 refresh-and-retry loop, and instrumentation.

// self
use crate::{
	_prelude::*,
	api,
	client::Client,
	error::ConfigError,
	http::{ApiRequest, ApiTransport, Method},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// One endpoint call before it is resolved against the base URL.
#[derive(Clone, Debug)]
pub struct Call<'a> {
	/// HTTP method.
	pub method: Method,
	/// Endpoint path relative to the API root, e.g. `auth/login`.
	pub path: &'a str,
	/// Query parameters appended to the resolved URL.
	pub query: Vec<(&'static str, String)>,
	/// JSON body for `POST` calls.
	pub body: Option<serde_json::Value>,
	/// Whether the call carries the session's bearer token and participates in the
	/// 401 refresh-and-retry protocol.
	pub authenticated: bool,
}
impl<'a> Call<'a> {
	/// Builds an anonymous `GET` call.
	pub fn get(path: &'a str) -> Self {
		Self { method: Method::Get, path, query: Vec::new(), body: None, authenticated: false }
	}

	/// Builds an anonymous `POST` call carrying a JSON body.
	pub fn post(path: &'a str, body: serde_json::Value) -> Self {
		Self { method: Method::Post, path, query: Vec::new(), body: Some(body), authenticated: false }
	}

	/// Appends a query parameter.
	pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
		self.query.push((key, value.into()));

		self
	}

	/// Marks the call as requiring the session's bearer token.
	pub fn authenticated(mut self) -> Self {
		self.authenticated = true;

		self
	}
}

impl<T> Client<T>
where
	T: ?Sized + ApiTransport,
{
	/// Dispatches the call and decodes the response body into `R`.
	///
	/// For authenticated calls a 401 response is the sole trigger for token refresh: the
	/// dispatcher hands the observed bearer to the refresh coordinator, then replays the
	/// original request exactly once with the rotated token. A second 401 surfaces as a
	/// plain [`crate::error::ApiRejection`] so a misbehaving backend cannot trap callers
	/// in a refresh loop.
	pub(crate) async fn dispatch<R>(&self, call: Call<'_>) -> Result<R>
	where
		R: serde::de::DeserializeOwned,
	{
		let url = self.endpoint(call.path, &call.query)?;
		let request = match call.method {
			Method::Get => ApiRequest::get(url),
			Method::Post => {
				let body = call.body.unwrap_or(serde_json::Value::Null);

				ApiRequest::post(url, body)
			},
		};

		if !call.authenticated {
			let response = self.transport.execute(request).await?;

			return api::decode(&response);
		}

		let bearer = self.current_bearer().await?;
		let response = self.transport.execute(request.clone().with_bearer(bearer.clone())).await?;

		if !response.is_unauthorized() {
			return api::decode(&response);
		}

		let session = self.refresh_session(bearer.as_deref()).await?;
		let rotated_bearer = Some(session.access_token.expose().to_owned());
		let retried = self.transport.execute(request.with_bearer(rotated_bearer)).await?;

		api::decode(&retried)
	}

	/// Instrumented wrapper around [`Self::dispatch`] used by the public operations.
	pub(crate) async fn call<R>(
		&self,
		kind: CallKind,
		stage: &'static str,
		call: Call<'_>,
	) -> Result<R>
	where
		R: serde::de::DeserializeOwned,
	{
		let span = CallSpan::new(kind, stage);

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = span.instrument(self.dispatch(call)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
		}

		result
	}

	/// Serializes a request body, attributing failures to the endpoint path.
	pub(crate) fn encode_body<B>(&self, path: &str, body: &B) -> Result<serde_json::Value>
	where
		B: Serialize,
	{
		serde_json::to_value(body)
			.map_err(|e| ConfigError::RequestBody { path: path.to_owned(), source: e }.into())
	}

	/// Returns the stored access token when one exists and is still valid; an expired token
	/// is never attached, matching the storage guard the dashboard applied before each call.
	async fn current_bearer(&self) -> Result<Option<String>> {
		Ok(self
			.store
			.load()
			.await?
			.filter(|session| !session.access_expired())
			.map(|session| session.access_token.expose().to_owned()))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn call_builders_compose() {
		let call = Call::get("cpu").query("hours", "24").authenticated();

		assert_eq!(call.method, Method::Get);
		assert_eq!(call.path, "cpu");
		assert_eq!(call.query, vec![("hours", "24".to_owned())]);
		assert!(call.authenticated);

		let call = Call::post("auth/login", serde_json::json!({"email": "a@b.c"}));

		assert_eq!(call.method, Method::Post);
		assert!(!call.authenticated);
		assert!(call.body.is_some());
	}
}
