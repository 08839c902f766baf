//! Thin GET layer over the browser Fetch API.
//!
//! Every request here is best-effort UI plumbing: callers log the error
//! and move on. No retries, no timeouts, no cancellation.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::components::family_tree::FamilyNode;

/// Failure classes for a single request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	/// Network unreachable, DNS failure, aborted request.
	#[error("transport failure: {0}")]
	Transport(String),
	/// The server answered with a non-2xx status.
	#[error("unexpected status {0}")]
	Status(u16),
	/// The body could not be read or deserialized.
	#[error("malformed response body: {0}")]
	Decode(String),
}

fn js_error_message(err: &JsValue) -> String {
	err.dyn_ref::<js_sys::Error>()
		.map(|e| String::from(e.message()))
		.unwrap_or_else(|| format!("{err:?}"))
}

async fn get(url: &str) -> Result<Response, FetchError> {
	let window = web_sys::window().ok_or_else(|| FetchError::Transport("no window".into()))?;

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::SameOrigin);

	let request = Request::new_with_str_and_init(url, &opts)
		.map_err(|e| FetchError::Transport(js_error_message(&e)))?;

	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| FetchError::Transport(js_error_message(&e)))?;
	let response: Response = response
		.dyn_into()
		.map_err(|e| FetchError::Transport(js_error_message(&e)))?;

	if !response.ok() {
		return Err(FetchError::Status(response.status()));
	}
	Ok(response)
}

/// GET an HTML fragment, e.g. a popup body.
pub async fn fetch_fragment(url: &str) -> Result<String, FetchError> {
	let response = get(url).await?;
	let body = response
		.text()
		.map_err(|e| FetchError::Decode(js_error_message(&e)))?;
	let body = JsFuture::from(body)
		.await
		.map_err(|e| FetchError::Decode(js_error_message(&e)))?;
	body.as_string()
		.ok_or_else(|| FetchError::Decode("body is not text".into()))
}

/// GET and deserialize the family tree rooted at `subject_id`.
pub async fn fetch_family_tree(subject_id: &str) -> Result<FamilyNode, FetchError> {
	let url = format!("/family_tree/{subject_id}/");
	let response = get(&url).await?;
	let json = response
		.json()
		.map_err(|e| FetchError::Decode(js_error_message(&e)))?;
	let json = JsFuture::from(json)
		.await
		.map_err(|e| FetchError::Decode(js_error_message(&e)))?;
	serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))
}
