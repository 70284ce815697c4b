//! WASM-compatible HTTP client using the browser's fetch API

use conformal_shared::{ConformalError, ConformalResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, Request, RequestInit, Response};

/// JSON fetch client bound to one API base URL. Cheap to clone; async
/// callers clone it into the spawned future.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    base_url: String,
}

impl FetchClient {
    /// `base_url` is prepended verbatim to request paths; the empty
    /// string means same-origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Issue a GET and return the raw response without checking the
    /// status, so callers can treat specific non-2xx codes as in-band
    /// signals. An optional abort signal cancels the request.
    pub async fn get(
        &self,
        path_and_query: &str,
        signal: Option<&AbortSignal>,
    ) -> ConformalResult<Response> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_signal(signal);

        let headers = Headers::new().map_err(js_error)?;
        headers.set("Accept", "application/json").map_err(js_error)?;
        opts.set_headers(&headers);

        let url = format!("{}{}", self.base_url, path_and_query);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| ConformalError::Internal {
            message: "no window object available".to_string(),
        })?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        resp_value.dyn_into::<Response>().map_err(js_error)
    }

    /// POST a JSON body and decode a JSON response, failing on any
    /// non-2xx status.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ConformalResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let payload = serde_json::to_string(body)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&payload));

        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
        opts.set_headers(&headers);

        let url = format!("{}{}", self.base_url, path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| ConformalError::Internal {
            message: "no window object available".to_string(),
        })?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            return Err(ConformalError::Network {
                message: format!("server responded {}", resp.status()),
            });
        }

        response_json(resp).await
    }
}

/// Read a response body as JSON and decode it into `T`.
pub async fn response_json<T: serde::de::DeserializeOwned>(resp: Response) -> ConformalResult<T> {
    let json_promise = resp.json().map_err(js_error)?;
    let json_value = JsFuture::from(json_promise).await.map_err(js_error)?;

    let json_str = js_sys::JSON::stringify(&json_value).map_err(js_error)?;
    let json_string: String = json_str.into();

    Ok(serde_json::from_str(&json_string)?)
}

/// Classify a rejected fetch promise. An abort raised by superseding
/// the request surfaces as `Cancelled`; anything else is a transport
/// failure.
pub(crate) fn js_error(err: JsValue) -> ConformalError {
    if let Ok(name) = js_sys::Reflect::get(&err, &JsValue::from_str("name")) {
        if name.as_string().as_deref() == Some("AbortError") {
            return ConformalError::Cancelled;
        }
    }
    ConformalError::Network {
        message: format!("{err:?}"),
    }
}
