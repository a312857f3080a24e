//! HTTP Transport
//!
//! Sends core `HttpRequest`s through the browser `fetch` API.

use accountdash::transport::{MultipartUpload, RequestBody};
use accountdash::{ClientError, ClientResult, HttpRequest, HttpResponse, HttpTransport, Method};
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;

pub use accountdash::DEFAULT_API_BASE;

const API_URL_KEY: &str = "accountdash_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

fn js_error(context: &str, err: JsValue) -> ClientError {
    ClientError::Transport(format!("{}: {:?}", context, err))
}

/// Build a `FormData` holding one file field
fn form_data(upload: &MultipartUpload) -> ClientResult<web_sys::FormData> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("Blob", e))?;

    let form = web_sys::FormData::new().map_err(|e| js_error("FormData", e))?;
    form.append_with_blob_and_filename(&upload.field, &blob, &upload.file_name)
        .map_err(|e| js_error("FormData", e))?;
    Ok(form)
}

/// `fetch`-backed transport
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(text) => builder.body(text.as_str()),
            RequestBody::Multipart(upload) => builder.body(form_data(upload)?),
        }
        .map_err(|e| ClientError::Transport(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}
