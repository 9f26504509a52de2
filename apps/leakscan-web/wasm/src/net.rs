//! HTTP plumbing: payload shaping, fetch, decoding, download, clipboard.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, File, FormData, HtmlAnchorElement, Request, RequestInit, RequestMode, Response, Url,
};

use crate::error::{describe, ScanError};

/// Shape of the outbound body for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// `{"text": ...}` with a JSON content type.
    Json,
    /// Multipart form with `text` and `file` fields; the browser sets the
    /// boundary header itself.
    Multipart,
}

/// Decide how (and whether) to send.
///
/// No text and no file is not a request at all; a file with empty text is
/// still a valid multipart trigger, the text field simply travels empty.
pub fn classify(text: &str, has_file: bool) -> Option<PayloadKind> {
    if has_file {
        Some(PayloadKind::Multipart)
    } else if text.is_empty() {
        None
    } else {
        Some(PayloadKind::Json)
    }
}

/// POST `text` (and the optional attachment) to `api_base` + `path`.
///
/// Returns the raw `Response` on any 2xx status; callers decide whether to
/// decode JSON or save bytes.
pub async fn post(
    api_base: &str,
    path: &str,
    text: &str,
    file: Option<&File>,
) -> Result<Response, ScanError> {
    let url = format!("{}{}", api_base, path);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let mut json_body = false;
    match file {
        Some(file) => {
            let form = FormData::new().map_err(|e| ScanError::Dom(describe(&e)))?;
            form.append_with_str("text", text)
                .map_err(|e| ScanError::Dom(describe(&e)))?;
            form.append_with_blob("file", file)
                .map_err(|e| ScanError::Dom(describe(&e)))?;
            opts.set_body(form.as_ref());
        }
        None => {
            let body = serde_json::json!({ "text": text });
            let body_str =
                serde_json::to_string(&body).map_err(|e| ScanError::Decode(e.to_string()))?;
            opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));
            json_body = true;
        }
    }

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ScanError::Dom(describe(&e)))?;
    if json_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ScanError::Dom(describe(&e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ScanError::Dom("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ScanError::Network(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ScanError::Network("fetch returned a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(ScanError::Status(response.status()));
    }
    Ok(response)
}

/// Read the response body as text and decode it as JSON.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ScanError> {
    let promise = response
        .text()
        .map_err(|e| ScanError::Network(describe(&e)))?;
    let body = JsFuture::from(promise)
        .await
        .map_err(|e| ScanError::Network(describe(&e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| ScanError::Decode("response body was not text".to_string()))?;
    serde_json::from_str(&body).map_err(|e| ScanError::Decode(e.to_string()))
}

/// Save the response body as a local file via a temporary object URL.
pub async fn save_as(response: Response, filename: &str) -> Result<(), ScanError> {
    let promise = response
        .blob()
        .map_err(|e| ScanError::Network(describe(&e)))?;
    let blob = JsFuture::from(promise)
        .await
        .map_err(|e| ScanError::Network(describe(&e)))?;
    let blob: Blob = blob
        .dyn_into()
        .map_err(|_| ScanError::Decode("response body was not a blob".to_string()))?;

    let url =
        Url::create_object_url_with_blob(&blob).map_err(|e| ScanError::Dom(describe(&e)))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ScanError::Dom("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| ScanError::Dom(describe(&e)))?
        .dyn_into()
        .map_err(|_| ScanError::Dom("could not create anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| ScanError::Dom(describe(&e)))?;
    Ok(())
}

/// Copy `text` to the system clipboard. Best-effort: there is no success
/// confirmation contract, so failures are reported but never fatal.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ScanError> {
    let window = web_sys::window().ok_or_else(|| ScanError::Dom("no window".to_string()))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| ScanError::Dom(describe(&e)))?;
    Ok(())
}
