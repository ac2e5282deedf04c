//! Hand a synthesized artifact to the browser as a file download.
//!
//! Blob → object URL → temporary `<a download>` → click → cleanup.

use js_sys::{Array, Uint8Array};
use pdftools::DownloadArtifact;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};

pub fn trigger_download(artifact: &DownloadArtifact) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Dom("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Dom("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("no document body".into()))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(artifact.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&artifact.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| AppError::download("blob", e))?;

    let url = Url::create_object_url_with_blob(&blob).map_err(AppError::object_url)?;

    let link = document
        .create_element("a")
        .map_err(|e| AppError::download("create link", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Dom("created element is not an anchor".into()))?;
    link.set_href(&url);
    link.set_download(&artifact.file_name);

    let clicked = body
        .append_child(&link)
        .map(|_| link.click())
        .map_err(|e| AppError::download("attach link", e));
    let _ = body.remove_child(&link);
    let _ = Url::revoke_object_url(&url);
    clicked?;

    log::info!(
        "⬇️ Downloaded {} ({} bytes, {})",
        artifact.file_name,
        artifact.bytes.len(),
        artifact.mime
    );
    Ok(())
}
