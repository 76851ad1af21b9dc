//! File Transfer
//!
//! Download of exported snapshots and reading of user-picked files.

use goal_core::ExportFile;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Offer `file` to the user as a download via a temporary object URL.
pub fn download(file: &ExportFile) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let link = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element expected")?;
    link.set_href(&url);
    link.set_download(&file.file_name);

    body.append_child(&link).map_err(|e| format!("{:?}", e))?;
    link.click();
    body.remove_child(&link).map_err(|e| format!("{:?}", e))?;
    Ok(())
}

/// Read a picked file as UTF-8 text.
pub async fn read_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text()).await.map_err(|e| format!("{:?}", e))?;
    text.as_string().ok_or_else(|| "file content is not text".to_string())
}
