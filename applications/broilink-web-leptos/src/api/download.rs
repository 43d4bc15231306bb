use super::client::ApiError;

/// Hand downloaded bytes to the browser as a file
#[cfg(target_arch = "wasm32")]
pub fn save_file(bytes: &[u8], file_name: &str) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;

    let js_error = |e: wasm_bindgen::JsValue| ApiError::Encoding(format!("{:?}", e));

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Encoding("no document".to_string()))?;
    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| ApiError::Encoding("not an anchor element".to_string()))?;
    link.set_href(&url);
    link.set_download(file_name);

    if let Some(body) = document.body() {
        body.append_child(&link).map_err(js_error)?;
        link.click();
        link.remove();
    }

    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(bytes: &[u8], file_name: &str) -> Result<(), ApiError> {
    log::debug!("Skipping save of {} ({} bytes) outside the browser", file_name, bytes.len());
    Ok(())
}
