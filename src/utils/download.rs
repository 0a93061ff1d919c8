use wasm_bindgen::JsCast;

/// Object URL for in-memory bytes, e.g. a fetched profile picture. The
/// caller owns the URL and its revocation.
pub fn bytes_to_object_url(contents: &[u8], mime_type: &str) -> Result<String, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(contents).buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())
}

/// Hands a server-produced export (CSV and friends) to the browser as a
/// regular file download through a temporary object URL.
pub fn trigger_file_download(filename: &str, contents: &[u8], mime_type: &str) -> Result<(), String> {
    let url = bytes_to_object_url(contents, mime_type)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
