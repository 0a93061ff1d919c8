use wasm_bindgen_futures::JsFuture;

/// Name, MIME type and contents of the first file picked in an
/// `<input type="file">`. `None` when the selection is empty.
pub async fn read_selected_file(
    input: &web_sys::HtmlInputElement,
) -> Result<Option<(String, String, Vec<u8>)>, String> {
    let Some(files) = input.files() else {
        return Ok(None);
    };
    let Some(file) = files.get(0) else {
        return Ok(None);
    };
    let name = file.name();
    let mime_type = file.type_();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read the selected file".to_string())?;
    let contents = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some((name, mime_type, contents)))
}
