//! Export artifact delivery
//!
//! On native targets the user picks a destination through the system save
//! dialog and the artifact is written atomically by the core export. On the
//! web the artifact becomes a Blob download handed to the browser.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use sbcc_core::errors::CarbonError;
use sbcc_core::output::Output;

/// Ask for a destination, then write the artifact there.
///
/// Returns `Ok(None)` when the user cancels the dialog.
#[cfg(not(target_arch = "wasm32"))]
pub async fn save_with_dialog(output: Output) -> Result<Option<PathBuf>, CarbonError> {
    use sbcc_core::export::{write_output, EXPORT_FILE_NAME};

    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Export Results")
        .add_filter("SBCC output", &["json"])
        .set_file_name(EXPORT_FILE_NAME)
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    write_output(&output, &path)?;
    Ok(Some(path))
}

/// Serialize the output and trigger a browser download of it.
#[cfg(target_arch = "wasm32")]
pub fn browser_download(output: &Output) -> Result<(), CarbonError> {
    use sbcc_core::export::{output_json, EXPORT_FILE_NAME};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let json = output_json(output)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| browser_error("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&json));

    let props = BlobPropertyBag::new();
    props.set_type("application/json");

    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(|e| browser_error(&format!("blob: {:?}", e)))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_error(&format!("object url: {:?}", e)))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| browser_error(&format!("anchor: {:?}", e)))?
        .dyn_into()
        .map_err(|_| browser_error("anchor cast"))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    // The blob URL is single-use; release it right away.
    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn browser_error(reason: &str) -> CarbonError {
    CarbonError::file_error(
        "browser download",
        sbcc_core::export::EXPORT_FILE_NAME,
        reason,
    )
}
