//! Browser-side file download.
//!
//! Wraps the blob/object-URL dance: materialize the bytes as a `Blob`,
//! point a synthetic anchor at it, click it, then remove the anchor and
//! revoke the object URL so the blob can be collected. Requires a browser
//! environment.

use crate::net::error::ClientError;

/// Offer `bytes` to the user as a local CSV file named `filename`.
///
/// # Errors
///
/// `Network` if any browser API refuses; the bytes were already fetched,
/// so only the local materialization can fail here.
pub fn save_csv(bytes: &[u8], filename: &str) -> Result<(), ClientError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::HtmlAnchorElement;

        fn js_err<E>(_: E) -> ClientError {
            ClientError::Network("browser refused the file download".to_owned())
        }

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes).into());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_err(()))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        anchor.set_href(&object_url);
        anchor.set_download(filename);

        let result = document
            .body()
            .ok_or_else(|| js_err(()))
            .and_then(|body| body.append_child(&anchor).map_err(js_err))
            .map(|_| anchor.click());

        // Always release the transient references, even if the click path
        // failed partway.
        anchor.remove();
        let _ = web_sys::Url::revoke_object_url(&object_url);
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename);
        Err(ClientError::Network("not available on server".to_owned()))
    }
}

/// Filename for a downloaded artifact: `{projectId}_{generationId}.csv`.
pub fn artifact_filename(project_id: &str, generation_id: &str) -> String {
    format!("{project_id}_{generation_id}.csv")
}

#[cfg(test)]
mod tests {
    use super::artifact_filename;

    #[test]
    fn filename_joins_project_and_generation_ids() {
        assert_eq!(artifact_filename("p1", "g1"), "p1_g1.csv");
    }
}
