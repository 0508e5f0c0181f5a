//! Browser entry point and file downloads for the wasm build.

use crate::QuizApp;
use crate::config::QuizConfig;
use crate::error::ExportError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlCanvasElement, Url};

/// Id of the `<canvas>` the page reserves for the app.
pub const CANVAS_ID: &str = "quiz_canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Fails only when a logger is already installed.
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document in this environment"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("quiz canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::new(QuizConfig::from_env())))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start the quiz: {err:?}");
        }
    });
    Ok(())
}

/// Hands `contents` to the browser as a file download.
pub fn download(file_name: &str, mime_type: &str, contents: &str) -> Result<(), ExportError> {
    let js_err = |err: JsValue| ExportError::Download(format!("{err:?}"));

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let props = BlobPropertyBag::new();
    props.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document in this environment".into()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("could not create a link element".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("downloaded {file_name} ({} bytes)", contents.len());
    Ok(())
}
