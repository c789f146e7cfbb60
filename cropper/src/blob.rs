//! Canvas draw + JPEG encoding for the crop result (browser only).
//!
//! SYSTEM CONTEXT
//! ==============
//! The account page hands this module an object URL and a [`SourceRect`];
//! it returns a `Blob` ready for a multipart upload. Callbacks from
//! `Image.onload` and `canvas.toBlob` are bridged into futures through
//! `js_sys::Promise` so the caller stays fully async.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{JPEG_QUALITY, OUTPUT_SIZE};
use crate::crop::SourceRect;

/// Load an image element from a URL (typically an object URL for a picked
/// file) and wait for it to decode.
///
/// # Errors
///
/// Returns the DOM error event when the image fails to load or decode.
pub async fn load_image(url: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));

    let handle = image.clone();
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            drop(resolve.call0(&JsValue::NULL));
        });
        let onerror = Closure::once_into_js(move |event: JsValue| {
            drop(reject.call1(&JsValue::NULL, &event));
        });
        handle.set_onload(Some(onload.unchecked_ref()));
        handle.set_onerror(Some(onerror.unchecked_ref()));
    });

    image.set_src(url);
    JsFuture::from(loaded).await?;
    Ok(image)
}

/// Cut `rect` out of `image` and encode it as a square JPEG of
/// [`OUTPUT_SIZE`] pixels.
///
/// # Errors
///
/// Returns an error when no document/2d context is available, the draw call
/// fails, or the encoder produces no blob.
pub async fn crop_to_jpeg_blob(
    image: &HtmlImageElement,
    rect: SourceRect,
) -> Result<Blob, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(OUTPUT_SIZE);
    canvas.set_height(OUTPUT_SIZE);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        image,
        rect.x,
        rect.y,
        rect.side,
        rect.side,
        0.0,
        0.0,
        f64::from(OUTPUT_SIZE),
        f64::from(OUTPUT_SIZE),
    )?;

    let target = canvas.clone();
    let encoded = js_sys::Promise::new(&mut |resolve, reject| {
        let callback = Closure::once_into_js(move |blob: JsValue| {
            drop(resolve.call1(&JsValue::NULL, &blob));
        });
        if let Err(err) = target.to_blob_with_type_and_encoder_options(
            callback.unchecked_ref(),
            "image/jpeg",
            &JsValue::from_f64(JPEG_QUALITY),
        ) {
            drop(reject.call1(&JsValue::NULL, &err));
        }
    });

    let value = JsFuture::from(encoded).await?;
    // toBlob resolves with null when encoding fails.
    value
        .dyn_into::<Blob>()
        .map_err(|_| JsValue::from_str("image encoding produced no blob"))
}
