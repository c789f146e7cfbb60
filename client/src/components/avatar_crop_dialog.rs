//! Square crop dialog for a freshly picked avatar image.
//!
//! ARCHITECTURE
//! ============
//! The dialog shows the image under a fixed square stage; dragging pans and
//! the slider zooms, both clamped by `cropper::crop` so the stage never
//! shows past an edge. Confirm cuts the visible square to a JPEG blob,
//! uploads it, saves the avatar URL on the profile, and hands the refreshed
//! user back to the account page.

#[cfg(test)]
#[path = "avatar_crop_dialog_test.rs"]
mod avatar_crop_dialog_test;

use leptos::prelude::*;

use cropper::crop::CropView;
use models::User;

/// On-screen side length of the crop stage in CSS pixels; must match the
/// `.crop-stage` style.
pub const STAGE_SIZE: f64 = 256.0;

/// Absolute-position style for the stage image, or an empty string until
/// the natural image size is known.
#[must_use]
pub fn stage_image_style(view: &CropView, natural: Option<(f64, f64)>) -> String {
    let Some((width, height)) = natural else {
        return String::new();
    };
    let clamped = view.clamped(width, height);
    let scale = clamped.display_scale(width, height);
    if scale <= 0.0 {
        return String::new();
    }
    let img_w = width * scale;
    let img_h = height * scale;
    let left = (view.viewport / 2.0) - (img_w / 2.0) + clamped.offset_x;
    let top = (view.viewport / 2.0) - (img_h / 2.0) + clamped.offset_y;
    format!("width:{img_w:.2}px;height:{img_h:.2}px;left:{left:.2}px;top:{top:.2}px;")
}

/// Crop dialog over an object URL for a picked file. `name` is the current
/// profile name, re-submitted alongside the new avatar URL.
#[component]
pub fn AvatarCropDialog(
    user_id: String,
    name: String,
    image_url: String,
    on_close: Callback<()>,
    on_saved: Callback<User>,
) -> impl IntoView {
    let zoom = RwSignal::new(cropper::consts::ZOOM_MIN);
    let offset = RwSignal::new((0.0_f64, 0.0_f64));
    let natural = RwSignal::new(None::<(f64, f64)>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let drag_from = RwSignal::new(None::<(f64, f64)>);

    #[cfg(feature = "hydrate")]
    let image_el = RwSignal::new_local(None::<web_sys::HtmlImageElement>);

    #[cfg(feature = "hydrate")]
    {
        let url = image_url.clone();
        leptos::task::spawn_local(async move {
            match cropper::blob::load_image(&url).await {
                Ok(img) => {
                    natural.set(Some((
                        f64::from(img.natural_width()),
                        f64::from(img.natural_height()),
                    )));
                    image_el.set(Some(img));
                }
                Err(_) => error.set("Could not load the selected image".to_owned()),
            }
        });
    }

    let current_view = move || CropView {
        viewport: STAGE_SIZE,
        zoom: zoom.get(),
        offset_x: offset.get().0,
        offset_y: offset.get().1,
    };

    let clamp_offsets = move || {
        if let Some((w, h)) = natural.get_untracked() {
            let clamped = CropView {
                viewport: STAGE_SIZE,
                zoom: zoom.get_untracked(),
                offset_x: offset.get_untracked().0,
                offset_y: offset.get_untracked().1,
            }
            .clamped(w, h);
            offset.set((clamped.offset_x, clamped.offset_y));
        }
    };

    let on_zoom = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            zoom.set(cropper::crop::clamp_zoom(value));
            clamp_offsets();
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        drag_from.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some((from_x, from_y)) = drag_from.get_untracked() else {
            return;
        };
        let here = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        offset.update(|(x, y)| {
            *x += here.0 - from_x;
            *y += here.1 - from_y;
        });
        drag_from.set(Some(here));
        clamp_offsets();
    };
    let on_pointer_up = move |_| drag_from.set(None);

    let on_confirm = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let user_id = user_id.clone();
            let name = name.clone();
            leptos::task::spawn_local(async move {
                let Some((w, h)) = natural.get_untracked() else {
                    busy.set(false);
                    return;
                };
                let Some(image) = image_el.get_untracked() else {
                    busy.set(false);
                    return;
                };
                let view = CropView {
                    viewport: STAGE_SIZE,
                    zoom: zoom.get_untracked(),
                    offset_x: offset.get_untracked().0,
                    offset_y: offset.get_untracked().1,
                };
                let Some(rect) = view.source_rect(w, h) else {
                    error.set("Nothing to crop".to_owned());
                    busy.set(false);
                    return;
                };
                let blob = match cropper::blob::crop_to_jpeg_blob(&image, rect).await {
                    Ok(blob) => blob,
                    Err(_) => {
                        error.set("Could not crop the image".to_owned());
                        busy.set(false);
                        return;
                    }
                };
                let outcome = async {
                    let url = crate::net::api::upload_image(&blob, "avatar.jpg").await?;
                    let update =
                        models::ProfileUpdate { name: name.clone(), avatar_url: Some(url) };
                    crate::net::api::update_profile(&user_id, &update).await
                }
                .await;
                match outcome {
                    Ok(user) => {
                        crate::util::session::save(&user);
                        on_saved.run(user);
                        on_close.run(());
                    }
                    Err(e) => error.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&user_id, &name);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--crop" on:click=move |ev| ev.stop_propagation()>
                <h2>"Adjust your profile photo"</h2>

                <div
                    class="crop-stage"
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointerleave=on_pointer_up
                >
                    <img
                        class="crop-stage__image"
                        src=image_url.clone()
                        style=move || stage_image_style(&current_view(), natural.get())
                        draggable="false"
                        alt=""
                    />
                </div>

                <div class="crop-controls">
                    <input
                        class="crop-controls__zoom"
                        type="range"
                        min=cropper::consts::ZOOM_MIN
                        max=cropper::consts::ZOOM_MAX
                        step="0.1"
                        prop:value=move || zoom.get().to_string()
                        on:input=on_zoom
                    />
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get() || natural.get().is_none()
                        on:click=on_confirm
                    >
                        {move || if busy.get() { "Saving..." } else { "Save crop" }}
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
