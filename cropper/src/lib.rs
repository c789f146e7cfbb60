//! Avatar crop geometry and JPEG blob production.
//!
//! The account page lets a user pan and zoom a picked image under a square
//! viewport, then uploads the selected region as a small JPEG. This crate
//! owns that pipeline: [`crop`] is pure math (which source rectangle does the
//! viewport show?) and [`blob`] is the browser half that draws the rectangle
//! onto an offscreen canvas and encodes it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`crop`] | Viewport/zoom/pan state and source-rectangle math |
//! | [`consts`] | Zoom bounds, output size, encoder quality |
//! | `blob` | Canvas draw + `toBlob` encoding (wasm32 only) |

pub mod consts;
pub mod crop;

#[cfg(target_arch = "wasm32")]
pub mod blob;
