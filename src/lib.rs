//! CSS `matrix3d` transforms for tweening engines.
//!
//! The crate turns a computed CSS transform into a 4x4 matrix, blends two matrices for an
//! animation ratio, and writes the result back as a `matrix3d(...)` string.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `matrix(...)` / `matrix3d(...)` / `none` -> [`Matrix4`] ([`parse_transform`])
//! 2. **Interpolate**: `(start, end, ratio) -> Matrix4`, cell by cell ([`interpolate`])
//! 3. **Serialize**: `Matrix4 -> "matrix3d(...)"` with 10 fixed digits ([`serialize_transform`])
//! 4. **Apply** (optional): [`Matrix3dPlugin`] drives the pipeline from a host's tween hooks and
//!    writes through a [`StyleTarget`].
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure codec**: parsing, interpolation and serialization have no side effects.
//! - **Explicit environment**: vendor prefix and unit handling come from [`PluginConfig`], never
//!   from ambient state.
//!
//! ```
//! use css_matrix3d::{FormatOptions, interpolate, parse_transform, serialize_transform};
//!
//! let start = parse_transform(Some("none"))?;
//! let end = parse_transform(Some("matrix(1, 0, 0, 1, 10, 20)"))?;
//! let mid = interpolate(&start, &end, 0.5);
//! let css = serialize_transform(&mid, &FormatOptions::with_units("px"));
//! assert!(css.ends_with("5.0000000000px,10.0000000000px,0.0000000000px,1.0000000000)"));
//! # Ok::<(), css_matrix3d::Matrix3dError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod foundation;
mod plugin;

pub use codec::format::{
    DEFAULT_TRANSLATION_UNIT, FRACTION_DIGITS, FormatOptions, serialize_transform,
};
pub use codec::lerp::{Lerp, interpolate};
pub use codec::parse::{NO_TRANSFORM, parse_transform};
pub use foundation::core::{Affine, Matrix4};
pub use foundation::error::{Matrix3dError, Matrix3dResult};
pub use plugin::config::{PluginConfig, VendorPrefix};
pub use plugin::matrix3d::{Matrix3dPlugin, TRANSFORM};
pub use plugin::registry::{InstalledPlugin, PluginRegistry, TweenPlugin};
pub use plugin::style::{MemoryElement, StyleTarget};
