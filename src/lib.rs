//! avatargen builds layered avatars from pre-authored image assets.
//!
//! An avatar is six layers stacked back to front: background, face, clothes, mouth, hair, eye.
//! Each layer is one image picked from that layer's options for a character [`Category`]; the
//! background set is shared by all categories.
//!
//! # Pipeline overview
//!
//! 1. **Catalog**: scan an assets directory once into an immutable [`AssetCatalog`]
//! 2. **Select**: a [`Seed`] drives one SplitMix64 [`Selector`] that picks one asset per layer
//! 3. **Compose**: decode each pick and source-over it onto a 400x400 [`Canvas`]
//! 4. **Encode** (optional): write PNG, JPEG or GIF chosen by the destination extension
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a `(Category, Seed)` pair against a fixed catalog always produces
//!   byte-identical pixels. Username seeds are the FNV-1a 32-bit hash of the name.
//! - **No shared mutable state**: the catalog is read-only; every call owns its selector and
//!   canvas, so a [`Generator`] can be used from any number of threads.
//! - **Premultiplied RGBA8** internally; exported images are straight alpha.
//!
//! ```no_run
//! use avatargen::{Category, Generator};
//!
//! let generator = Generator::from_assets_dir("data")?;
//! generator.generate_file_from_username(Category::Female, "alice", "alice.png")?;
//! # Ok::<(), avatargen::AvatarError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod render;

pub use assets::catalog::{
    AssetCatalog, CatalogOpts, CatalogSummary, CategoryAssets, LayerSet, is_hidden_entry,
};
pub use assets::decode::{LayerImage, decode_image, load_layer_image};
pub use assets::natural::natural_cmp;
pub use encode::dispatch::{JPEG_QUALITY, OutputFormat, encode, write_file};
pub use foundation::core::{CANVAS_SIZE, Category, Layer, Seed};
pub use foundation::error::{AvatarError, AvatarResult};
pub use foundation::math::Rng64;
pub use render::canvas::Canvas;
pub use render::compose::{compose, compose_selection};
pub use render::composite::{PremulRgba8, over};
pub use render::pipeline::Generator;
pub use render::select::{Selection, Selector, select_layers};
