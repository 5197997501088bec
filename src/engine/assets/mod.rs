//! Asset loading and lookup.
//!
//! Models are fetched from an [`AssetSource`], published in the [`AssetTable`] of an
//! [`AssetLoader`] and handed out as cheap, shared [`ModelHandle`]s. The loader owns the
//! one batch of a scene and its readiness flag; see the [`loader`] module docs.
//!
//! Procedural geometry lives next to it as [`Mesh`].

pub mod error;
pub mod loader;
pub mod scene_loader;

mod asset_table;
mod mesh;
mod model;
mod request;
mod source;

pub use self::asset_table::*;
pub use self::error::{AssetError, SourceError};
pub use self::loader::*;
pub use self::mesh::*;
pub use self::model::*;
pub use self::request::*;
pub use self::source::*;
