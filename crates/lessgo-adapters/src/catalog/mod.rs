//! Blueprint catalog adapters.

mod builtin;
pub mod manifest;

pub use builtin::BuiltinCatalog;
pub use manifest::{BlueprintManifest, CatalogError};
