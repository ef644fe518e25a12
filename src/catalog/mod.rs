pub mod builtin;
pub mod content;
pub mod file;
pub mod traits;
pub mod types;

pub use builtin::BuiltinCatalog;
pub use content::{find_post, find_service, posts, services};
pub use file::JsonFileCatalog;
pub use traits::CatalogSource;
pub use types::{AreaPreset, AreaRange, Facet, Selection};
