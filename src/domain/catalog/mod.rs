pub mod entity;
pub mod repository;
pub mod value_objects;
pub mod services;

pub use entity::{Catalog, Category, ToolRecord};
pub use repository::CatalogStore;
pub use value_objects::{CategoryFilter, Slug};
