//! Application services

pub mod category;

pub use category::{CategoryListing, CategoryService, CategoryUpdate, EditForm, NewCategory};
