pub mod service;
pub mod store;

pub use store::{WidgetStore, WidgetStoreError};
