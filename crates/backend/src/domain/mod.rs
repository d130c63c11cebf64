pub mod widget_store;
