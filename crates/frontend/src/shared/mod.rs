pub mod components;
pub mod host_api;
