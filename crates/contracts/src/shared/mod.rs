pub mod host_state;
pub mod option_registry;
pub mod widgets;
