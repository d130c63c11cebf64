pub mod event_render;
pub mod event_selection;
pub mod group_dropdown;
pub mod group_selection;
pub mod interval_loader;
pub mod single_select;
pub mod swatch;

pub use event_render::EventRender;
pub use event_selection::EventSelection;
pub use group_dropdown::GroupDropdown;
pub use group_selection::GroupSelection;
pub use interval_loader::IntervalLoader;
pub use single_select::SingleSelectControl;
pub use swatch::Swatch;
