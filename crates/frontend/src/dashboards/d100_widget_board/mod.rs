pub mod host_widget;
pub mod ui;

pub use ui::WidgetBoard;
