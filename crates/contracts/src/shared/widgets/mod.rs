//! Headless widget state
//!
//! Everything a selection widget does between two renders, without any DOM:
//! panel open/closed, pending text, option creation, and the partial state
//! that has to be reported back to the host.

pub mod dropdown;
pub mod interval;
pub mod props;
pub mod selection;
pub mod variants;

pub use dropdown::{DropdownState, Panel};
pub use interval::{add_interval, IntervalForm};
pub use props::{Interval, Outbound, PropsUpdate};
pub use selection::{ControlLabel, MultiSelect, SingleSelect};
