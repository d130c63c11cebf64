//! Option Registry
//!
//! Ordered option list shared by every selection widget: built-in options
//! merged with host-supplied ones, palette colors for entries without a
//! color, deduplication by key or value, and options created at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::option_registry::{DedupBy, OptionItem, OptionRegistry, Scalar};
//!
//! let mut registry = OptionRegistry::new(
//!     vec![OptionItem::labelled("freezing").with_color("lightblue")],
//!     &[OptionItem::labelled("shock")],
//!     DedupBy::Value,
//! );
//! let created = registry.add_option("tone").unwrap();
//! assert_eq!(registry.lookup(&Scalar::text("tone")), Some(&created));
//! ```

pub mod option;
pub mod palette;
pub mod registry;

pub use option::{OptionItem, Real, Scalar};
pub use palette::{palette_color, NEUTRAL_SWATCH, PASTEL_COLORS};
pub use registry::{add_option, initialize, lookup, toggle, DedupBy, KeyingConvention, OptionRegistry};

#[cfg(test)]
mod properties;
