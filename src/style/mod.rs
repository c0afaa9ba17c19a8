//! Style system for named styles and grid region overrides.
//!
//! - [`StyleValue`] and [`Styles`]: the registry of named terminal styles
//!   consulted by the template `style` filter
//! - [`Region`], [`StyleOverride`] and [`StyleMap`]: color and border overrides
//!   applied to named parts of the grid
//! - [`StyleValidationError`]: errors from alias validation

mod error;
mod overrides;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use overrides::{grid_overrides, Region, StyleMap, StyleOverride};
pub use registry::{Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
