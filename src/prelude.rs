//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::combination::Combination;
pub use crate::error::{MatrizError, Result};
pub use crate::generator::{
    generate, generate_with_warnings, CombinationsProvider, ExpansionWarning, ValueSetSource,
};
pub use crate::params::{Dimension, Parameter, ValueSet};
pub use crate::properties::PropertyWarning;
