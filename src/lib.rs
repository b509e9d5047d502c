//! Matriz: infrastructure test-matrix combination engine.
//!
//! Matriz computes the full set of distinct infrastructure environments a
//! product's test scenarios must run against: every valid pairing of, say,
//! {operating system} x {database} x {JDK}. Each dimension contributes a
//! set of discrete values, and a value may carry embedded key=value
//! sub-structure (a "database" value expands into engine and version) that
//! is flattened into the resulting combination without multiplying the
//! matrix itself.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let os = ValueSet::new("OPERATING_SYSTEM", [
//!     Parameter::new("OPERATING_SYSTEM", "Ubuntu16"),
//!     Parameter::new("OPERATING_SYSTEM", "CentOS7"),
//! ]).unwrap();
//! let db = ValueSet::new("DATABASE", [
//!     Parameter::new("DATABASE", "MySQL")
//!         .with_properties("engine=mysql\nversion=5.7"),
//! ]).unwrap();
//! let jdk = ValueSet::new("JDK", [
//!     Parameter::new("JDK", "JDK8"),
//! ]).unwrap();
//!
//! let combinations = generate(&[os, db, jdk]);
//!
//! // 2 operating systems x 1 database x 1 JDK = 2 matrix cells, and every
//! // cell that selects MySQL also carries its flattened engine and version.
//! assert_eq!(combinations.len(), 2);
//! for cell in &combinations {
//!     assert_eq!(cell.len(), 5);
//! }
//! ```
//!
//! # Modules
//!
//! - [`params`]: `Dimension`, `Parameter`, and per-dimension `ValueSet`
//! - [`combination`]: `Combination`, one cell of the test matrix
//! - [`properties`]: key=value sub-property parsing, validation, flattening
//! - [`generator`]: the recursive Cartesian product and the source seam
//! - [`error`]: crate error type
//!
//! The engine is eager: it materializes the whole product in memory before
//! returning. Dimension count and per-dimension cardinality multiply.

pub mod combination;
pub mod error;
pub mod generator;
pub mod params;
pub mod prelude;
pub mod properties;

pub use combination::Combination;
pub use error::{MatrizError, Result};
pub use generator::{generate, generate_with_warnings};
pub use params::{Dimension, Parameter, ValueSet};
