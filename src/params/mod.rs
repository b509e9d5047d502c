//! Infrastructure dimensions, parameters, and per-dimension value sets.
//!
//! A [`Dimension`] names one axis of infrastructure variation, a
//! [`Parameter`] is one concrete value on that axis, and a [`ValueSet`]
//! collects every eligible value of a single dimension. These are the
//! leaves the combination generator works over.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};

/// Identifier of one axis of infrastructure variation.
///
/// Dimensions are an open, string-keyed space rather than a closed
/// enumeration: new axes (container runtime, CPU architecture, ...) are
/// added by introducing a new identifier, never by touching the engine.
/// Sub-property expansion also mints synthetic dimensions at run time from
/// property keys such as `engine` or `version`.
///
/// Well-known identifiers are provided as constructors for convenience
/// only; nothing in the engine treats them specially.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension(String);

impl Dimension {
    /// Create a dimension from an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `OPERATING_SYSTEM` dimension.
    #[must_use]
    pub fn operating_system() -> Self {
        Self::new("OPERATING_SYSTEM")
    }

    /// The `DATABASE` dimension.
    #[must_use]
    pub fn database() -> Self {
        Self::new("DATABASE")
    }

    /// The `JDK` dimension.
    #[must_use]
    pub fn jdk() -> Self {
        Self::new("JDK")
    }

    /// Identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Dimension {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Dimension {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One concrete value of one infrastructure dimension.
///
/// A parameter may carry an opaque `properties` blob — key=value lines
/// describing sub-structure that belongs to this value (a database's
/// engine and version, say). The blob is parsed only during sub-property
/// expansion; the parameter itself treats it as text.
///
/// Identity is `(dimension, name)`: two parameters with the same dimension
/// and name are the same value regardless of their properties or readiness
/// flag, and parameters order by dimension, then name, so they can live in
/// ordered duplicate-free sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    dimension: Dimension,
    name: String,
    properties: String,
    ready: bool,
}

impl Parameter {
    /// Create a parameter with no properties, ready for inclusion.
    #[must_use]
    pub fn new(dimension: impl Into<Dimension>, name: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            name: name.into(),
            properties: String::new(),
            ready: true,
        }
    }

    /// Attach a key=value properties blob describing sub-structure.
    #[must_use]
    pub fn with_properties(mut self, properties: impl Into<String>) -> Self {
        self.properties = properties.into();
        self
    }

    /// Set the eligibility flag.
    #[must_use]
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }

    /// Dimension this value belongs to.
    #[must_use]
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Concrete value name, e.g. `"Ubuntu16"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw properties blob; empty when the value has no sub-structure.
    #[must_use]
    pub fn properties(&self) -> &str {
        &self.properties
    }

    /// Whether this value is eligible for generated matrices.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

// Identity ignores `properties` and `ready`: the same (dimension, name)
// pair is the same value wherever it appears.
impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.name == other.name
    }
}

impl Eq for Parameter {}

impl PartialOrd for Parameter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Parameter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dimension
            .cmp(&other.dimension)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.dimension, self.name)
    }
}

/// The complete set of eligible values for one dimension.
///
/// A generator input holds at most one value set per dimension; the
/// engine does not deduplicate across sets of the same dimension, so a
/// caller that supplies two sets for `DATABASE` gets a matrix with two
/// database axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSet {
    dimension: Dimension,
    values: BTreeSet<Parameter>,
}

impl ValueSet {
    /// Build a value set, checking every parameter against the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] when a parameter belongs
    /// to a different dimension than the set is declared for.
    pub fn new(
        dimension: impl Into<Dimension>,
        values: impl IntoIterator<Item = Parameter>,
    ) -> Result<Self> {
        let dimension = dimension.into();
        let mut set = BTreeSet::new();
        for value in values {
            if value.dimension() != &dimension {
                return Err(MatrizError::DimensionMismatch {
                    expected: dimension.to_string(),
                    actual: value.dimension().to_string(),
                    parameter: value.name().to_string(),
                });
            }
            set.insert(value);
        }
        Ok(Self {
            dimension,
            values: set,
        })
    }

    /// A value set with no values. An empty dimension zeroes the whole
    /// product.
    #[must_use]
    pub fn empty(dimension: impl Into<Dimension>) -> Self {
        Self {
            dimension: dimension.into(),
            values: BTreeSet::new(),
        }
    }

    /// Dimension this set covers.
    #[must_use]
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// The values, ordered and duplicate-free.
    #[must_use]
    pub fn values(&self) -> &BTreeSet<Parameter> {
        &self.values
    }

    /// Number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the set has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
