//! One cell of the test matrix.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::{Dimension, Parameter};

/// One fully specified test-matrix cell.
///
/// A combination holds exactly one parameter per top-level input
/// dimension, plus any synthetic parameters flattened out of a selected
/// value's sub-properties. Parameters are kept in an ordered duplicate-free
/// set, and two combinations are equal iff their parameter sets are equal —
/// insertion order never matters, which is how duplicate matrix cells
/// collapse in a result set.
///
/// Combinations grow by clone-then-extend during generation and are never
/// mutated once placed in a result set.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Combination {
    parameters: BTreeSet<Parameter>,
}

impl Combination {
    /// Create an empty combination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Returns `false` when an equal parameter (same
    /// dimension and name) is already present.
    pub fn add(&mut self, parameter: Parameter) -> bool {
        self.parameters.insert(parameter)
    }

    /// The parameters, ordered by dimension then name.
    #[must_use]
    pub fn parameters(&self) -> &BTreeSet<Parameter> {
        &self.parameters
    }

    /// Look up the parameter selected for a dimension, if any.
    #[must_use]
    pub fn get(&self, dimension: &Dimension) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.dimension() == dimension)
    }

    /// Parameters of one dimension. Top-level dimensions contribute exactly
    /// one; a synthetic dimension colliding with a top-level one can
    /// contribute more.
    pub fn of_dimension<'a>(
        &'a self,
        dimension: &'a Dimension,
    ) -> impl Iterator<Item = &'a Parameter> + 'a {
        self.parameters
            .iter()
            .filter(move |p| p.dimension() == dimension)
    }

    /// Number of parameters, flattened sub-parameters included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the combination holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl FromIterator<Parameter> for Combination {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, "]")
    }
}
