//! Recursive Cartesian-product generation of infrastructure combinations.
//!
//! The generator consumes one [`ValueSet`] per dimension and materializes
//! every matrix cell: exactly one value per dimension, with each selected
//! value's sub-properties flattened into the cell. The result is a set, so
//! duplicate cells collapse and the outcome is independent of input order.
//!
//! Generation is eager and purely computational — no I/O, no shared state,
//! and the caller's collection is never touched, so concurrent callers may
//! share one input slice safely.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::combination::Combination;
use crate::error::Result;
use crate::params::{Parameter, ValueSet};
use crate::properties::{self, PropertyWarning};

/// A property pair skipped while expanding one parameter's sub-properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionWarning {
    /// The parameter whose properties blob produced the skip.
    pub parameter: Parameter,
    /// What was skipped and why.
    pub warning: PropertyWarning,
}

impl fmt::Display for ExpansionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.parameter, self.warning)
    }
}

/// Generate every combination for the given value sets.
///
/// Returns the full Cartesian product of the per-dimension values; each
/// combination additionally carries the flattened sub-properties of the
/// values it selected. An empty input, or any dimension with no values,
/// yields the empty set — that is not an error.
///
/// Malformed property pairs are skipped with a `tracing` warning; use
/// [`generate_with_warnings`] to receive them as data instead.
///
/// The product is materialized eagerly: with dimensions of cardinality
/// `c1..cn` the result holds `c1 * c2 * ... * cn` combinations.
#[must_use]
pub fn generate(value_sets: &[ValueSet]) -> BTreeSet<Combination> {
    let (combinations, _) = generate_with_warnings(value_sets);
    combinations
}

/// Generate combinations and collect every skipped property pair.
///
/// Expansion runs once per value per recursion level, so one malformed
/// pair yields one warning per call, not one per produced combination.
#[must_use]
pub fn generate_with_warnings(
    value_sets: &[ValueSet],
) -> (BTreeSet<Combination>, Vec<ExpansionWarning>) {
    let mut warnings = Vec::new();
    let combinations = product(value_sets, &mut warnings);
    (combinations, warnings)
}

/// One recursion step: peel off the head dimension, take the product of
/// the tail, and extend every tail combination with every head value.
///
/// Recursing over `split_first` tail slices keeps the caller's collection
/// untouched; pick order cannot affect the final set because combinations
/// compare by parameter-set equality.
fn product(sets: &[ValueSet], warnings: &mut Vec<ExpansionWarning>) -> BTreeSet<Combination> {
    let Some((head, tail)) = sets.split_first() else {
        return BTreeSet::new();
    };

    if tail.is_empty() {
        let mut combinations = BTreeSet::new();
        for value in head.values() {
            let flattened = expand(value, warnings);
            let mut cell = Combination::new();
            cell.add(value.clone());
            for sub in flattened {
                cell.add(sub);
            }
            combinations.insert(cell);
        }
        return combinations;
    }

    let partial = product(tail, warnings);
    let mut combinations = BTreeSet::new();
    for value in head.values() {
        let flattened = expand(value, warnings);
        for cell in &partial {
            let mut extended = cell.clone();
            extended.add(value.clone());
            for sub in &flattened {
                extended.add(sub.clone());
            }
            combinations.insert(extended);
        }
    }
    combinations
}

fn expand(value: &Parameter, warnings: &mut Vec<ExpansionWarning>) -> Vec<Parameter> {
    let expansion = properties::expand(value);
    for warning in expansion.warnings {
        warn!(parameter = %value, %warning, "skipping malformed property pair");
        warnings.push(ExpansionWarning {
            parameter: value.clone(),
            warning,
        });
    }
    expansion.parameters
}

/// Supplier of the current per-dimension value sets.
///
/// Implemented by whatever loads infrastructure metadata — typically a
/// database-backed repository. The engine only requires a finite
/// collection with at most one set per dimension, stable for the duration
/// of the call.
pub trait ValueSetSource {
    /// Load the value set of every known dimension.
    ///
    /// # Errors
    ///
    /// Returns a source-specific error when the backing store cannot be
    /// read; the provider propagates it untouched.
    fn value_sets(&self) -> Result<Vec<ValueSet>>;
}

/// Loads value sets from a source and generates the combination set.
///
/// The thin orchestration entry point: load, generate, log the sizes.
/// Scenario tests run against each combination it returns.
#[derive(Debug)]
pub struct CombinationsProvider<S> {
    source: S,
}

impl<S: ValueSetSource> CombinationsProvider<S> {
    /// Create a provider over a value-set source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the current value sets and generate all combinations.
    ///
    /// # Errors
    ///
    /// Propagates any load failure from the source.
    pub fn combinations(&self) -> Result<BTreeSet<Combination>> {
        let value_sets = self.source.value_sets()?;
        debug!(count = value_sets.len(), "retrieved value sets from source");
        let combinations = generate(&value_sets);
        debug!(count = combinations.len(), "generated infrastructure combinations");
        Ok(combinations)
    }
}


#[cfg(test)]
mod tests_proptests;
