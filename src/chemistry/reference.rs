//! Reference tables: validated component sets
//!
//! A [`ReferenceTable`] is the ordered set of components an evaluation runs
//! over. Insertion order matters: when two components elute at exactly the
//! same retention time, the table order is the tie-break.
//!
//! Two presets are built in:
//!
//! - [`ReferenceTable::dorflex`]: the three actives of the Dorflex
//!   formulation at well-separated base times {2.0, 4.0, 6.0} min.
//! - [`ReferenceTable::coelution_challenge`]: the same components with
//!   Dipirona and Cafeína pushed to {3.0, 3.4} min so that, at the reference
//!   operating point, the first pair co-elutes.
//!
//! Arbitrary tables are accepted through [`ReferenceTable::new`]; both
//! presets and custom tables go through the same validation and the same
//! evaluation path.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::chemistry::components::{ComponentSpec, MobilePhaseResponse};
use crate::error::EvaluationError;

/// Name of the dipyrone component (the one with inverse phase response).
pub const DIPIRONA: &str = "Dipirona";
/// Name of the caffeine component.
pub const CAFEINA: &str = "Cafeína";
/// Name of the orphenadrine component.
pub const ORFENADRINA: &str = "Orfenadrina";

// =================================================================================================
// ReferenceTable
// =================================================================================================

/// Validated, ordered component set.
///
/// # Example
///
/// ```rust
/// use hplc_rs::chemistry::{ComponentSpec, MobilePhaseResponse, ReferenceTable};
///
/// // A custom two-component table.
/// let table = ReferenceTable::new(vec![
///     ComponentSpec::new("A", 1.5, MobilePhaseResponse::Direct),
///     ComponentSpec::new("B", 3.0, MobilePhaseResponse::Direct),
/// ]).unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    components: Vec<ComponentSpec>,
}

impl ReferenceTable {
    /// Build a table from an arbitrary component list.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::InvalidReferenceTable`] when the list is empty,
    /// contains a duplicate name, or any component fails its own validation.
    pub fn new(components: Vec<ComponentSpec>) -> Result<Self, EvaluationError> {
        let table = Self { components };
        table.validate()?;
        Ok(table)
    }

    /// The default Dorflex table: Dipirona 2.0, Cafeína 4.0, Orfenadrina 6.0.
    pub fn dorflex() -> Self {
        Self {
            components: vec![
                ComponentSpec::new(DIPIRONA, 2.0, MobilePhaseResponse::Inverse),
                ComponentSpec::new(CAFEINA, 4.0, MobilePhaseResponse::Direct),
                ComponentSpec::new(ORFENADRINA, 6.0, MobilePhaseResponse::Direct),
            ],
        }
    }

    /// The near-coelution challenge table: Dipirona 3.0, Cafeína 3.4,
    /// Orfenadrina 6.0.
    ///
    /// At the reference operating point the Dipirona/Cafeína pair lands just
    /// below the resolution threshold and is flagged co-eluting.
    pub fn coelution_challenge() -> Self {
        Self {
            components: vec![
                ComponentSpec::new(DIPIRONA, 3.0, MobilePhaseResponse::Inverse),
                ComponentSpec::new(CAFEINA, 3.4, MobilePhaseResponse::Direct),
                ComponentSpec::new(ORFENADRINA, 6.0, MobilePhaseResponse::Direct),
            ],
        }
    }

    /// Components in table (insertion) order.
    pub fn components(&self) -> &[ComponentSpec] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the table holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up a component by name.
    pub fn get(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Check table invariants: non-empty, unique names, valid components.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::InvalidReferenceTable`] naming the first violation.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        if self.components.is_empty() {
            return Err(EvaluationError::table("empty component set"));
        }

        let mut seen = HashSet::new();
        for spec in &self.components {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(EvaluationError::table(format!(
                    "duplicate component name `{}`",
                    spec.name
                )));
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
