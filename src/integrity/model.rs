use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::core::{ActivityId, InventoryError, ScopeId};

/// Which parent aggregate a stored percentage is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PercentBase {
    Category,
    Scope,
    Total,
}

impl Display for PercentBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::Scope => "scope",
            Self::Total => "total",
        })
    }
}

/// A single broken invariant in a loaded snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Violation {
    DuplicateScopeId(ScopeId),
    DuplicateActivityId(ActivityId),
    DuplicateCategory {
        scope: ScopeId,
        name: String,
    },
    UnknownScope {
        activity: ActivityId,
        scope: ScopeId,
    },
    UnknownCategory {
        activity: ActivityId,
        scope: ScopeId,
        category: String,
    },
    ActivityTotalMismatch {
        activity: ActivityId,
        stored: f64,
        components: f64,
    },
    ScopeTotalMismatch {
        scope: ScopeId,
        stored: f64,
        summed: f64,
    },
    CategoryTotalMismatch {
        scope: ScopeId,
        category: String,
        stored: f64,
        summed: f64,
    },
    CategoryCountMismatch {
        scope: ScopeId,
        category: String,
        stored: u32,
        counted: usize,
    },
    InventoryTotalMismatch {
        stored: f64,
        summed: f64,
    },
    ScopePercentMismatch {
        scope: ScopeId,
        stored: f64,
        expected: f64,
    },
    CategoryPercentMismatch {
        scope: ScopeId,
        category: String,
        base: PercentBase,
        stored: f64,
        expected: f64,
    },
    ActivityPercentMismatch {
        activity: ActivityId,
        base: PercentBase,
        stored: f64,
        expected: f64,
    },
    ScopePercentSum {
        sum: f64,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateScopeId(id) => write!(f, "duplicate scope id {id}"),
            Self::DuplicateActivityId(id) => write!(f, "duplicate activity id {id}"),
            Self::DuplicateCategory { scope, name } => {
                write!(f, "duplicate category '{name}' in scope {scope}")
            }
            Self::UnknownScope { activity, scope } => {
                write!(f, "activity {activity} references unknown scope {scope}")
            }
            Self::UnknownCategory {
                activity,
                scope,
                category,
            } => write!(
                f,
                "activity {activity} references unknown category '{category}' in scope {scope}"
            ),
            Self::ActivityTotalMismatch {
                activity,
                stored,
                components,
            } => write!(
                f,
                "activity {activity} total {stored} != gas components {components}"
            ),
            Self::ScopeTotalMismatch {
                scope,
                stored,
                summed,
            } => write!(f, "scope {scope} total {stored} != activity sum {summed}"),
            Self::CategoryTotalMismatch {
                scope,
                category,
                stored,
                summed,
            } => write!(
                f,
                "category '{category}' (scope {scope}) total {stored} != activity sum {summed}"
            ),
            Self::CategoryCountMismatch {
                scope,
                category,
                stored,
                counted,
            } => write!(
                f,
                "category '{category}' (scope {scope}) activity count {stored} != {counted}"
            ),
            Self::InventoryTotalMismatch { stored, summed } => {
                write!(f, "inventory total {stored} != activity sum {summed}")
            }
            Self::ScopePercentMismatch {
                scope,
                stored,
                expected,
            } => write!(
                f,
                "scope {scope} percent of total {stored} != expected {expected}"
            ),
            Self::CategoryPercentMismatch {
                scope,
                category,
                base,
                stored,
                expected,
            } => write!(
                f,
                "category '{category}' (scope {scope}) percent of {base} {stored} != expected {expected}"
            ),
            Self::ActivityPercentMismatch {
                activity,
                base,
                stored,
                expected,
            } => write!(
                f,
                "activity {activity} percent of {base} {stored} != expected {expected}"
            ),
            Self::ScopePercentSum { sum } => {
                write!(f, "scope percentages sum to {sum}, not 100")
            }
        }
    }
}

/// Outcome of validating a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    pub(crate) violations: Vec<Violation>,
}

impl IntegrityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// `Ok(())` for a clean report, otherwise [`InventoryError::Integrity`].
    ///
    /// # Errors
    ///
    /// Returns the report wrapped in an error if it holds any violation.
    pub fn into_result(self) -> Result<(), InventoryError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(InventoryError::Integrity(self))
        }
    }
}

impl Display for IntegrityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "; {v}")?;
        }
        Ok(())
    }
}
