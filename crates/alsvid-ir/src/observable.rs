//! Observables and result declarations.
//!
//! A circuit ends with a set of result declarations: requests to
//! sample or estimate an observable on specific qubits. Declarations
//! are data, not instructions — they mark where readout happens, which
//! is the attachment point for readout noise.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// Single-qubit observable bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservableKind {
    /// Identity observable.
    I,
    /// Pauli-X observable.
    X,
    /// Pauli-Y observable.
    Y,
    /// Pauli-Z observable.
    Z,
    /// Hadamard-basis observable.
    H,
}

impl ObservableKind {
    /// Get the name of this observable.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ObservableKind::I => "i",
            ObservableKind::X => "x",
            ObservableKind::Y => "y",
            ObservableKind::Z => "z",
            ObservableKind::H => "h",
        }
    }

    /// Look up an observable kind by its stable name tag.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "i" => ObservableKind::I,
            "x" => ObservableKind::X,
            "y" => ObservableKind::Y,
            "z" => ObservableKind::Z,
            "h" => ObservableKind::H,
            _ => return None,
        })
    }
}

impl fmt::Display for ObservableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The kind of result requested for an observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Per-shot samples of the observable.
    Sample,
    /// Expectation value of the observable.
    Expectation,
    /// Variance of the observable.
    Variance,
}

impl ResultKind {
    /// Get the name of this result kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ResultKind::Sample => "sample",
            ResultKind::Expectation => "expectation",
            ResultKind::Variance => "variance",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A result/measurement declaration trailing a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDecl {
    /// The kind of result requested.
    pub kind: ResultKind,
    /// The observable to estimate.
    pub observable: ObservableKind,
    /// Target qubits, in declaration order.
    pub qubits: Vec<QubitId>,
}

impl ResultDecl {
    /// Create a new result declaration.
    pub fn new(
        kind: ResultKind,
        observable: ObservableKind,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> Self {
        Self {
            kind,
            observable,
            qubits: qubits.into_iter().collect(),
        }
    }
}

impl fmt::Display for ResultDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.observable)?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i == 0 {
                write!(f, " ")?;
            } else {
                write!(f, ",")?;
            }
            write!(f, "{q}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observable_name_roundtrip() {
        for obs in [
            ObservableKind::I,
            ObservableKind::X,
            ObservableKind::Y,
            ObservableKind::Z,
            ObservableKind::H,
        ] {
            assert_eq!(ObservableKind::from_name(obs.name()), Some(obs));
        }
        assert_eq!(ObservableKind::from_name("w"), None);
    }

    #[test]
    fn test_result_decl_display() {
        let decl = ResultDecl::new(ResultKind::Sample, ObservableKind::Z, [QubitId(1)]);
        assert_eq!(format!("{decl}"), "sample(z) q1");

        let decl = ResultDecl::new(
            ResultKind::Expectation,
            ObservableKind::X,
            [QubitId(0), QubitId(2)],
        );
        assert_eq!(format!("{decl}"), "expectation(x) q0,q2");
    }
}
