//! Quantum gate kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard gates with known semantics.
///
/// Gate kinds are parameterless identifiers: noise placement criteria
/// match on the kind of a gate, never on rotation angles, so the IR
/// does not carry symbolic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// sqrt(X)-dagger gate.
    SXdg,

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled-Hadamard gate.
    CH,
    /// SWAP gate.
    Swap,
    /// iSWAP gate.
    ISwap,

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
    /// Fredkin gate (CSWAP).
    CSwap,
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::I => "id",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::H => "h",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::SX => "sx",
            GateKind::SXdg => "sxdg",
            GateKind::CX => "cx",
            GateKind::CY => "cy",
            GateKind::CZ => "cz",
            GateKind::CH => "ch",
            GateKind::Swap => "swap",
            GateKind::ISwap => "iswap",
            GateKind::CCX => "ccx",
            GateKind::CSwap => "cswap",
        }
    }

    /// Look up a gate kind by its stable name tag.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "id" => GateKind::I,
            "x" => GateKind::X,
            "y" => GateKind::Y,
            "z" => GateKind::Z,
            "h" => GateKind::H,
            "s" => GateKind::S,
            "sdg" => GateKind::Sdg,
            "t" => GateKind::T,
            "tdg" => GateKind::Tdg,
            "sx" => GateKind::SX,
            "sxdg" => GateKind::SXdg,
            "cx" => GateKind::CX,
            "cy" => GateKind::CY,
            "cz" => GateKind::CZ,
            "ch" => GateKind::CH,
            "swap" => GateKind::Swap,
            "iswap" => GateKind::ISwap,
            "ccx" => GateKind::CCX,
            "cswap" => GateKind::CSwap,
            _ => return None,
        })
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::I
            | GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::H
            | GateKind::S
            | GateKind::Sdg
            | GateKind::T
            | GateKind::Tdg
            | GateKind::SX
            | GateKind::SXdg => 1,

            GateKind::CX
            | GateKind::CY
            | GateKind::CZ
            | GateKind::CH
            | GateKind::Swap
            | GateKind::ISwap => 2,

            GateKind::CCX | GateKind::CSwap => 3,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(GateKind::H.num_qubits(), 1);
        assert_eq!(GateKind::CX.num_qubits(), 2);
        assert_eq!(GateKind::CCX.num_qubits(), 3);
        assert_eq!(GateKind::H.name(), "h");
        assert_eq!(GateKind::Swap.name(), "swap");
    }

    #[test]
    fn test_gate_name_roundtrip() {
        for gate in [
            GateKind::I,
            GateKind::X,
            GateKind::H,
            GateKind::Sdg,
            GateKind::SXdg,
            GateKind::CX,
            GateKind::ISwap,
            GateKind::CSwap,
        ] {
            assert_eq!(GateKind::from_name(gate.name()), Some(gate));
        }
        assert_eq!(GateKind::from_name("bogus"), None);
    }
}
