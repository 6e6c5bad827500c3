//! High-level circuit builder API.
//!
//! A circuit is a flat ordered sequence of instructions plus a
//! trailing list of result declarations. Order is the semantics: the
//! noise rewriter inserts channels *immediately after* their trigger,
//! which is a positional notion, so no DAG is kept.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::instruction::Instruction;
use crate::observable::{ObservableKind, ResultDecl, ResultKind};
use crate::qubit::QubitId;

/// A quantum circuit.
///
/// Provides a fluent API for building circuits, with convenient
/// methods for common gates and result declarations. Structural
/// equality (`PartialEq`) compares name, qubit count, instruction
/// sequence, and result declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the circuit.
    num_qubits: u32,
    /// Ordered instruction sequence.
    instructions: Vec<Instruction>,
    /// Trailing result declarations.
    results: Vec<ResultDecl>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            instructions: vec![],
            results: vec![],
        }
    }

    /// Create a circuit with a given number of qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
            results: vec![],
        }
    }

    /// Assemble a circuit from already-validated parts.
    ///
    /// Used by rewriters that derive every part from an existing
    /// circuit; no per-instruction validation is repeated.
    pub fn from_parts(
        name: impl Into<String>,
        num_qubits: u32,
        instructions: Vec<Instruction>,
        results: Vec<ResultDecl>,
    ) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions,
            results,
        }
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    fn check_targets(&self, op_name: &str, qubits: &[QubitId]) -> IrResult<()> {
        for (i, &q) in qubits.iter().enumerate() {
            if q.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: q,
                    op_name: Some(op_name.to_string()),
                });
            }
            if qubits[..i].contains(&q) {
                return Err(IrError::DuplicateQubit {
                    qubit: q,
                    op_name: Some(op_name.to_string()),
                });
            }
        }
        Ok(())
    }

    /// Append an arbitrary instruction.
    ///
    /// Validates that targets exist and are not duplicated, and that
    /// gate arity matches the target count.
    pub fn push(&mut self, inst: Instruction) -> IrResult<&mut Self> {
        self.check_targets(inst.name(), &inst.qubits)?;
        if let Some(gate) = inst.as_gate() {
            let expected = gate.num_qubits();
            let got = u32::try_from(inst.qubits.len()).unwrap_or(u32::MAX);
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }
        self.instructions.push(inst);
        Ok(self)
    }

    /// Apply an arbitrary gate.
    pub fn gate(
        &mut self,
        gate: GateKind,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::gate(gate, qubits))
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::Sdg, qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::T, qubit))
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::Tdg, qubit))
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::SX, qubit))
    }

    /// Apply sqrt(X)-dagger gate.
    pub fn sxdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(GateKind::SXdg, qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(GateKind::CX, control, target))
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(GateKind::CY, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(GateKind::CZ, control, target))
    }

    /// Apply controlled-Hadamard gate.
    pub fn ch(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(GateKind::CH, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(GateKind::Swap, q1, q2))
    }

    /// Apply iSWAP gate.
    pub fn iswap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(GateKind::ISwap, q1, q2))
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::gate(GateKind::CCX, [c1, c2, target]))
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::gate(GateKind::CSwap, [control, t1, t2]))
    }

    // =========================================================================
    // Result declarations
    // =========================================================================

    /// Declare a result on the circuit.
    pub fn declare_result(&mut self, decl: ResultDecl) -> IrResult<&mut Self> {
        self.check_targets(decl.kind.name(), &decl.qubits)?;
        self.results.push(decl);
        Ok(self)
    }

    /// Declare per-shot sampling of an observable.
    pub fn sample(
        &mut self,
        observable: ObservableKind,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.declare_result(ResultDecl::new(ResultKind::Sample, observable, qubits))
    }

    /// Declare an expectation value of an observable.
    pub fn expectation(
        &mut self,
        observable: ObservableKind,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.declare_result(ResultDecl::new(ResultKind::Expectation, observable, qubits))
    }

    /// Declare a variance of an observable.
    pub fn variance(
        &mut self,
        observable: ObservableKind,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.declare_result(ResultDecl::new(ResultKind::Variance, observable, qubits))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the ordered instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the result declarations.
    pub fn results(&self) -> &[ResultDecl] {
        &self.results
    }

    /// Get the number of instructions.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Get the number of gate instructions, excluding noise.
    pub fn num_gates(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_gate()).count()
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit with Z sampling on both qubits.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2);
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .sample(ObservableKind::Z, [QubitId(0), QubitId(1)])?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit with Z sampling on all qubits.
    pub fn ghz(n: u32) -> IrResult<Self> {
        if n == 0 {
            return Ok(Self::new("ghz_0"));
        }

        let mut circuit = Self::with_size("ghz", n);
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        circuit.sample(ObservableKind::Z, (0..n).map(QubitId))?;
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::NoiseChannel;
    use crate::instruction::NoiseSite;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .sample(ObservableKind::Z, [QubitId(0)])
            .unwrap();

        assert_eq!(circuit.num_ops(), 2);
        assert_eq!(circuit.results().len(), 1);
    }

    #[test]
    fn test_qubit_not_found() {
        let mut circuit = Circuit::with_size("test", 1);
        let err = circuit.h(QubitId(3)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { .. }));

        let err = circuit
            .sample(ObservableKind::Z, [QubitId(9)])
            .unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2);
        let err = circuit.cx(QubitId(0), QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let mut circuit = Circuit::with_size("test", 3);
        let err = circuit
            .gate(GateKind::CX, [QubitId(0), QubitId(1), QubitId(2)])
            .unwrap_err();
        assert!(matches!(err, IrError::QubitCountMismatch { .. }));
    }

    #[test]
    fn test_push_noise_instruction() {
        let mut circuit = Circuit::with_size("test", 1);
        circuit.h(QubitId(0)).unwrap();
        circuit
            .push(Instruction::noise(
                NoiseChannel::depolarizing(0.1).unwrap(),
                NoiseSite::Gate,
                [QubitId(0)],
            ))
            .unwrap();

        assert_eq!(circuit.num_ops(), 2);
        assert_eq!(circuit.num_gates(), 1);
    }

    #[test]
    fn test_structural_equality() {
        let a = Circuit::bell().unwrap();
        let b = Circuit::bell().unwrap();
        assert_eq!(a, b);

        let mut c = Circuit::bell().unwrap();
        c.z(QubitId(0)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_ghz() {
        let circuit = Circuit::ghz(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_ops(), 5); // H + 4 CX
        assert_eq!(circuit.results().len(), 1);
    }
}
