//! The circuit rewriter: interleaves matched noise into a circuit.
//!
//! Walks the input instruction sequence in order. After each
//! instruction, every rule in the model — in model order — that
//! matches it contributes noise immediately after the trigger. Readout
//! noise is appended after all instructions, per result declaration in
//! circuit order, per matching rule in model order.
//!
//! Rule order is a correctness property, not a detail: the first-added
//! rule's noise lands closest to the trigger, so later rules act on a
//! state already perturbed by earlier ones.

use tracing::{debug, instrument};

use alsvid_ir::{Circuit, Instruction, NoiseChannel, NoiseSite, QubitId, ResultDecl};

use crate::criteria::Criteria;
use crate::model::NoiseModel;

/// Rewrite `circuit` under `model`, producing a new circuit.
///
/// Pure: neither argument is mutated. Total: criteria that match
/// nothing (unknown qubits, kinds absent from the circuit) are silent
/// no-ops, never errors.
#[instrument(skip_all, fields(rules = model.len(), ops = circuit.num_ops()))]
pub(crate) fn apply_model(model: &NoiseModel, circuit: &Circuit) -> Circuit {
    let mut rewritten: Vec<Instruction> = Vec::with_capacity(circuit.num_ops());

    for inst in circuit.instructions() {
        rewritten.push(inst.clone());
        for rule in model.instructions() {
            if let Criteria::Gate(criteria) = rule.criteria() {
                if criteria.matches(inst) {
                    debug!(rule = %rule.channel(), trigger = %inst, "gate noise matched");
                    push_channel(&mut rewritten, rule.channel(), NoiseSite::Gate, &inst.qubits);
                }
            }
        }
    }

    for decl in circuit.results() {
        for rule in model.instructions() {
            if let Criteria::Observable(criteria) = rule.criteria() {
                if criteria.matches(decl) {
                    debug!(rule = %rule.channel(), trigger = %decl, "readout noise matched");
                    push_channel(
                        &mut rewritten,
                        rule.channel(),
                        NoiseSite::Readout,
                        &decl.qubits,
                    );
                }
            }
        }
    }

    let results: Vec<ResultDecl> = circuit.results().to_vec();
    Circuit::from_parts(circuit.name(), circuit.num_qubits(), rewritten, results)
}

/// Insert a channel on the matched targets.
///
/// A 1-qubit channel fans out, one instruction per target qubit in
/// target order. A 2-qubit channel fires only when the trigger has
/// exactly two targets; any other arity pairing is a silent no-op.
fn push_channel(
    out: &mut Vec<Instruction>,
    channel: &NoiseChannel,
    site: NoiseSite,
    targets: &[QubitId],
) {
    match channel.qubit_count() {
        1 => {
            for &qubit in targets {
                out.push(Instruction::noise(channel.clone(), site, [qubit]));
            }
        }
        2 if targets.len() == 2 => {
            out.push(Instruction::noise(channel.clone(), site, targets.to_vec()));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{GateCriteria, ObservableCriteria};
    use alsvid_ir::{GateKind, InstructionKind, ObservableKind, QubitId};

    fn depolarizing(p: f64) -> NoiseChannel {
        NoiseChannel::depolarizing(p).unwrap()
    }

    #[test]
    fn test_noise_inserted_after_trigger() {
        let mut model = NoiseModel::new();
        model.add_noise(
            depolarizing(0.1),
            GateCriteria::any().with_kinds([GateKind::H]),
        );

        let mut circuit = Circuit::with_size("test", 3);
        circuit.h(QubitId(0)).unwrap();
        circuit.s(QubitId(1)).unwrap();
        circuit.h(QubitId(2)).unwrap();

        let noisy = apply_model(&model, &circuit);
        let names: Vec<_> = noisy.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, ["h", "depolarizing", "s", "h", "depolarizing"]);
        assert_eq!(noisy.instructions()[1].qubits, vec![QubitId(0)]);
        assert_eq!(noisy.instructions()[4].qubits, vec![QubitId(2)]);
    }

    #[test]
    fn test_one_qubit_channel_fans_out_on_two_qubit_gate() {
        let mut model = NoiseModel::new();
        model.add_noise(
            depolarizing(0.05),
            GateCriteria::any().with_kinds([GateKind::CX]),
        );

        let mut circuit = Circuit::with_size("test", 2);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let noisy = apply_model(&model, &circuit);
        assert_eq!(noisy.num_ops(), 3);
        assert_eq!(noisy.instructions()[1].qubits, vec![QubitId(0)]);
        assert_eq!(noisy.instructions()[2].qubits, vec![QubitId(1)]);
    }

    #[test]
    fn test_two_qubit_channel_arity() {
        let mut model = NoiseModel::new();
        model.add_noise(
            NoiseChannel::two_qubit_depolarizing(0.02).unwrap(),
            GateCriteria::any(),
        );

        let mut circuit = Circuit::with_size("test", 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let noisy = apply_model(&model, &circuit);
        // The 1-qubit H cannot host a 2-qubit channel; only the CX does.
        assert_eq!(noisy.num_ops(), 3);
        assert_eq!(
            noisy.instructions()[2].qubits,
            vec![QubitId(0), QubitId(1)]
        );
    }

    #[test]
    fn test_readout_noise_site() {
        let mut model = NoiseModel::new();
        model.add_noise(
            NoiseChannel::bit_flip(0.01).unwrap(),
            ObservableCriteria::any(),
        );

        let mut circuit = Circuit::with_size("test", 1);
        circuit.h(QubitId(0)).unwrap();
        circuit.sample(ObservableKind::Z, [QubitId(0)]).unwrap();

        let noisy = apply_model(&model, &circuit);
        assert_eq!(noisy.num_ops(), 2);
        assert!(noisy.instructions()[1].is_readout_noise());
        assert_eq!(noisy.results(), circuit.results());
    }

    #[test]
    fn test_empty_model_identity() {
        let model = NoiseModel::new();
        let circuit = Circuit::ghz(4).unwrap();
        assert_eq!(apply_model(&model, &circuit), circuit);
    }

    #[test]
    fn test_unmatched_criteria_is_silent() {
        let mut model = NoiseModel::new();
        // Qubit 99 does not exist in the circuit: never matches, no error.
        model.add_noise(
            depolarizing(0.1),
            GateCriteria::any().with_qubits([QubitId(99)]),
        );

        let circuit = Circuit::bell().unwrap();
        assert_eq!(apply_model(&model, &circuit), circuit);
    }

    #[test]
    fn test_existing_noise_is_ordinary() {
        let mut first = NoiseModel::new();
        first.add_noise(
            depolarizing(0.1),
            GateCriteria::any().with_kinds([GateKind::H]),
        );

        let mut second = NoiseModel::new();
        second.add_noise(
            NoiseChannel::bit_flip(0.2).unwrap(),
            GateCriteria::any().with_kinds([alsvid_ir::ChannelKind::Depolarizing]),
        );

        let mut circuit = Circuit::with_size("test", 1);
        circuit.h(QubitId(0)).unwrap();

        let once = apply_model(&first, &circuit);
        let twice = apply_model(&second, &once);

        let names: Vec<_> = twice.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, ["h", "depolarizing", "bit_flip"]);
        match &twice.instructions()[2].kind {
            InstructionKind::Noise { site, .. } => assert_eq!(*site, NoiseSite::Gate),
            other => panic!("expected noise, got {other:?}"),
        }
    }
}
