//! End-to-end scenarios for noise model application.

use alsvid_ir::{
    ChannelKind, Circuit, GateKind, InstructionKind, NoiseChannel, ObservableKind, QubitId,
};
use alsvid_noise::{GateCriteria, NoiseModel, ObservableCriteria};

#[test]
fn depolarizing_after_h_gates_only() {
    let mut model = NoiseModel::new();
    model.add_noise(
        NoiseChannel::depolarizing(0.1).unwrap(),
        GateCriteria::any().with_kinds([GateKind::H]),
    );

    let mut circuit = Circuit::with_size("three_ops", 3);
    circuit.h(QubitId(0)).unwrap();
    circuit.s(QubitId(1)).unwrap();
    circuit.h(QubitId(2)).unwrap();

    let noisy = model.apply(&circuit);

    // H(q0), noise@q0, S(q1), H(q2), noise@q2 — five items.
    assert_eq!(noisy.num_ops(), 5);
    let names: Vec<_> = noisy.instructions().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["h", "depolarizing", "s", "h", "depolarizing"]);
    assert_eq!(noisy.instructions()[1].qubits, vec![QubitId(0)]);
    assert_eq!(noisy.instructions()[4].qubits, vec![QubitId(2)]);
}

#[test]
fn multiple_matches_compose_in_model_order() {
    let mut model = NoiseModel::new();
    model
        .add_noise(
            NoiseChannel::depolarizing(0.1).unwrap(),
            GateCriteria::any().with_qubits([QubitId(0)]),
        )
        .add_noise(
            NoiseChannel::amplitude_damping(0.1).unwrap(),
            GateCriteria::any().with_qubits([QubitId(0)]),
        );

    let mut circuit = Circuit::with_size("single_h", 1);
    circuit.h(QubitId(0)).unwrap();

    let noisy = model.apply(&circuit);

    // Insertion order is the tie-break: depolarizing strictly before
    // amplitude damping, because it was added first.
    let names: Vec<_> = noisy.instructions().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["h", "depolarizing", "amplitude_damping"]);
}

#[test]
fn readout_noise_targets_matching_declarations_only() {
    let mut model = NoiseModel::new();
    model.add_noise(
        NoiseChannel::bit_flip(0.01).unwrap(),
        ObservableCriteria::any().with_qubits([QubitId(1), QubitId(2)]),
    );

    let mut circuit = Circuit::with_size("readout", 3);
    circuit.h(QubitId(0)).unwrap();
    circuit.sample(ObservableKind::Z, [QubitId(0)]).unwrap();
    circuit.sample(ObservableKind::Z, [QubitId(1)]).unwrap();

    let noisy = model.apply(&circuit);

    // One readout bit-flip for the q1 declaration; the q0 declaration
    // is outside the qubit filter.
    assert_eq!(noisy.num_ops(), 2);
    let readout = &noisy.instructions()[1];
    assert!(readout.is_readout_noise());
    assert_eq!(readout.qubits, vec![QubitId(1)]);
    // Declarations themselves are carried over untouched.
    assert_eq!(noisy.results(), circuit.results());
}

#[test]
fn gate_rules_ignore_declarations_and_vice_versa() {
    let mut model = NoiseModel::new();
    model
        .add_noise(
            NoiseChannel::depolarizing(0.1).unwrap(),
            GateCriteria::any(),
        )
        .add_noise(
            NoiseChannel::bit_flip(0.01).unwrap(),
            ObservableCriteria::any(),
        );

    let mut circuit = Circuit::with_size("mixed", 1);
    circuit.h(QubitId(0)).unwrap();
    circuit.sample(ObservableKind::Z, [QubitId(0)]).unwrap();

    let noisy = model.apply(&circuit);
    let names: Vec<_> = noisy.instructions().iter().map(|i| i.name()).collect();
    // One depolarizing for the gate, one bit-flip for the declaration;
    // never two of either.
    assert_eq!(names, ["h", "depolarizing", "bit_flip"]);
}

#[test]
fn sequential_models_match_concatenation_when_independent() {
    let mut m1 = NoiseModel::new();
    m1.add_noise(
        NoiseChannel::depolarizing(0.1).unwrap(),
        GateCriteria::any().with_kinds([GateKind::H]),
    );

    let mut m2 = NoiseModel::new();
    m2.add_noise(
        NoiseChannel::phase_flip(0.05).unwrap(),
        GateCriteria::any().with_kinds([GateKind::CX]),
    );

    let mut concatenated = NoiseModel::new();
    for rule in m1.instructions().iter().chain(m2.instructions()) {
        concatenated.add_instruction(rule.clone());
    }

    let circuit = Circuit::bell().unwrap();
    let sequential = m2.apply(&m1.apply(&circuit));
    let single = concatenated.apply(&circuit);
    assert_eq!(sequential, single);
}

#[test]
fn sequential_models_cascade_on_inserted_noise() {
    let mut m1 = NoiseModel::new();
    m1.add_noise(
        NoiseChannel::depolarizing(0.1).unwrap(),
        GateCriteria::any().with_kinds([GateKind::H]),
    );

    // m2 matches the noise kind m1 inserts.
    let mut m2 = NoiseModel::new();
    m2.add_noise(
        NoiseChannel::bit_flip(0.2).unwrap(),
        GateCriteria::any().with_kinds([ChannelKind::Depolarizing]),
    );

    let mut circuit = Circuit::with_size("cascade", 1);
    circuit.h(QubitId(0)).unwrap();

    let sequential = m2.apply(&m1.apply(&circuit));
    let names: Vec<_> = sequential.instructions().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["h", "depolarizing", "bit_flip"]);

    // A single concatenated pass walks only the original instructions,
    // so the bit-flip rule finds no depolarizing to match: this is
    // exactly where sequential application diverges.
    let mut concatenated = NoiseModel::new();
    for rule in m1.instructions().iter().chain(m2.instructions()) {
        concatenated.add_instruction(rule.clone());
    }
    let single = concatenated.apply(&circuit);
    let names: Vec<_> = single.instructions().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["h", "depolarizing"]);
}

#[test]
fn original_operations_preserved_in_order() {
    let mut model = NoiseModel::new();
    model
        .add_noise(
            NoiseChannel::depolarizing(0.02).unwrap(),
            GateCriteria::any(),
        )
        .add_noise(
            NoiseChannel::bit_flip(0.01).unwrap(),
            ObservableCriteria::any(),
        );

    let circuit = Circuit::ghz(5).unwrap();
    let noisy = model.apply(&circuit);

    assert_eq!(noisy.num_qubits(), circuit.num_qubits());

    // Stripping inserted noise recovers the original sequence.
    let originals: Vec<_> = noisy
        .instructions()
        .iter()
        .filter(|i| !i.is_noise())
        .cloned()
        .collect();
    assert_eq!(originals.as_slice(), circuit.instructions());
}

#[test]
fn two_qubit_depolarizing_on_cx() {
    let mut model = NoiseModel::new();
    model.add_noise(
        NoiseChannel::two_qubit_depolarizing(0.03).unwrap(),
        GateCriteria::any().with_kinds([GateKind::CX]),
    );

    let circuit = Circuit::bell().unwrap();
    let noisy = model.apply(&circuit);

    let names: Vec<_> = noisy.instructions().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["h", "cx", "two_qubit_depolarizing"]);
    assert_eq!(
        noisy.instructions()[2].qubits,
        vec![QubitId(0), QubitId(1)]
    );
    match &noisy.instructions()[2].kind {
        InstructionKind::Noise { channel, .. } => {
            assert_eq!(channel.kind(), ChannelKind::TwoQubitDepolarizing);
        }
        other => panic!("expected noise, got {other:?}"),
    }
}
