//! Structured persistence for noise models.
//!
//! The wire shape is a single root object:
//!
//! ```json
//! {
//!   "instructions": [
//!     {
//!       "noise": { "kind": "depolarizing", "params": { "p": 0.1 }, "qubit_count": 1 },
//!       "criteria": { "kind": "gate", "gates": ["h"], "qubits": [0] }
//!     }
//!   ]
//! }
//! ```
//!
//! `kind` fields are the stable name tags of the closed enumerations;
//! parsing rejects anything outside them. `null` filters encode the
//! "matches all" sentinel; an explicit empty list encodes "matches
//! nothing". Lists are written sorted so equal models serialize
//! identically. Parsing is all-or-nothing and re-validates channel
//! parameters through the [`NoiseChannel`] constructors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use alsvid_ir::{ChannelKind, NoiseChannel, ObservableKind, OpKind, QubitId};

use crate::criteria::{Criteria, GateCriteria, ObservableCriteria};
use crate::error::{ModelError, ModelResult};
use crate::model::{NoiseInstruction, NoiseModel};

#[derive(Serialize, Deserialize)]
struct ModelRepr {
    instructions: Vec<InstructionRepr>,
}

#[derive(Serialize, Deserialize)]
struct InstructionRepr {
    noise: ChannelRepr,
    criteria: CriteriaRepr,
}

#[derive(Serialize, Deserialize)]
struct ChannelRepr {
    kind: String,
    params: BTreeMap<String, f64>,
    qubit_count: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum CriteriaRepr {
    Gate {
        gates: Option<Vec<String>>,
        qubits: Option<Vec<u32>>,
    },
    Observable {
        observables: Option<Vec<String>>,
        qubits: Option<Vec<u32>>,
    },
}

impl NoiseModel {
    /// Serialize this model to its structured form.
    ///
    /// A model serialized and parsed back is structurally identical;
    /// two equal models produce byte-identical structured output.
    pub fn to_structured(&self) -> Value {
        let repr = ModelRepr {
            instructions: self
                .instructions()
                .iter()
                .map(instruction_to_repr)
                .collect(),
        };
        // The repr tree holds only string-keyed maps and finite floats
        // (channel parameters are validated), so conversion cannot fail.
        serde_json::to_value(repr).expect("structured repr is always valid JSON")
    }

    /// Parse a model from its structured form.
    ///
    /// Fails with [`ModelError::Malformed`] on unknown kind tags or
    /// missing/mistyped fields, and with [`ModelError::Channel`] on
    /// out-of-range channel parameters. Never returns a partial model.
    pub fn from_structured(value: &Value) -> ModelResult<NoiseModel> {
        let repr: ModelRepr = serde_json::from_value(value.clone())
            .map_err(|e| ModelError::Malformed(e.to_string()))?;

        let mut model = NoiseModel::new();
        for inst in repr.instructions {
            let channel = channel_from_repr(&inst.noise)?;
            let criteria = criteria_from_repr(inst.criteria)?;
            model.add_instruction(NoiseInstruction::new(channel, criteria));
        }
        Ok(model)
    }
}

fn instruction_to_repr(rule: &NoiseInstruction) -> InstructionRepr {
    InstructionRepr {
        noise: ChannelRepr {
            kind: rule.channel().name().to_string(),
            params: rule
                .channel()
                .params()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            qubit_count: rule.channel().qubit_count(),
        },
        criteria: criteria_to_repr(rule.criteria()),
    }
}

fn criteria_to_repr(criteria: &Criteria) -> CriteriaRepr {
    match criteria {
        Criteria::Gate(c) => CriteriaRepr::Gate {
            gates: c.kinds().map(|set| sorted_names(set.iter().map(OpKind::name))),
            qubits: c.qubits().as_set().map(sorted_qubits),
        },
        Criteria::Observable(c) => CriteriaRepr::Observable {
            observables: c
                .observables()
                .map(|set| sorted_names(set.iter().map(ObservableKind::name))),
            qubits: c.qubits().as_set().map(sorted_qubits),
        },
    }
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = names.map(str::to_string).collect();
    out.sort_unstable();
    out
}

fn sorted_qubits(set: &rustc_hash::FxHashSet<QubitId>) -> Vec<u32> {
    let mut out: Vec<u32> = set.iter().map(|q| q.0).collect();
    out.sort_unstable();
    out
}

fn channel_from_repr(repr: &ChannelRepr) -> ModelResult<NoiseChannel> {
    let kind = ChannelKind::from_name(&repr.kind)
        .ok_or_else(|| ModelError::Malformed(format!("unknown channel kind '{}'", repr.kind)))?;

    if repr.qubit_count != kind.qubit_count() {
        return Err(ModelError::Malformed(format!(
            "channel '{}' declares qubit_count {}, expected {}",
            repr.kind,
            repr.qubit_count,
            kind.qubit_count()
        )));
    }

    let param = |name: &str| -> ModelResult<f64> {
        repr.params.get(name).copied().ok_or_else(|| {
            ModelError::Malformed(format!(
                "channel '{}' is missing parameter '{name}'",
                repr.kind
            ))
        })
    };

    let channel = match kind {
        ChannelKind::Depolarizing => NoiseChannel::depolarizing(param("p")?)?,
        ChannelKind::TwoQubitDepolarizing => NoiseChannel::two_qubit_depolarizing(param("p")?)?,
        ChannelKind::BitFlip => NoiseChannel::bit_flip(param("p")?)?,
        ChannelKind::PhaseFlip => NoiseChannel::phase_flip(param("p")?)?,
        ChannelKind::PauliChannel => {
            NoiseChannel::pauli_channel(param("px")?, param("py")?, param("pz")?)?
        }
        ChannelKind::AmplitudeDamping => NoiseChannel::amplitude_damping(param("gamma")?)?,
        ChannelKind::PhaseDamping => NoiseChannel::phase_damping(param("gamma")?)?,
    };
    Ok(channel)
}

fn criteria_from_repr(repr: CriteriaRepr) -> ModelResult<Criteria> {
    match repr {
        CriteriaRepr::Gate { gates, qubits } => {
            let mut criteria = GateCriteria::any();
            if let Some(names) = gates {
                let kinds = names
                    .iter()
                    .map(|name| {
                        OpKind::from_name(name).ok_or_else(|| {
                            ModelError::Malformed(format!("unknown operation kind '{name}'"))
                        })
                    })
                    .collect::<ModelResult<Vec<_>>>()?;
                criteria = criteria.with_kinds(kinds);
            }
            if let Some(ids) = qubits {
                criteria = criteria.with_qubits(ids.into_iter().map(QubitId));
            }
            Ok(Criteria::Gate(criteria))
        }
        CriteriaRepr::Observable { observables, qubits } => {
            let mut criteria = ObservableCriteria::any();
            if let Some(names) = observables {
                let kinds = names
                    .iter()
                    .map(|name| {
                        ObservableKind::from_name(name).ok_or_else(|| {
                            ModelError::Malformed(format!("unknown observable kind '{name}'"))
                        })
                    })
                    .collect::<ModelResult<Vec<_>>>()?;
                criteria = criteria.with_observables(kinds);
            }
            if let Some(ids) = qubits {
                criteria = criteria.with_qubits(ids.into_iter().map(QubitId));
            }
            Ok(Criteria::Observable(criteria))
        }
    }
}
