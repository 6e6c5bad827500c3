//! Circuit instructions combining operations with their targets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::channel::{ChannelKind, NoiseChannel};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// Where an inserted noise channel acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseSite {
    /// Noise following a gate operation.
    Gate,
    /// Noise applied just before readout.
    Readout,
}

impl fmt::Display for NoiseSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseSite::Gate => write!(f, "gate"),
            NoiseSite::Readout => write!(f, "readout"),
        }
    }
}

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A quantum gate operation.
    Gate(GateKind),
    /// A noise channel operation.
    Noise {
        /// The channel describing the physical process.
        channel: NoiseChannel,
        /// Whether the channel follows a gate or precedes readout.
        site: NoiseSite,
    },
}

/// Identifies the kind of an operation for criteria matching.
///
/// A gate criteria's kind filter can name either a gate or a noise
/// channel kind. This is what lets a model applied to an already-noisy
/// circuit match the noise instructions a previous model inserted —
/// they are ordinary operations, not special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// A gate operation kind.
    Gate(GateKind),
    /// A noise channel kind.
    Noise(ChannelKind),
}

impl OpKind {
    /// Get the stable name of this operation kind.
    ///
    /// Gate and channel name vocabularies are disjoint, so the name
    /// alone identifies the kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            OpKind::Gate(g) => g.name(),
            OpKind::Noise(c) => c.name(),
        }
    }

    /// Look up an operation kind by name, trying gates first.
    pub fn from_name(name: &str) -> Option<Self> {
        GateKind::from_name(name)
            .map(OpKind::Gate)
            .or_else(|| ChannelKind::from_name(name).map(OpKind::Noise))
    }
}

impl From<GateKind> for OpKind {
    fn from(gate: GateKind) -> Self {
        OpKind::Gate(gate)
    }
}

impl From<ChannelKind> for OpKind {
    fn from(kind: ChannelKind) -> Self {
        OpKind::Noise(kind)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A complete instruction with target qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on, in target order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: GateKind, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: GateKind, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: GateKind, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a noise channel instruction.
    pub fn noise(
        channel: NoiseChannel,
        site: NoiseSite,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> Self {
        Self {
            kind: InstructionKind::Noise { channel, site },
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a noise channel instruction.
    pub fn is_noise(&self) -> bool {
        matches!(self.kind, InstructionKind::Noise { .. })
    }

    /// Check if this is a readout-site noise channel.
    pub fn is_readout_noise(&self) -> bool {
        matches!(
            self.kind,
            InstructionKind::Noise {
                site: NoiseSite::Readout,
                ..
            }
        )
    }

    /// Get the gate kind if this is a gate instruction.
    pub fn as_gate(&self) -> Option<GateKind> {
        match self.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Get the noise channel if this is a noise instruction.
    pub fn as_noise(&self) -> Option<&NoiseChannel> {
        match &self.kind {
            InstructionKind::Noise { channel, .. } => Some(channel),
            _ => None,
        }
    }

    /// Get the matchable operation kind of this instruction.
    #[inline]
    pub fn op_kind(&self) -> OpKind {
        match &self.kind {
            InstructionKind::Gate(g) => OpKind::Gate(*g),
            InstructionKind::Noise { channel, .. } => OpKind::Noise(channel.kind()),
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        self.op_kind().name()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InstructionKind::Gate(g) => write!(f, "{g}")?,
            InstructionKind::Noise { channel, site } => write!(f, "{channel}[{site}]")?,
        }
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
