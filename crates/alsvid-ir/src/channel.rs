//! Noise channel value types.
//!
//! A [`NoiseChannel`] is an inert description of a physical noise
//! process: a kind, a qubit arity, and validated numeric parameters.
//! Constructors fail fast on out-of-range parameters — a channel value
//! that exists is always valid. What the channel *does* to a state
//! (its Kraus operators) is a simulator concern and lives elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// A noise channel model.
///
/// Covers the common single-qubit channels plus the two-qubit
/// depolarizing channel. The vocabulary is closed: criteria matching
/// and serialization both dispatch on [`ChannelKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoiseChannel {
    /// Depolarizing channel: with probability `p`, replaces the state
    /// with the maximally mixed state.
    Depolarizing {
        /// Error probability (0.0 to 1.0).
        p: f64,
    },

    /// Two-qubit depolarizing channel acting on a qubit pair.
    TwoQubitDepolarizing {
        /// Error probability (0.0 to 1.0).
        p: f64,
    },

    /// Bit-flip channel: flips |0⟩ ↔ |1⟩ with probability `p`.
    BitFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },

    /// Phase-flip channel: applies Z with probability `p`.
    PhaseFlip {
        /// Flip probability (0.0 to 1.0).
        p: f64,
    },

    /// General Pauli channel: applies X, Y, Z with independent
    /// probabilities.
    PauliChannel {
        /// X error probability.
        px: f64,
        /// Y error probability.
        py: f64,
        /// Z error probability.
        pz: f64,
    },

    /// Amplitude damping: models energy relaxation (T1 decay).
    AmplitudeDamping {
        /// Damping parameter (0.0 to 1.0).
        gamma: f64,
    },

    /// Phase damping: models dephasing (T2 decay without energy loss).
    PhaseDamping {
        /// Dephasing parameter (0.0 to 1.0).
        gamma: f64,
    },
}

/// Checks a probability-like parameter, failing fast on out-of-range.
fn check_unit(channel: &'static str, param: &'static str, value: f64) -> IrResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(IrError::InvalidParameter {
            channel,
            param,
            value,
            constraint: "must be in [0, 1]",
        })
    }
}

impl NoiseChannel {
    /// Create a depolarizing channel.
    pub fn depolarizing(p: f64) -> IrResult<Self> {
        Ok(NoiseChannel::Depolarizing {
            p: check_unit("depolarizing", "p", p)?,
        })
    }

    /// Create a two-qubit depolarizing channel.
    pub fn two_qubit_depolarizing(p: f64) -> IrResult<Self> {
        Ok(NoiseChannel::TwoQubitDepolarizing {
            p: check_unit("two_qubit_depolarizing", "p", p)?,
        })
    }

    /// Create a bit-flip channel.
    pub fn bit_flip(p: f64) -> IrResult<Self> {
        Ok(NoiseChannel::BitFlip {
            p: check_unit("bit_flip", "p", p)?,
        })
    }

    /// Create a phase-flip channel.
    pub fn phase_flip(p: f64) -> IrResult<Self> {
        Ok(NoiseChannel::PhaseFlip {
            p: check_unit("phase_flip", "p", p)?,
        })
    }

    /// Create a general Pauli channel.
    ///
    /// Each probability must lie in [0, 1] and their sum must not
    /// exceed 1.
    pub fn pauli_channel(px: f64, py: f64, pz: f64) -> IrResult<Self> {
        let px = check_unit("pauli_channel", "px", px)?;
        let py = check_unit("pauli_channel", "py", py)?;
        let pz = check_unit("pauli_channel", "pz", pz)?;
        let total = px + py + pz;
        if total > 1.0 {
            return Err(IrError::InvalidParameter {
                channel: "pauli_channel",
                param: "px+py+pz",
                value: total,
                constraint: "must not exceed 1",
            });
        }
        Ok(NoiseChannel::PauliChannel { px, py, pz })
    }

    /// Create an amplitude damping channel.
    pub fn amplitude_damping(gamma: f64) -> IrResult<Self> {
        Ok(NoiseChannel::AmplitudeDamping {
            gamma: check_unit("amplitude_damping", "gamma", gamma)?,
        })
    }

    /// Create a phase damping channel.
    pub fn phase_damping(gamma: f64) -> IrResult<Self> {
        Ok(NoiseChannel::PhaseDamping {
            gamma: check_unit("phase_damping", "gamma", gamma)?,
        })
    }

    /// Get the kind tag of this channel.
    #[inline]
    pub fn kind(&self) -> ChannelKind {
        match self {
            NoiseChannel::Depolarizing { .. } => ChannelKind::Depolarizing,
            NoiseChannel::TwoQubitDepolarizing { .. } => ChannelKind::TwoQubitDepolarizing,
            NoiseChannel::BitFlip { .. } => ChannelKind::BitFlip,
            NoiseChannel::PhaseFlip { .. } => ChannelKind::PhaseFlip,
            NoiseChannel::PauliChannel { .. } => ChannelKind::PauliChannel,
            NoiseChannel::AmplitudeDamping { .. } => ChannelKind::AmplitudeDamping,
            NoiseChannel::PhaseDamping { .. } => ChannelKind::PhaseDamping,
        }
    }

    /// Get the stable name of this channel.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Get the number of qubits this channel acts on.
    #[inline]
    pub fn qubit_count(&self) -> u32 {
        self.kind().qubit_count()
    }

    /// Get the named parameters of this channel, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        match self {
            NoiseChannel::Depolarizing { p }
            | NoiseChannel::TwoQubitDepolarizing { p }
            | NoiseChannel::BitFlip { p }
            | NoiseChannel::PhaseFlip { p } => vec![("p", *p)],
            NoiseChannel::PauliChannel { px, py, pz } => {
                vec![("px", *px), ("py", *py), ("pz", *pz)]
            }
            NoiseChannel::AmplitudeDamping { gamma } | NoiseChannel::PhaseDamping { gamma } => {
                vec![("gamma", *gamma)]
            }
        }
    }
}

impl fmt::Display for NoiseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseChannel::Depolarizing { p } => write!(f, "depolarizing(p={p:.4})"),
            NoiseChannel::TwoQubitDepolarizing { p } => {
                write!(f, "two_qubit_depolarizing(p={p:.4})")
            }
            NoiseChannel::BitFlip { p } => write!(f, "bit_flip(p={p:.4})"),
            NoiseChannel::PhaseFlip { p } => write!(f, "phase_flip(p={p:.4})"),
            NoiseChannel::PauliChannel { px, py, pz } => {
                write!(f, "pauli_channel(px={px:.4}, py={py:.4}, pz={pz:.4})")
            }
            NoiseChannel::AmplitudeDamping { gamma } => {
                write!(f, "amplitude_damping(γ={gamma:.4})")
            }
            NoiseChannel::PhaseDamping { gamma } => write!(f, "phase_damping(γ={gamma:.4})"),
        }
    }
}

/// The closed set of noise channel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Single-qubit depolarizing channel.
    Depolarizing,
    /// Two-qubit depolarizing channel.
    TwoQubitDepolarizing,
    /// Bit-flip channel.
    BitFlip,
    /// Phase-flip channel.
    PhaseFlip,
    /// General Pauli channel.
    PauliChannel,
    /// Amplitude damping channel.
    AmplitudeDamping,
    /// Phase damping channel.
    PhaseDamping,
}

impl ChannelKind {
    /// Get the stable name tag of this kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ChannelKind::Depolarizing => "depolarizing",
            ChannelKind::TwoQubitDepolarizing => "two_qubit_depolarizing",
            ChannelKind::BitFlip => "bit_flip",
            ChannelKind::PhaseFlip => "phase_flip",
            ChannelKind::PauliChannel => "pauli_channel",
            ChannelKind::AmplitudeDamping => "amplitude_damping",
            ChannelKind::PhaseDamping => "phase_damping",
        }
    }

    /// Look up a channel kind by its stable name tag.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "depolarizing" => ChannelKind::Depolarizing,
            "two_qubit_depolarizing" => ChannelKind::TwoQubitDepolarizing,
            "bit_flip" => ChannelKind::BitFlip,
            "phase_flip" => ChannelKind::PhaseFlip,
            "pauli_channel" => ChannelKind::PauliChannel,
            "amplitude_damping" => ChannelKind::AmplitudeDamping,
            "phase_damping" => ChannelKind::PhaseDamping,
            _ => return None,
        })
    }

    /// Get the number of qubits a channel of this kind acts on.
    #[inline]
    pub fn qubit_count(&self) -> u32 {
        match self {
            ChannelKind::TwoQubitDepolarizing => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
