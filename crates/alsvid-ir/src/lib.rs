//! Alsvid Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing
//! symbolic quantum circuits in Alsvid: the shared vocabulary between
//! circuit authors and the noise-model application engine.
//!
//! # Overview
//!
//! A [`Circuit`] is a flat ordered sequence of [`Instruction`]s plus a
//! trailing list of [`ResultDecl`] declarations. Instructions are
//! either gates or noise channels — noise is a first-class operation
//! kind, so a circuit that has already been rewritten by one noise
//! model is an ordinary input to the next.
//!
//! Noise channels live in this crate (rather than in `alsvid-noise`)
//! so that both circuit construction and the rewriting engine can use
//! them without a circular dependency.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing qubits
//! - **Gates**: [`GateKind`], a closed set of parameterless gate kinds
//! - **Observables**: [`ObservableKind`], [`ResultKind`], [`ResultDecl`]
//! - **Channels**: [`NoiseChannel`] value objects with validated
//!   parameters, tagged by [`ChannelKind`]
//! - **Instructions**: [`Instruction`] combining an operation with its
//!   target qubits; [`OpKind`] is the unified matchable kind
//! - **Circuit**: [`Circuit`] fluent builder API
//!
//! # Example: Building a Bell Circuit
//!
//! ```rust
//! use alsvid_ir::{Circuit, ObservableKind, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.sample(ObservableKind::Z, [QubitId(0), QubitId(1)]).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_ops(), 2);
//! ```
//!
//! # Example: Channel Validation
//!
//! ```rust
//! use alsvid_ir::NoiseChannel;
//!
//! let ok = NoiseChannel::depolarizing(0.01);
//! assert!(ok.is_ok());
//!
//! // Probabilities outside [0, 1] are rejected eagerly, never clamped.
//! let bad = NoiseChannel::depolarizing(1.5);
//! assert!(bad.is_err());
//! ```

pub mod channel;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod observable;
pub mod qubit;

pub use channel::{ChannelKind, NoiseChannel};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::GateKind;
pub use instruction::{Instruction, InstructionKind, NoiseSite, OpKind};
pub use observable::{ObservableKind, ResultDecl, ResultKind};
pub use qubit::QubitId;
