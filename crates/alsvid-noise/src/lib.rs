//! Alsvid Noise-Model Application Engine
//!
//! This crate turns a list of (noise channel, placement criteria)
//! rules into a deterministic circuit rewrite: given a symbolic
//! circuit, [`NoiseModel::apply`] produces a new circuit with noise
//! instructions interleaved at the correct positions, leaving the
//! original operations and their order untouched.
//!
//! # Architecture
//!
//! ```text
//! NoiseModel (ordered rules)
//!       │
//!       ▼
//! ┌──────────────┐    per instruction: GateCriteria.matches?
//! │   rewriter   │ ◄──
//! └──────────────┘    per declaration: ObservableCriteria.matches?
//!       │
//!       ▼
//! Output Circuit (original ops + interleaved noise)
//! ```
//!
//! - **Criteria** ([`GateCriteria`], [`ObservableCriteria`]): pure
//!   predicates deciding whether a rule applies to an instruction or a
//!   result declaration.
//! - **Model** ([`NoiseModel`]): the ordered rule list; supports
//!   append ([`NoiseModel::add_noise`]), filtering
//!   ([`NoiseModel::from_filter`]), application, and structured
//!   persistence ([`NoiseModel::to_structured`] /
//!   [`NoiseModel::from_structured`]).
//! - **Rewriter**: walks the circuit once; rule order is application
//!   order, so the first-added rule's noise lands closest to its
//!   trigger.
//!
//! The engine is purely functional: `apply` and `from_filter` never
//! mutate their receiver or arguments, so a built model can be shared
//! freely across threads.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{Circuit, GateKind, NoiseChannel, QubitId};
//! use alsvid_noise::{GateCriteria, NoiseModel};
//!
//! let mut model = NoiseModel::new();
//! model.add_noise(
//!     NoiseChannel::depolarizing(0.01).unwrap(),
//!     GateCriteria::any().with_kinds([GateKind::H]),
//! );
//!
//! let mut circuit = Circuit::with_size("demo", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let noisy = model.apply(&circuit);
//! // H picked up a depolarizing channel; CX did not.
//! assert_eq!(noisy.num_ops(), 3);
//! assert_eq!(circuit.num_ops(), 2); // input untouched
//! ```

pub mod criteria;
pub mod error;
pub mod model;
mod rewrite;
mod serialize;

pub use criteria::{Criteria, GateCriteria, ObservableCriteria, QubitFilter};
pub use error::{ModelError, ModelResult};
pub use model::{NoiseInstruction, NoiseModel, RuleFilter};
