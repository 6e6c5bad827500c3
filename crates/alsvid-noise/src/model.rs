//! The noise model: an ordered list of (channel, criteria) rules.

use rustc_hash::FxHashSet;
use std::fmt;

use alsvid_ir::{ChannelKind, Circuit, NoiseChannel, ObservableKind, OpKind, QubitId};

use crate::criteria::Criteria;
use crate::rewrite;

/// A single rule: a channel and the criteria deciding where it lands.
///
/// Equality is structural. A model may hold two identical rules — they
/// fire independently, composing cascading noise.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseInstruction {
    channel: NoiseChannel,
    criteria: Criteria,
}

impl NoiseInstruction {
    /// Create a new rule.
    pub fn new(channel: NoiseChannel, criteria: impl Into<Criteria>) -> Self {
        Self {
            channel,
            criteria: criteria.into(),
        }
    }

    /// The noise channel this rule inserts.
    pub fn channel(&self) -> &NoiseChannel {
        &self.channel
    }

    /// The placement criteria of this rule.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }
}

impl fmt::Display for NoiseInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.channel, self.criteria)
    }
}

/// An ordered collection of noise rules.
///
/// Insertion order is application order: when several rules match the
/// same operation, the first-added rule's noise is inserted first,
/// closest to the trigger. Duplicate rules are intentionally retained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoiseModel {
    instructions: Vec<NoiseInstruction>,
}

impl NoiseModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; returns the model for chaining.
    ///
    /// No deduplication is performed: adding the same (channel,
    /// criteria) pair twice yields two rules that both fire.
    pub fn add_noise(
        &mut self,
        channel: NoiseChannel,
        criteria: impl Into<Criteria>,
    ) -> &mut Self {
        self.instructions
            .push(NoiseInstruction::new(channel, criteria));
        self
    }

    /// Append an already-built rule.
    pub fn add_instruction(&mut self, instruction: NoiseInstruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    /// The rules, in insertion order.
    pub fn instructions(&self) -> &[NoiseInstruction] {
        &self.instructions
    }

    /// Number of rules in the model.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if the model has no rules.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Produce a new model with only the rules passing `filter`.
    ///
    /// The receiver is never mutated. Filters are conjunctive and
    /// independent; an unset filter dimension passes everything.
    pub fn from_filter(&self, filter: &RuleFilter) -> NoiseModel {
        NoiseModel {
            instructions: self
                .instructions
                .iter()
                .filter(|rule| filter.keeps(rule))
                .cloned()
                .collect(),
        }
    }

    /// Rewrite `circuit`, interleaving the noise this model describes.
    ///
    /// Pure: neither the model nor the input circuit is mutated; a new
    /// circuit is returned.
    pub fn apply(&self, circuit: &Circuit) -> Circuit {
        rewrite::apply_model(self, circuit)
    }
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gate_rules: Vec<_> = self
            .instructions
            .iter()
            .filter(|r| r.criteria.is_gate())
            .collect();
        let readout_rules: Vec<_> = self
            .instructions
            .iter()
            .filter(|r| r.criteria.is_observable())
            .collect();

        let mut wrote = false;
        if !gate_rules.is_empty() {
            writeln!(f, "Gate Noise:")?;
            for rule in gate_rules {
                writeln!(f, "  {rule}")?;
            }
            wrote = true;
        }
        if !readout_rules.is_empty() {
            if wrote {
                writeln!(f)?;
            }
            writeln!(f, "Readout Noise:")?;
            for rule in readout_rules {
                writeln!(f, "  {rule}")?;
            }
        }
        Ok(())
    }
}

/// Conjunctive filter over the rules of a model.
///
/// Built incrementally; every dimension left unset passes all rules.
/// A rule whose criteria applies to all qubits is always relevant to a
/// qubit restriction, so it passes any qubit filter; likewise a gate
/// filter never rejects observable rules, and vice versa.
#[derive(Debug, Clone, Default)]
pub struct RuleFilter {
    qubits: Option<FxHashSet<QubitId>>,
    kinds: Option<FxHashSet<OpKind>>,
    observables: Option<FxHashSet<ObservableKind>>,
    channel: Option<ChannelKind>,
}

impl RuleFilter {
    /// Create a filter that passes every rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rules relevant to this qubit. May be called repeatedly to
    /// widen the set.
    #[must_use]
    pub fn with_qubit(mut self, qubit: QubitId) -> Self {
        self.qubits.get_or_insert_with(FxHashSet::default).insert(qubit);
        self
    }

    /// Keep gate rules relevant to this operation kind.
    #[must_use]
    pub fn with_gate_kind(mut self, kind: impl Into<OpKind>) -> Self {
        self.kinds
            .get_or_insert_with(FxHashSet::default)
            .insert(kind.into());
        self
    }

    /// Keep observable rules relevant to this observable.
    #[must_use]
    pub fn with_observable(mut self, observable: ObservableKind) -> Self {
        self.observables
            .get_or_insert_with(FxHashSet::default)
            .insert(observable);
        self
    }

    /// Keep only rules whose channel is exactly this kind.
    #[must_use]
    pub fn with_channel(mut self, kind: ChannelKind) -> Self {
        self.channel = Some(kind);
        self
    }

    fn keeps(&self, rule: &NoiseInstruction) -> bool {
        if let Some(kind) = self.channel {
            if rule.channel.kind() != kind {
                return false;
            }
        }

        if let Some(qubits) = &self.qubits {
            if !rule.criteria.qubit_filter().intersects(qubits) {
                return false;
            }
        }

        if let Some(kinds) = &self.kinds {
            if let Criteria::Gate(c) = &rule.criteria {
                let relevant = match c.kinds() {
                    None => true,
                    Some(set) => set.iter().any(|k| kinds.contains(k)),
                };
                if !relevant {
                    return false;
                }
            }
        }

        if let Some(observables) = &self.observables {
            if let Criteria::Observable(c) = &rule.criteria {
                let relevant = match c.observables() {
                    None => true,
                    Some(set) => set.iter().any(|o| observables.contains(o)),
                };
                if !relevant {
                    return false;
                }
            }
        }

        true
    }
}
