//! Placement criteria: predicates deciding where a noise rule applies.
//!
//! Criteria come in two closed variants: [`GateCriteria`] matched
//! against circuit instructions, and [`ObservableCriteria`] matched
//! against result declarations. The two families never cross — a gate
//! criteria can never match a result declaration and vice versa.
//!
//! An absent filter (`None` / [`QubitFilter::All`]) means "match all";
//! an explicit empty set means "match nothing". The two are never
//! conflated.

use rustc_hash::FxHashSet;
use std::fmt;

use alsvid_ir::{Instruction, ObservableKind, OpKind, QubitId, ResultDecl};

/// Which qubits a criteria applies to.
///
/// `All` is the "match everything" sentinel; `Only` restricts to an
/// explicit set, and an empty set matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QubitFilter {
    /// Applies to every qubit.
    #[default]
    All,
    /// Applies only to qubits in the set.
    Only(FxHashSet<QubitId>),
}

impl QubitFilter {
    /// Build a restricted filter from a list of qubits.
    pub fn only(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        QubitFilter::Only(qubits.into_iter().collect())
    }

    /// Check whether every target qubit is covered by this filter.
    ///
    /// Multi-qubit targets use all-targets containment: a filter
    /// restricted to {0} does not cover a two-qubit operation on
    /// {0, 1}. Partial overlap never matches.
    pub fn covers(&self, targets: &[QubitId]) -> bool {
        match self {
            QubitFilter::All => true,
            QubitFilter::Only(set) => targets.iter().all(|q| set.contains(q)),
        }
    }

    /// Check whether this filter shares any qubit with the given set.
    ///
    /// `All` intersects everything: a rule that applies to all qubits
    /// is always relevant to any qubit restriction.
    pub fn intersects(&self, qubits: &FxHashSet<QubitId>) -> bool {
        match self {
            QubitFilter::All => true,
            QubitFilter::Only(set) => set.iter().any(|q| qubits.contains(q)),
        }
    }

    /// The explicit qubit set, if restricted.
    pub fn as_set(&self) -> Option<&FxHashSet<QubitId>> {
        match self {
            QubitFilter::All => None,
            QubitFilter::Only(set) => Some(set),
        }
    }
}

impl fmt::Display for QubitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitFilter::All => write!(f, "all"),
            QubitFilter::Only(set) => {
                let mut sorted: Vec<_> = set.iter().copied().collect();
                sorted.sort();
                write!(f, "[")?;
                for (i, q) in sorted.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{q}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Criteria matched against circuit instructions.
///
/// Matches when the instruction's operation kind is in the kind filter
/// (or the filter is absent) and every target qubit is covered by the
/// qubit filter. The kind filter ranges over [`OpKind`], so it can
/// name noise channel kinds as well as gates — noise instructions
/// inserted by an earlier model are matchable like any other
/// operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GateCriteria {
    /// Operation kinds to match; `None` matches all.
    kinds: Option<FxHashSet<OpKind>>,
    /// Qubits to match.
    qubits: QubitFilter,
}

impl GateCriteria {
    /// Criteria matching every instruction on every qubit.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict to the given operation kinds.
    #[must_use]
    pub fn with_kinds<K>(mut self, kinds: impl IntoIterator<Item = K>) -> Self
    where
        K: Into<OpKind>,
    {
        self.kinds = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to the given qubits.
    #[must_use]
    pub fn with_qubits(mut self, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        self.qubits = QubitFilter::only(qubits);
        self
    }

    /// The kind filter, if restricted.
    pub fn kinds(&self) -> Option<&FxHashSet<OpKind>> {
        self.kinds.as_ref()
    }

    /// The qubit filter.
    pub fn qubits(&self) -> &QubitFilter {
        &self.qubits
    }

    /// Check whether an instruction satisfies this criteria.
    pub fn matches(&self, inst: &Instruction) -> bool {
        let kind_ok = match &self.kinds {
            None => true,
            Some(set) => set.contains(&inst.op_kind()),
        };
        kind_ok && self.qubits.covers(&inst.qubits)
    }
}

impl fmt::Display for GateCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gates=")?;
        fmt_kind_set(f, self.kinds.as_ref().map(|s| s.iter().map(OpKind::name)))?;
        write!(f, ", qubits={}", self.qubits)
    }
}

/// Criteria matched against result declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservableCriteria {
    /// Observable kinds to match; `None` matches all.
    observables: Option<FxHashSet<ObservableKind>>,
    /// Qubits to match.
    qubits: QubitFilter,
}

impl ObservableCriteria {
    /// Criteria matching every result declaration.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict to the given observable kinds.
    #[must_use]
    pub fn with_observables(mut self, observables: impl IntoIterator<Item = ObservableKind>) -> Self {
        self.observables = Some(observables.into_iter().collect());
        self
    }

    /// Restrict to the given qubits.
    #[must_use]
    pub fn with_qubits(mut self, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        self.qubits = QubitFilter::only(qubits);
        self
    }

    /// The observable filter, if restricted.
    pub fn observables(&self) -> Option<&FxHashSet<ObservableKind>> {
        self.observables.as_ref()
    }

    /// The qubit filter.
    pub fn qubits(&self) -> &QubitFilter {
        &self.qubits
    }

    /// Check whether a result declaration satisfies this criteria.
    pub fn matches(&self, decl: &ResultDecl) -> bool {
        let obs_ok = match &self.observables {
            None => true,
            Some(set) => set.contains(&decl.observable),
        };
        obs_ok && self.qubits.covers(&decl.qubits)
    }
}

impl fmt::Display for ObservableCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observables=")?;
        fmt_kind_set(
            f,
            self.observables
                .as_ref()
                .map(|s| s.iter().map(ObservableKind::name)),
        )?;
        write!(f, ", qubits={}", self.qubits)
    }
}

/// A placement criteria, one of the two closed variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// Matched against circuit instructions.
    Gate(GateCriteria),
    /// Matched against result declarations.
    Observable(ObservableCriteria),
}

impl Criteria {
    /// Check whether an instruction satisfies this criteria.
    ///
    /// Observable criteria never match instructions.
    pub fn matches_instruction(&self, inst: &Instruction) -> bool {
        match self {
            Criteria::Gate(c) => c.matches(inst),
            Criteria::Observable(_) => false,
        }
    }

    /// Check whether a result declaration satisfies this criteria.
    ///
    /// Gate criteria never match result declarations.
    pub fn matches_result(&self, decl: &ResultDecl) -> bool {
        match self {
            Criteria::Gate(_) => false,
            Criteria::Observable(c) => c.matches(decl),
        }
    }

    /// True if this is a gate criteria.
    pub fn is_gate(&self) -> bool {
        matches!(self, Criteria::Gate(_))
    }

    /// True if this is an observable criteria.
    pub fn is_observable(&self) -> bool {
        matches!(self, Criteria::Observable(_))
    }

    /// The qubit filter of either variant.
    pub fn qubit_filter(&self) -> &QubitFilter {
        match self {
            Criteria::Gate(c) => c.qubits(),
            Criteria::Observable(c) => c.qubits(),
        }
    }
}

impl From<GateCriteria> for Criteria {
    fn from(c: GateCriteria) -> Self {
        Criteria::Gate(c)
    }
}

impl From<ObservableCriteria> for Criteria {
    fn from(c: ObservableCriteria) -> Self {
        Criteria::Observable(c)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::Gate(c) => write!(f, "{c}"),
            Criteria::Observable(c) => write!(f, "{c}"),
        }
    }
}

/// Render an optional set of kind names as `all` or a sorted list.
fn fmt_kind_set<'a>(
    f: &mut fmt::Formatter<'_>,
    names: Option<impl Iterator<Item = &'a str>>,
) -> fmt::Result {
    match names {
        None => write!(f, "all"),
        Some(iter) => {
            let mut sorted: Vec<_> = iter.collect();
            sorted.sort_unstable();
            write!(f, "[")?;
            for (i, name) in sorted.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{name}")?;
            }
            write!(f, "]")
        }
    }
}
