use crate::{
    composition::model::ResolvedTransition, effects::transitions::TransitionKind,
    foundation::core::Seconds,
};

/// Ordered set of transitions keyed by `(from, to)`.
///
/// Two insert policies coexist on purpose: the movie-level registry keeps the first declaration
/// for a pair ([`insert_if_absent`](Self::insert_if_absent)) while a scene's `transition_to`
/// keeps the last ([`upsert`](Self::upsert)).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionTable {
    entries: Vec<ResolvedTransition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the pair is already present. Returns `true` when inserted.
    pub fn insert_if_absent(&mut self, transition: ResolvedTransition) -> bool {
        if self.get(&transition.from, &transition.to).is_some() {
            return false;
        }
        self.entries.push(transition);
        true
    }

    /// Insert, replacing an existing entry for the same pair in place.
    pub fn upsert(&mut self, transition: ResolvedTransition) {
        match self
            .entries
            .iter_mut()
            .find(|t| t.from == transition.from && t.to == transition.to)
        {
            Some(slot) => *slot = transition,
            None => self.entries.push(transition),
        }
    }

    pub fn get(&self, from: &str, to: &str) -> Option<&ResolvedTransition> {
        self.entries.iter().find(|t| t.from == from && t.to == to)
    }

    /// First transition leaving `from` towards `to`, ignoring its kind.
    pub fn duration_between(&self, from: &str, to: &str) -> Option<Seconds> {
        self.get(from, to).map(|t| t.duration)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedTransition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<ResolvedTransition> {
        self.entries
    }
}

/// Build a transition record.
pub fn transition(
    from: impl Into<String>,
    to: impl Into<String>,
    duration: Seconds,
    kind: TransitionKind,
) -> ResolvedTransition {
    ResolvedTransition {
        from: from.into(),
        to: to.into(),
        duration,
        kind,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/transitions.rs"]
mod tests;
