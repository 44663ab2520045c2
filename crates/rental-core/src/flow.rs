// Rust guideline compliant 2026-10-18

//! Step gating for the rental checkout sequence.
//!
//! The gate tracks progress through a fixed linear sequence:
//!
//! - item-detail → rental-period → review-order → payment → receipt
//!
//! A step becomes accessible once the step before it is completed. Going
//! back to any earlier step is always allowed by `can_navigate_to_step`,
//! while `can_go_back` only checks the immediately preceding step's flag.
//! Both rules are kept as they are; callers rely on them separately.

use crate::models::{RentalStep, RentalStepId};
use tracing::debug;

/// In-memory, single-session checkout state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalFlowGate {
    steps: Vec<RentalStep>,
    current: RentalStepId,
}

impl Default for RentalFlowGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RentalFlowGate {
    /// Creates a gate in its initial state: only `item-detail` is accessible,
    /// nothing is completed, and the pointer sits on `item-detail`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: RentalStepId::ALL.into_iter().map(RentalStep::initial).collect(),
            current: RentalStepId::ItemDetail,
        }
    }

    /// All steps in sequence order.
    #[must_use]
    pub fn steps(&self) -> &[RentalStep] {
        &self.steps
    }

    /// Progress flags for one step.
    #[must_use]
    pub fn step(&self, id: RentalStepId) -> &RentalStep {
        &self.steps[id.index()]
    }

    /// The step the user is logically on.
    #[must_use]
    pub fn current_step(&self) -> RentalStepId {
        self.current
    }

    /// Moves the current-step pointer.
    ///
    /// The gate does not check the move; callers ask `can_navigate_to_step`
    /// (or `can_go_back`) first.
    pub fn set_current_step(&mut self, id: RentalStepId) {
        debug!(from = %self.current, to = %id, "current rental step changed");
        self.current = id;
    }

    /// Sequence position of the current step.
    ///
    /// The pointer is typed, so it always names a step in the sequence.
    #[must_use]
    pub fn current_step_index(&self) -> usize {
        self.current.index()
    }

    /// Sequence position of a step given by its textual id.
    ///
    /// Returns `None` for ids that do not name a checkout step.
    #[must_use]
    pub fn step_index(&self, id: &str) -> Option<usize> {
        id.parse::<RentalStepId>().ok().map(RentalStepId::index)
    }

    /// Returns true if the step has been completed in this session.
    #[must_use]
    pub fn is_completed(&self, id: RentalStepId) -> bool {
        self.step(id).is_completed
    }

    /// Returns true if the step has been unlocked.
    #[must_use]
    pub fn is_accessible(&self, id: RentalStepId) -> bool {
        self.step(id).is_accessible
    }

    /// Checks whether the user may move to `id`.
    ///
    /// Allowed when `id` is the current step, when it is accessible, or when
    /// it lies anywhere before the current step.
    #[must_use]
    pub fn can_navigate_to_step(&self, id: RentalStepId) -> bool {
        id == self.current || self.is_accessible(id) || id.index() < self.current_step_index()
    }

    /// Same as `can_navigate_to_step` for a textual id; unknown ids are never navigable.
    #[must_use]
    pub fn can_navigate_to_named(&self, id: &str) -> bool {
        id.parse::<RentalStepId>()
            .map(|step| self.can_navigate_to_step(step))
            .unwrap_or(false)
    }

    /// Checks whether the user may step back once.
    ///
    /// True only if a previous step exists and that step is accessible.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.current
            .previous()
            .is_some_and(|previous| self.is_accessible(previous))
    }

    /// Marks `id` completed and unlocks the step after it.
    ///
    /// Idempotent. Completing the terminal step unlocks nothing.
    pub fn mark_step_completed(&mut self, id: RentalStepId) {
        let step = &mut self.steps[id.index()];
        if !step.is_completed {
            debug!(step = %id, "rental step completed");
        }
        step.is_completed = true;

        if let Some(next) = id.next() {
            self.steps[next.index()].is_accessible = true;
        }
    }

    /// Returns the gate to its initial state, discarding all progress.
    pub fn reset_flow(&mut self) {
        debug!("rental flow reset");
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let gate = RentalFlowGate::new();
        assert_eq!(gate.current_step(), RentalStepId::ItemDetail);
        assert_eq!(gate.current_step_index(), 0);
        assert!(gate.is_accessible(RentalStepId::ItemDetail));
        assert!(!gate.is_accessible(RentalStepId::RentalPeriod));
        assert!(gate.steps().iter().all(|step| !step.is_completed));
    }

    #[test]
    fn test_completing_terminal_step_is_noop_for_accessibility() {
        let mut gate = RentalFlowGate::new();
        gate.mark_step_completed(RentalStepId::Receipt);
        assert!(gate.is_completed(RentalStepId::Receipt));
        assert!(!gate.is_accessible(RentalStepId::Receipt));
        assert!(!gate.is_accessible(RentalStepId::Payment));
    }

    #[test]
    fn test_step_index_unknown() {
        let gate = RentalFlowGate::new();
        assert_eq!(gate.step_index("payment"), Some(3));
        assert_eq!(gate.step_index("shipping"), None);
        assert!(!gate.can_navigate_to_named("shipping"));
        assert!(gate.can_navigate_to_named("item-detail"));
    }
}
