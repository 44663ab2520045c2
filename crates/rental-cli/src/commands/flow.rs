// Rust guideline compliant 2026-10-18

//! Implementation of the `rentals flow` command.
//!
//! Replays step completions on a fresh gate and reports what each step
//! allows, so gating rules can be checked from a terminal.

use crate::OutputFormatter;
use anyhow::Result;
use rental_core::{RentalFlowGate, RentalStepId};
use serde::Serialize;

/// Gate state for one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Step id.
    pub id: RentalStepId,
    /// Whether the step is completed.
    pub is_completed: bool,
    /// Whether the step is unlocked.
    pub is_accessible: bool,
    /// Result of `can_navigate_to_step` for this step.
    pub can_navigate: bool,
}

/// Snapshot of the gate after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowReport {
    /// Current step.
    pub current: RentalStepId,
    /// Index of the current step.
    pub current_index: usize,
    /// Result of `can_go_back`.
    pub can_go_back: bool,
    /// Every step in sequence order.
    pub steps: Vec<StepReport>,
}

impl FlowReport {
    /// Captures the gate's state.
    pub fn from_gate(gate: &RentalFlowGate) -> Self {
        Self {
            current: gate.current_step(),
            current_index: gate.current_step_index(),
            can_go_back: gate.can_go_back(),
            steps: gate
                .steps()
                .iter()
                .map(|step| StepReport {
                    id: step.id,
                    is_completed: step.is_completed,
                    is_accessible: step.is_accessible,
                    can_navigate: gate.can_navigate_to_step(step.id),
                })
                .collect(),
        }
    }
}

/// Marks `completed` steps in order, then moves the pointer to `current`.
///
/// # Errors
///
/// Returns an error if a step name is unknown.
pub fn replay(completed: &[String], current: Option<&str>) -> Result<RentalFlowGate> {
    let mut gate = RentalFlowGate::new();
    for name in completed {
        gate.mark_step_completed(name.parse()?);
    }
    if let Some(name) = current {
        gate.set_current_step(name.parse::<RentalStepId>()?);
    }
    Ok(gate)
}

/// Executes the `flow` command.
///
/// # Errors
///
/// Returns an error if a step name is unknown.
pub fn execute(
    completed: &[String],
    current: Option<&str>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let gate = replay(completed, current)?;
    println!("{}", formatter.format_flow(&FlowReport::from_gate(&gate)));
    Ok(())
}
