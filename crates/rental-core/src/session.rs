// Rust guideline compliant 2026-10-18

//! Checkout session state.
//!
//! `RentalSession` is the explicit state holder screens receive for one
//! rental transaction. It pairs the step gate with the data gathered along
//! the way and completes steps as that data arrives.

use crate::flow::RentalFlowGate;
use crate::models::{Listing, RentalStepId};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive range of rental days.
///
/// Always satisfies `start <= end`, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawPeriod> for RentalPeriod {
    type Error = Error;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl RentalPeriod {
    /// Creates a period from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidPeriod(format!(
                "end {} is before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// First rental day.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last rental day.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of rental days; a same-day rental counts as one.
    #[must_use]
    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs() + 1
    }
}

/// Price summary for the review step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Listing price per day.
    pub daily_price: f64,
    /// Rental length in days.
    pub days: u64,
    /// `daily_price * days`.
    pub total: f64,
}

/// One rental transaction in progress.
#[derive(Debug, Clone, Default)]
pub struct RentalSession {
    gate: RentalFlowGate,
    listing: Option<Listing>,
    period: Option<RentalPeriod>,
}

impl RentalSession {
    /// Starts a fresh session on `item-detail`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The step gate for this session.
    #[must_use]
    pub fn gate(&self) -> &RentalFlowGate {
        &self.gate
    }

    /// The selected listing, if any.
    #[must_use]
    pub fn listing(&self) -> Option<&Listing> {
        self.listing.as_ref()
    }

    /// The chosen rental period, if any.
    #[must_use]
    pub fn period(&self) -> Option<&RentalPeriod> {
        self.period.as_ref()
    }

    /// Records the listing being rented and completes `item-detail`.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not accessible or payment is already done.
    pub fn select_listing(&mut self, listing: Listing) -> Result<()> {
        self.require_editable(RentalStepId::ItemDetail)?;
        debug!(listing = %listing.id, "listing selected");
        self.listing = Some(listing);
        self.gate.mark_step_completed(RentalStepId::ItemDetail);
        Ok(())
    }

    /// Records the rental dates and completes `rental-period`.
    ///
    /// # Errors
    ///
    /// Returns an error if no listing has been selected yet or payment is
    /// already done.
    pub fn set_rental_period(&mut self, period: RentalPeriod) -> Result<()> {
        self.require_editable(RentalStepId::RentalPeriod)?;
        self.period = Some(period);
        self.gate.mark_step_completed(RentalStepId::RentalPeriod);
        Ok(())
    }

    /// Confirms the order summary and completes `review-order`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rental period has not been set.
    pub fn confirm_review(&mut self) -> Result<()> {
        self.require_accessible(RentalStepId::ReviewOrder)?;
        self.gate.mark_step_completed(RentalStepId::ReviewOrder);
        Ok(())
    }

    /// Records a successful payment and completes `payment`, unlocking the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the order has not been reviewed.
    pub fn confirm_payment(&mut self) -> Result<()> {
        self.require_accessible(RentalStepId::Payment)?;
        self.gate.mark_step_completed(RentalStepId::Payment);
        Ok(())
    }

    /// Price summary, once a priced listing and a period are known.
    #[must_use]
    pub fn quote(&self) -> Option<Quote> {
        let daily_price = self.listing.as_ref()?.price?;
        let days = self.period?.days();
        Some(Quote {
            daily_price,
            days,
            total: daily_price * days as f64,
        })
    }

    /// Moves to the next step when the gate allows it.
    ///
    /// Returns the new current step, or `None` if the move is not allowed.
    pub fn advance(&mut self) -> Option<RentalStepId> {
        let next = self.gate.current_step().next()?;
        self.go_to(next)
    }

    /// Moves one step back when `can_go_back` allows it.
    pub fn go_back(&mut self) -> Option<RentalStepId> {
        if !self.gate.can_go_back() {
            return None;
        }
        let previous = self.gate.current_step().previous()?;
        self.gate.set_current_step(previous);
        Some(previous)
    }

    /// Moves to `step` when `can_navigate_to_step` allows it.
    pub fn go_to(&mut self, step: RentalStepId) -> Option<RentalStepId> {
        if !self.gate.can_navigate_to_step(step) {
            return None;
        }
        self.gate.set_current_step(step);
        Some(step)
    }

    /// Discards all data and progress for a new transaction.
    pub fn reset(&mut self) {
        self.listing = None;
        self.period = None;
        self.gate.reset_flow();
    }

    fn require_accessible(&self, step: RentalStepId) -> Result<()> {
        if self.gate.is_accessible(step) {
            Ok(())
        } else {
            Err(Error::StepLocked(step))
        }
    }

    // Order data is frozen once paid for.
    fn require_editable(&self, step: RentalStepId) -> Result<()> {
        if self.gate.is_completed(RentalStepId::Payment) {
            return Err(Error::StepLocked(step));
        }
        self.require_accessible(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_days_inclusive() {
        let period = RentalPeriod::new(date(2026, 3, 1), date(2026, 3, 3)).unwrap();
        assert_eq!(period.days(), 3);
        let same_day = RentalPeriod::new(date(2026, 3, 1), date(2026, 3, 1)).unwrap();
        assert_eq!(same_day.days(), 1);
    }

    #[test]
    fn test_period_rejects_reversed_dates() {
        assert!(RentalPeriod::new(date(2026, 3, 3), date(2026, 3, 1)).is_err());
    }

    #[test]
    fn test_period_deserialize_validates_order() {
        let ok: RentalPeriod =
            serde_json::from_str(r#"{"start":"2026-03-01","end":"2026-03-05"}"#).unwrap();
        assert_eq!(ok.days(), 5);

        let reversed =
            serde_json::from_str::<RentalPeriod>(r#"{"start":"2026-03-05","end":"2026-03-01"}"#);
        assert!(reversed.is_err(), "Reversed period must not deserialize");
    }

    #[test]
    fn test_period_locked_before_listing() {
        let mut session = RentalSession::new();
        let period = RentalPeriod::new(date(2026, 3, 1), date(2026, 3, 2)).unwrap();
        let err = session.set_rental_period(period).unwrap_err();
        assert!(matches!(err, Error::StepLocked(RentalStepId::RentalPeriod)));
    }
}
