// Booking form session
// Holds the current request snapshot for one form or modal and turns user events into new snapshots

use crate::booking::{BookingIntentValidator, BookingRequest, BookingSummary, ValidationFailure};
use crate::config::BookingConfig;
use crate::counters::CounterField;
use crate::date_policy::{Clock, DateInputError, StayDatePolicy, SystemClock};
use crate::gateway::{GatewayError, ProceedReceipt, ReservationGateway};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProceedError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    SetCheckIn(NaiveDate),
    ClearCheckIn,
    SetCheckOut(NaiveDate),
    ClearCheckOut,
    Increment(CounterField),
    Decrement(CounterField),
}

// What the confirmation dialog shows after submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    Confirmed {
        summary: BookingSummary,
    },
    Rejected {
        reason: ValidationFailure,
        message: String,
    },
}

impl From<Result<BookingSummary, ValidationFailure>> for BookingOutcome {
    fn from(result: Result<BookingSummary, ValidationFailure>) -> Self {
        match result {
            Ok(summary) => BookingOutcome::Confirmed { summary },
            Err(reason) => BookingOutcome::Rejected {
                reason,
                message: reason.to_string(),
            },
        }
    }
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed { .. })
    }
}

pub struct BookingForm<C: Clock = SystemClock> {
    request: BookingRequest,
    validator: BookingIntentValidator,
    clock: C,
}

impl BookingForm<SystemClock> {
    pub fn new(config: &BookingConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> BookingForm<C> {
    pub fn with_clock(config: &BookingConfig, clock: C) -> Self {
        Self {
            request: BookingRequest::new(),
            validator: BookingIntentValidator::from_config(config),
            clock,
        }
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    // Date floors as of now, for rendering the inputs' min attribute
    pub fn date_policy(&self) -> StayDatePolicy {
        StayDatePolicy::from_clock(&self.clock)
    }

    /// Applies one user interaction.
    ///
    /// Date events below the current floor leave the snapshot unchanged and
    /// return the rejection so the shell can keep its input in sync.
    pub fn apply(&mut self, event: FormEvent) -> Result<&BookingRequest, DateInputError> {
        let policy = self.date_policy();
        let current = self.request.clone();

        let next = match event {
            FormEvent::SetCheckIn(date) => {
                let date = policy.check_in_allowed(date).map_err(|e| {
                    warn!(error = %e, "ignoring check-in date");
                    e
                })?;
                current.with_check_in(Some(date))
            }
            FormEvent::ClearCheckIn => current.with_check_in(None),
            FormEvent::SetCheckOut(date) => {
                let date = policy
                    .check_out_allowed(date, current.check_in)
                    .map_err(|e| {
                        warn!(error = %e, "ignoring check-out date");
                        e
                    })?;
                current.with_check_out(Some(date))
            }
            FormEvent::ClearCheckOut => current.with_check_out(None),
            FormEvent::Increment(field) => current.increment(field),
            FormEvent::Decrement(field) => current.decrement(field),
        };

        debug!(?event, "booking form updated");
        self.request = next;
        Ok(&self.request)
    }

    pub fn submit(&self) -> BookingOutcome {
        self.validator.validate(&self.request).into()
    }

    // Validates and hands the request over; the session starts fresh on success
    pub async fn proceed<G>(&mut self, gateway: &G) -> Result<ProceedReceipt, ProceedError>
    where
        G: ReservationGateway + ?Sized,
    {
        let summary = self.validator.validate(&self.request)?;
        let receipt = gateway.proceed(&self.request, &summary).await?;
        self.close();
        Ok(receipt)
    }

    // Drops the snapshot, as when the modal is dismissed
    pub fn close(&mut self) {
        self.request = BookingRequest::new();
    }
}
