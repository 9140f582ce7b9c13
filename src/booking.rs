// Booking intent validation
// Shared by the full-page booking form and the booking modal

use crate::config::{BookingConfig, DateLocale};
use crate::counters::{CounterField, GuestCounts};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// Reasons a booking request is turned away, checked in declaration order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationFailure {
    #[error("Please select a check-in date")]
    MissingCheckIn,

    #[error("Please select a check-out date")]
    MissingCheckOut,

    #[error("Check-out date must be after the check-in date")]
    InvalidDateRange,
}

// Snapshot of the form at one moment; every edit builds a new one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub counts: GuestCounts,
}

impl BookingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check_in(self, check_in: Option<NaiveDate>) -> Self {
        Self { check_in, ..self }
    }

    pub fn with_check_out(self, check_out: Option<NaiveDate>) -> Self {
        Self { check_out, ..self }
    }

    pub fn with_counts(self, counts: GuestCounts) -> Self {
        Self { counts, ..self }
    }

    pub fn increment(self, field: CounterField) -> Self {
        let counts = self.counts.increment(field);
        self.with_counts(counts)
    }

    pub fn decrement(self, field: CounterField) -> Self {
        let counts = self.counts.decrement(field);
        self.with_counts(counts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
    pub total_guests: u64,
    pub formatted_check_in: String,
    pub formatted_check_out: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookingIntentValidator {
    locale: DateLocale,
}

impl BookingIntentValidator {
    pub fn new(locale: DateLocale) -> Self {
        Self { locale }
    }

    pub fn from_config(config: &BookingConfig) -> Self {
        Self::new(config.locale)
    }

    pub fn locale(&self) -> DateLocale {
        self.locale
    }

    // First failing rule wins; no side effects
    pub fn validate(&self, request: &BookingRequest) -> Result<BookingSummary, ValidationFailure> {
        let check_in = request.check_in.ok_or(ValidationFailure::MissingCheckIn)?;
        let check_out = request.check_out.ok_or(ValidationFailure::MissingCheckOut)?;

        if check_out <= check_in {
            debug!(%check_in, %check_out, "rejecting booking request with empty date range");
            return Err(ValidationFailure::InvalidDateRange);
        }

        // Calendar dates, so the whole-day difference is already the ceiling
        let nights = u32::try_from((check_out - check_in).num_days()).unwrap_or(u32::MAX);
        let counts = request.counts;

        let summary = BookingSummary {
            check_in,
            check_out,
            nights,
            rooms: counts.rooms(),
            adults: counts.adults(),
            children: counts.children(),
            total_guests: counts.total_guests(),
            formatted_check_in: self.locale.format(check_in),
            formatted_check_out: self.locale.format(check_out),
        };
        debug!(
            nights = summary.nights,
            total_guests = summary.total_guests,
            "booking request validated"
        );
        Ok(summary)
    }
}
