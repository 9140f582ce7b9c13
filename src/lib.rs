// Booking core for the Royella / Berlin Holidays site

pub mod booking;
pub mod config;
pub mod counters;
pub mod date_policy;
pub mod form;
pub mod gateway;
pub mod menu;

// Re-export key types for convenience
pub use booking::{BookingIntentValidator, BookingRequest, BookingSummary, ValidationFailure};
pub use config::{BookingConfig, ConfigError, DateLocale};
pub use counters::{CountError, CounterField, GuestCounts};
pub use date_policy::{Clock, DateInputError, FixedClock, StayDatePolicy, SystemClock};
pub use form::{BookingForm, BookingOutcome, FormEvent, ProceedError};
pub use gateway::{GatewayError, LoggingGateway, ProceedReceipt, ReservationGateway};
pub use menu::{Menu, MenuError, MenuFilter, MenuItem};
