// Reservation hand-off
// The site has no booking backend, so the default gateway only logs and records the request

use crate::booking::{BookingRequest, BookingSummary};
use crate::config::BookingConfig;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Reservation service unavailable: {0}")]
    Unavailable(String),

    #[error("Reservation rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceedReceipt {
    pub reference: String,
    pub hotel_name: String,
    pub summary: BookingSummary,
}

// Receives a validated request once the guest confirms the summary dialog
#[async_trait]
pub trait ReservationGateway: Send + Sync + 'static {
    async fn proceed(
        &self,
        request: &BookingRequest,
        summary: &BookingSummary,
    ) -> Result<ProceedReceipt, GatewayError>;
}

pub struct LoggingGateway {
    hotel_name: String,
    reference_prefix: String,
    latency: Duration,
    receipts: Mutex<Vec<ProceedReceipt>>,
}

impl LoggingGateway {
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            hotel_name: config.hotel_name.clone(),
            reference_prefix: config.reference_prefix.clone(),
            latency: Duration::from_millis(config.simulated_latency_ms),
            receipts: Mutex::new(Vec::new()),
        }
    }

    // Receipts issued so far, oldest first
    pub fn receipts(&self) -> Vec<ProceedReceipt> {
        self.receipts.lock().clone()
    }

    fn next_reference(&self) -> String {
        format!("{}{:08}", self.reference_prefix, rand::random::<u32>() % 100_000_000)
    }
}

impl Default for LoggingGateway {
    fn default() -> Self {
        Self::new(&BookingConfig::default())
    }
}

#[async_trait]
impl ReservationGateway for LoggingGateway {
    async fn proceed(
        &self,
        request: &BookingRequest,
        summary: &BookingSummary,
    ) -> Result<ProceedReceipt, GatewayError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let receipt = ProceedReceipt {
            reference: self.next_reference(),
            hotel_name: self.hotel_name.clone(),
            summary: summary.clone(),
        };
        info!(
            reference = %receipt.reference,
            hotel = %receipt.hotel_name,
            check_in = ?request.check_in,
            check_out = ?request.check_out,
            rooms = request.counts.rooms(),
            nights = summary.nights,
            total_guests = summary.total_guests,
            "proceeding with booking"
        );

        self.receipts.lock().push(receipt.clone());
        Ok(receipt)
    }
}
