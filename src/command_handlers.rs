//! Command handlers module
//!
//! Async work started from the iced update loop. Each handler resolves to a
//! value the controller can apply, never to an error the UI has to unwrap.

use std::time::Instant;

use log::{debug, error};
use tokio_util::sync::CancellationToken;

use crate::calendar::{OrderOutcome, PendingOrder};
use crate::error::AppError;
use crate::orders::OrderClient;
use crate::utils::logging::log_order_submission;

/// Order submission handler
#[derive(Debug, Clone)]
pub struct OrderHandlers {
    client: OrderClient,
    shutdown: CancellationToken,
}

impl OrderHandlers {
    pub fn new(client: OrderClient, shutdown: CancellationToken) -> Self {
        Self { client, shutdown }
    }

    /// Run one submission to completion, or until shutdown is requested.
    pub async fn submit(&self, pending: PendingOrder) -> (u64, OrderOutcome) {
        let started = Instant::now();

        let result = tokio::select! {
            _ = self.shutdown.cancelled() => Err(AppError::Cancelled),
            result = self.client.submit(&pending.cell) => result,
        };

        let elapsed = started.elapsed().as_millis() as u64;
        let outcome = match result {
            Ok(confirmation) => {
                log_order_submission(&pending.cell.iso_date, true, elapsed);
                OrderOutcome::Placed(confirmation)
            }
            Err(e) if e.is_cancelled() => {
                debug!("Order #{} abandoned at shutdown", pending.id);
                OrderOutcome::Cancelled
            }
            Err(e) => {
                log_order_submission(&pending.cell.iso_date, false, elapsed);
                error!("Order #{} error: {}", pending.id, e);
                OrderOutcome::Failed(e.to_safe_string())
            }
        };

        (pending.id, outcome)
    }
}
