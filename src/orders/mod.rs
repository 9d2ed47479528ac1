// Order submission
// One POST per order, no retries; the caller decides what the user sees.

use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::models::{DayCell, OrderConfirmation, OrderRequest};
use crate::utils::logging::log_network_error;

#[derive(Debug, Clone)]
pub struct OrderClient {
    client: Client,
    endpoint: Url,
}

impl OrderClient {
    pub fn new(endpoint: Url, http: &HttpConfig) -> AppResult<Self> {
        Ok(Self {
            client: http.build_client()?,
            endpoint,
        })
    }

    /// Place an order for `cell`.
    ///
    /// Any transport error, non-2xx status or body without a `date` field is
    /// an error.
    pub async fn submit(&self, cell: &DayCell) -> AppResult<OrderConfirmation> {
        debug!("POST {} for {}", self.endpoint, cell.iso_date);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&OrderRequest::new(cell.clone()))
            .send()
            .await
            .map_err(|e| {
                log_network_error("order submission", &e);
                AppError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Order endpoint answered {} for {}", status, cell.iso_date);
            return Err(AppError::operation_failed(format!(
                "Order endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        let confirmation = response.json::<OrderConfirmation>().await.map_err(|e| {
            log_network_error("order confirmation decoding", &e);
            AppError::Network(e)
        })?;

        debug!("Order confirmed for {}", confirmation.iso_date());
        Ok(confirmation)
    }
}
