//! Configuration module
//!
//! The hosting screen supplies the endpoint, locale, time zone, anchor date
//! and the offer/order dates. The desktop binary reads them from `ORDERCAL_*`
//! environment variables.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use log::{info, warn};
use url::Url;

use crate::calendar::grid;
use crate::calendar::CalendarLocale;
use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::models::{DateSet, DAY_FORMAT};

pub const DEFAULT_ENDPOINT: &str = "https://example.com/order";

pub const ENV_ENDPOINT: &str = "ORDERCAL_ENDPOINT";
pub const ENV_LOCALE: &str = "ORDERCAL_LOCALE";
pub const ENV_TIMEZONE: &str = "ORDERCAL_TIMEZONE";
pub const ENV_ANCHOR: &str = "ORDERCAL_ANCHOR";
pub const ENV_OFFER_DATES: &str = "ORDERCAL_OFFER_DATES";
pub const ENV_ORDER_DATES: &str = "ORDERCAL_ORDER_DATES";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: Url,
    pub locale: CalendarLocale,
    /// `None` means the system's local time zone.
    pub timezone: Option<Tz>,
    /// Initial month anchor; `None` means today.
    pub anchor: Option<NaiveDate>,
    pub offer_dates: DateSet,
    pub order_dates: DateSet,
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let endpoint = parse_endpoint(get(ENV_ENDPOINT).as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        let mut config = Self {
            endpoint,
            locale: CalendarLocale::default(),
            timezone: None,
            anchor: None,
            offer_dates: DateSet::new(),
            order_dates: DateSet::new(),
            http: HttpConfig::order_api(),
        };

        if let Some(raw) = get(ENV_LOCALE) {
            config.locale = CalendarLocale::from_code(&raw)?;
        }
        if let Some(raw) = get(ENV_TIMEZONE) {
            let tz = raw
                .trim()
                .parse::<Tz>()
                .map_err(|_| AppError::config(format!("Unknown time zone '{}'", raw.trim())))?;
            config.timezone = Some(tz);
        }
        if let Some(raw) = get(ENV_ANCHOR) {
            config.anchor = Some(parse_anchor(&raw)?);
        }
        if let Some(raw) = get(ENV_OFFER_DATES) {
            config.offer_dates = DateSet::from_csv(&raw);
        }
        if let Some(raw) = get(ENV_ORDER_DATES) {
            config.order_dates = DateSet::from_csv(&raw);
        }

        Ok(config)
    }

    /// Today's date in the configured time zone.
    pub fn today(&self) -> NaiveDate {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => chrono::Local::now().date_naive(),
        }
    }

    pub fn initial_month(&self) -> NaiveDate {
        self.anchor.unwrap_or_else(|| self.today())
    }
}

/// Validates the order endpoint URL
pub fn parse_endpoint(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("Invalid order endpoint '{}': {}", raw.trim(), e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::config(format!(
                "Order endpoint must use http or https, got '{}'",
                other
            )))
        }
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(AppError::config("Order endpoint has no host"));
    }
    if url.scheme() == "http" {
        warn!("Order endpoint {} is not using HTTPS", url);
    }

    Ok(url)
}

fn parse_anchor(raw: &str) -> AppResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT)
        .map_err(|e| AppError::config(format!("Invalid anchor date '{}': {}", raw.trim(), e)))?;
    if !grid::is_supported(date) {
        return Err(AppError::config(format!("Anchor date {} is out of range", date)));
    }
    Ok(date)
}

/// Validates application configuration
///
/// Malformed offer/order keys are reported but not rejected: they can never
/// match a cell, so they are harmless.
pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    info!(
        "Configuration: endpoint={}, locale={}, timezone={}",
        config.endpoint,
        config.locale.code,
        config.timezone.map_or_else(|| "local".to_string(), |tz| tz.name().to_string())
    );

    for (label, set) in [("offer", &config.offer_dates), ("order", &config.order_dates)] {
        for key in set.malformed_keys() {
            warn!("Ignoring malformed {} date '{}'", label, key);
        }
    }

    if !grid::is_supported(config.initial_month()) {
        return Err(AppError::config("Initial month is out of the supported range"));
    }
    if config.http.connect_timeout > config.http.timeout {
        return Err(AppError::config("Connect timeout exceeds request timeout"));
    }
    Ok(())
}
