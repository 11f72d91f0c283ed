//! Yahoo Finance v8 chart API client (daily bars).

use chrono::{DateTime, NaiveDate};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::data::PriceSource;
use crate::domain::{PriceBar, StudyWindow};
use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com/v8/finance/chart";
const BASE_URL_ENV: &str = "LPM_CHART_URL";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) keynote-lpm/0.1";

pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    /// Build a client, honouring `LPM_CHART_URL` from the environment or `.env`.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::usage(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PriceSource for YahooClient {
    fn fetch_closes(&self, ticker: &str, window: &StudyWindow) -> Result<Vec<PriceBar>, AppError> {
        let (period1, period2) = period_bounds(window)?;
        let url = format!("{}/{ticker}", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .map_err(|e| AppError::data(format!("Chart request for {ticker} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::data(format!(
                "Chart request for {ticker} ({}..{}) failed with status {}.",
                window.start_str(),
                window.end_str(),
                resp.status()
            )));
        }

        let body: ChartResponse = resp
            .json()
            .map_err(|e| AppError::data(format!("Failed to parse chart response for {ticker}: {e}")))?;

        bars_from_response(ticker, body)
    }
}

/// Unix-second bounds covering the whole of `window.start` through the end of `window.end`.
fn period_bounds(window: &StudyWindow) -> Result<(i64, i64), AppError> {
    let start = window
        .start
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::usage("Invalid study window start."))?;
    let end = window
        .end
        .and_hms_opt(23, 59, 59)
        .ok_or_else(|| AppError::usage("Invalid study window end."))?;
    Ok((start.and_utc().timestamp(), end.and_utc().timestamp()))
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Vec<Option<f64>>,
}

fn bars_from_response(ticker: &str, resp: ChartResponse) -> Result<Vec<PriceBar>, AppError> {
    if let Some(err) = resp.chart.error {
        return Err(AppError::data(format!(
            "Chart API error for {ticker}: {} ({})",
            err.description, err.code
        )));
    }

    let data = resp
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| AppError::data(format!("Empty chart result for {ticker}.")))?;

    // No timestamps means no trading days in range.
    let Some(timestamps) = data.timestamp else {
        return Ok(Vec::new());
    };

    let closes = data
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .ok_or_else(|| AppError::data(format!("No quote data for {ticker}.")))?;

    if closes.len() != timestamps.len() {
        return Err(AppError::data(format!(
            "Chart response for {ticker} has {} timestamps but {} closes.",
            timestamps.len(),
            closes.len()
        )));
    }

    let mut bars = Vec::with_capacity(timestamps.len());
    for (ts, close) in timestamps.into_iter().zip(closes) {
        let Some(close) = close else { continue };
        bars.push(PriceBar {
            date: timestamp_date(ts)?,
            close,
        });
    }
    bars.sort_by_key(|b| b.date);
    Ok(bars)
}

fn timestamp_date(ts: i64) -> Result<NaiveDate, AppError> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| AppError::data(format!("Invalid chart timestamp {ts}.")))
}
