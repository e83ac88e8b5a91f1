//! Averages crowdsourced reports into a community price.
//!
//! `average()` reports whatever the log holds. Whether an aggregate is
//! trustworthy is decided by each caller through
//! [`CommunityAggregate::is_trusted`].

use std::sync::Arc;

use horadric_market_data::{
    format_price, parse_price, price_to_trade_value, DemandTier, PriceData, TradeValue,
};
use serde::Serialize;

use crate::constants::COMMUNITY_REPORTS_SOURCE;
use crate::reports::ReportLog;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityAggregate {
    pub item_name: String,
    /// Mean of the parseable reports, in millions of gold
    pub average_price: f64,
    pub formatted_price: String,
    pub trade_value: TradeValue,
    /// Always medium for community data
    pub demand: DemandTier,
    /// Every report for the item, including ones whose price did not parse
    pub sample_size: usize,
    /// Timestamp of the oldest report for the item
    pub last_report_at: String,
}

impl CommunityAggregate {
    pub fn is_trusted(&self, min_samples: usize) -> bool {
        self.sample_size >= min_samples
    }

    pub fn to_price_data(&self) -> PriceData {
        let mut data = PriceData::new(
            self.item_name.clone(),
            self.trade_value.as_str(),
            format!("{} Gold", self.formatted_price),
            self.demand.as_str(),
            COMMUNITY_REPORTS_SOURCE,
            self.last_report_at.clone(),
        );
        data.avg_price = Some(self.formatted_price.clone());
        data.sample_size = Some(self.sample_size);
        data
    }
}

pub struct CommunityPricing {
    reports: Arc<ReportLog>,
}

impl CommunityPricing {
    pub fn new(reports: Arc<ReportLog>) -> Self {
        Self { reports }
    }

    pub fn reports(&self) -> &Arc<ReportLog> {
        &self.reports
    }

    /// Average the reports for an item. `None` when no report parses.
    pub fn average(&self, item_name: &str) -> Option<CommunityAggregate> {
        let reports = self.reports.reports_for_item(item_name);
        let first = reports.first()?;

        let prices: Vec<f64> = reports
            .iter()
            .map(|report| parse_price(&report.observed_price))
            .filter(|price| *price > 0.0)
            .collect();
        if prices.is_empty() {
            return None;
        }

        let average = prices.iter().sum::<f64>() / prices.len() as f64;

        Some(CommunityAggregate {
            item_name: item_name.to_string(),
            average_price: average,
            formatted_price: format_price(average),
            trade_value: price_to_trade_value(average),
            demand: DemandTier::Medium,
            sample_size: reports.len(),
            last_report_at: first.timestamp.clone(),
        })
    }
}
