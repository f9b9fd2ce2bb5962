/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed views of documented `data` payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Page of results returned by the paginated queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub current_page: u32,
    pub page_size: u32,
    pub total_num: u32,
    pub total_page: u32,
    pub items: Vec<T>,
    /// Server time, only present on v2 responses
    #[serde(default, deserialize_with = "serde_helpers::deserialize_opt_timestamp")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Unpaginated v2 list with server time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamped<T> {
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub timestamp: i64,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowOrderId {
    pub order_id: String,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowOrder {
    pub order_id: String,
    pub currency: String,
    pub size: Decimal,
    pub filled: Decimal,
    pub status: String,
    #[serde(default)]
    pub match_list: Vec<BorrowMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowMatch {
    pub trade_id: String,
    pub currency: String,
    pub daily_int_rate: Decimal,
    pub size: Decimal,
    pub term: u32,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub timestamp: i64,
}

/// Outstanding (not yet repaid) borrow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingRecord {
    pub trade_id: String,
    pub currency: String,
    pub accrued_interest: Decimal,
    pub daily_int_rate: Decimal,
    pub liability: Decimal,
    pub principal: Decimal,
    pub repaid_size: Decimal,
    pub term: u32,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub created_at: i64,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub maturity_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaidRecord {
    pub trade_id: String,
    pub currency: String,
    pub daily_int_rate: Decimal,
    pub interest: Decimal,
    pub principal: Decimal,
    pub repaid_size: Decimal,
    pub term: u32,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub repay_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendOrderId {
    pub order_id: String,
}

/// Lend order as reported by the active/done and v2 order queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendOrder {
    pub order_id: String,
    pub currency: String,
    pub size: Decimal,
    pub filled_size: Decimal,
    pub daily_int_rate: Decimal,
    pub term: u32,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub created_at: i64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsettledLendTrade {
    pub trade_id: String,
    pub currency: String,
    pub size: Decimal,
    pub accrued_interest: Decimal,
    pub repaid: Decimal,
    pub daily_int_rate: Decimal,
    pub term: u32,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub maturity_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettledLendTrade {
    pub trade_id: String,
    pub currency: String,
    pub size: Decimal,
    pub interest: Decimal,
    pub repaid: Decimal,
    pub daily_int_rate: Decimal,
    pub term: u32,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub settled_at: i64,
    #[serde(default)]
    pub note: String,
}

/// Lending summary of the main account for one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendAsset {
    pub currency: String,
    pub outstanding: Decimal,
    pub filled_size: Decimal,
    pub accrued_interest: Decimal,
    pub realized_profit: Decimal,
    pub is_auto_lend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingMarketEntry {
    pub daily_int_rate: Decimal,
    pub term: u32,
    pub size: Decimal,
}

/// One fill from the lending/borrowing market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginTrade {
    pub trade_id: String,
    pub currency: String,
    pub size: Decimal,
    pub daily_int_rate: Decimal,
    pub term: u32,
    /// Nanoseconds
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendConfig {
    pub currency: String,
    pub lend_min_size: Decimal,
    pub lend_max_size: Decimal,
    pub increment: Decimal,
    pub min_daily_int_rate: Decimal,
    pub max_daily_int_rate: Decimal,
    pub precision_daily_int_rate: Decimal,
    /// Comma separated, e.g. "7,14,28"
    pub terms: String,
}

impl LendConfig {
    /// Supported terms in days; entries that fail to parse are skipped
    pub fn term_days(&self) -> Vec<u32> {
        self.terms
            .split(',')
            .filter_map(|term| term.trim().parse().ok())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendMarket {
    pub currency: String,
    pub size: Decimal,
    pub daily_int_rate: Decimal,
    pub term: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendRecord {
    pub trade_id: String,
    pub currency: String,
    pub size: Decimal,
    pub repaid_size: Decimal,
    pub interest: Decimal,
    pub accrued_interest: Decimal,
    pub term: u32,
    #[serde(deserialize_with = "serde_helpers::deserialize_timestamp")]
    pub maturity_time: i64,
    pub status: String,
    #[serde(default)]
    pub note: String,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Timestamps arrive either as JSON numbers or as numeric strings.
    /// Units are whatever the endpoint reports (milliseconds, nanoseconds for fills)
    pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        parse_timestamp(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {value}")))
    }

    pub fn deserialize_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        parse_timestamp(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {value}")))
    }

    fn parse_timestamp(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
