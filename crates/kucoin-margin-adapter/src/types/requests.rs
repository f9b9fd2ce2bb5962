/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{BorrowOrderType, RepaySequence, TimeInForce};

/// POST /api/v1/margin/borrow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowOrderRequest {
    pub currency: String,
    #[serde(rename = "type")]
    pub order_type: BorrowOrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<Decimal>,
    /// Comma separated terms in days, e.g. "7,14,28"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl BorrowOrderRequest {
    pub fn new(currency: impl Into<String>, order_type: BorrowOrderType, size: Decimal) -> Self {
        Self {
            currency: currency.into(),
            order_type,
            size,
            max_rate: None,
            term: None,
        }
    }

    pub fn max_rate(mut self, max_rate: Decimal) -> Self {
        self.max_rate = Some(max_rate);
        self
    }

    /// Restrict acceptable terms; an empty slice leaves the filter off
    pub fn terms(mut self, terms: &[u32]) -> Self {
        self.term = if terms.is_empty() {
            None
        } else {
            Some(
                terms
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };
        self
    }
}

/// POST /api/v1/margin/repay/all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepayAllRequest {
    pub currency: String,
    pub sequence: RepaySequence,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
}

/// POST /api/v1/margin/repay/single
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaySingleRequest {
    pub currency: String,
    pub trade_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
}

/// POST /api/v1/margin/lend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendOrderRequest {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_int_rate: Decimal,
    pub term: u32,
}

/// POST /api/v1/margin/toggle-auto-lend
///
/// `retain_size`, `daily_int_rate` and `term` are required by the server
/// when `is_enable` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLendRequest {
    pub currency: String,
    pub is_enable: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain_size: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_int_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<u32>,
}

impl AutoLendRequest {
    pub fn enable(
        currency: impl Into<String>,
        retain_size: Decimal,
        daily_int_rate: Decimal,
        term: u32,
    ) -> Self {
        Self {
            currency: currency.into(),
            is_enable: true,
            retain_size: Some(retain_size),
            daily_int_rate: Some(daily_int_rate),
            term: Some(term),
        }
    }

    pub fn disable(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            is_enable: false,
            retain_size: None,
            daily_int_rate: None,
            term: None,
        }
    }
}

/// Page selection shared by the paginated lend queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageRequest {
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page: Some(current_page),
            page_size: Some(page_size),
        }
    }
}

/// POST /api/v2/margin/borrow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginBorrowRequest {
    pub is_isolated: bool,
    /// Trading pair, required when `is_isolated` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

/// POST /api/v2/margin/repay/all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginRepayAllRequest {
    pub is_isolated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<RepaySequence>,
}

/// POST /api/v2/margin/repay/single
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginRepaySingleRequest {
    pub is_isolated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    pub trade_id: String,
}

/// GET /api/v2/margin/transferable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferableQuery {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_isolated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// GET /api/v2/margin/riskLimits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLimitQuery {
    pub is_isolated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn borrow_order_omits_unset_filters() {
        let request = BorrowOrderRequest::new("USDT", BorrowOrderType::Fok, "10".parse().unwrap());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"currency": "USDT", "type": "FOK", "size": "10"})
        );
    }

    #[test]
    fn borrow_order_joins_terms() {
        let request = BorrowOrderRequest::new("USDT", BorrowOrderType::Ioc, "10".parse().unwrap())
            .max_rate("0.002".parse().unwrap())
            .terms(&[7, 14, 28]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "currency": "USDT",
                "type": "IOC",
                "size": "10",
                "maxRate": "0.002",
                "term": "7,14,28"
            })
        );
        assert_eq!(request.clone().terms(&[]).term, None);
    }

    #[test]
    fn auto_lend_disable_sends_only_required_fields() {
        assert_eq!(
            serde_json::to_value(AutoLendRequest::disable("BTC")).unwrap(),
            json!({"currency": "BTC", "isEnable": false})
        );
    }

    #[test]
    fn page_request_default_is_empty() {
        assert_eq!(serde_json::to_value(PageRequest::default()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(PageRequest::new(2, 50)).unwrap(),
            json!({"currentPage": 2, "pageSize": 50})
        );
    }
}
