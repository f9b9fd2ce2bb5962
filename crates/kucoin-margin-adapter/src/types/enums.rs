/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Matching rule for a v1 borrow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BorrowOrderType {
    Fok,
    Ioc,
}

/// Which outstanding loans a one-click repayment settles first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepaySequence {
    RecentlyExpireFirst,
    HighestRateFirst,
}

/// Time in force for v2 borrow orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    Ioc,
    Fok,
}

impl BorrowOrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowOrderType::Fok => "FOK",
            BorrowOrderType::Ioc => "IOC",
        }
    }
}

impl RepaySequence {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaySequence::RecentlyExpireFirst => "RECENTLY_EXPIRE_FIRST",
            RepaySequence::HighestRateFirst => "HIGHEST_RATE_FIRST",
        }
    }
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
        }
    }
}

impl fmt::Display for BorrowOrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RepaySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorrowOrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FOK" => Ok(BorrowOrderType::Fok),
            "IOC" => Ok(BorrowOrderType::Ioc),
            other => Err(format!("unknown borrow order type: {other}")),
        }
    }
}

impl FromStr for RepaySequence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "RECENTLY_EXPIRE_FIRST" => Ok(RepaySequence::RecentlyExpireFirst),
            "HIGHEST_RATE_FIRST" => Ok(RepaySequence::HighestRateFirst),
            other => Err(format!("unknown repay sequence: {other}")),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            other => Err(format!("unknown time in force: {other}")),
        }
    }
}
