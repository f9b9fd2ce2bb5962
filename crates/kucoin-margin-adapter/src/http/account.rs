/*
[INPUT]:  Cross/isolated scope, symbol and currency filters
[OUTPUT]: Raw response envelopes for margin accounts, transferable amounts and risk limits
[POS]:    HTTP layer - v2 margin account endpoints (require "General" permission)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::transport::{ApiRequest, ParamsBuilder, Transport, to_params};
use crate::http::{MarginClient, Result};
use crate::types::{ApiResponse, RiskLimitQuery, TransferableQuery};

impl<T: Transport> MarginClient<T> {
    /// Cross margin account overview
    ///
    /// GET /api/v2/margin/accounts?quoteCurrency={quote_currency}
    pub async fn get_margin_accounts(&self, quote_currency: Option<&str>) -> Result<ApiResponse> {
        let params = ParamsBuilder::new()
            .with_opt("quoteCurrency", quote_currency)
            .build();
        self.call(ApiRequest::get("/api/v2/margin/accounts", params))
            .await
    }

    /// Isolated margin accounts, optionally for one symbol
    ///
    /// GET /api/v2/isolated/accounts?symbol={symbol}&quoteCurrency={quote_currency}
    pub async fn get_isolated_accounts(
        &self,
        symbol: Option<&str>,
        quote_currency: Option<&str>,
    ) -> Result<ApiResponse> {
        let params = ParamsBuilder::new()
            .with_opt("symbol", symbol)
            .with_opt("quoteCurrency", quote_currency)
            .build();
        self.call(ApiRequest::get("/api/v2/isolated/accounts", params))
            .await
    }

    /// Maximum transferable amount out of a margin account
    ///
    /// GET /api/v2/margin/transferable
    pub async fn get_transferable(&self, query: TransferableQuery) -> Result<ApiResponse> {
        let params = to_params(&query)?;
        self.call(ApiRequest::get("/api/v2/margin/transferable", params))
            .await
    }

    /// Borrow risk limits for cross or isolated margin
    ///
    /// GET /api/v2/margin/riskLimits
    pub async fn get_risk_limits(&self, query: RiskLimitQuery) -> Result<ApiResponse> {
        let params = to_params(&query)?;
        self.call(ApiRequest::get("/api/v2/margin/riskLimits", params))
            .await
    }
}
