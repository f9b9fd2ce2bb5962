/*
[INPUT]:  Currency and optional term filters
[OUTPUT]: Raw response envelopes for lending market data and configuration
[POS]:    HTTP layer - lending market endpoints
[UPDATE]: When adding new market endpoints or changing response format
*/

use crate::http::transport::{ApiRequest, ParamsBuilder, Transport};
use crate::http::{MarginClient, Result};
use crate::types::ApiResponse;

impl<T: Transport> MarginClient<T> {
    /// Lending market depth for a currency
    ///
    /// GET /api/v1/margin/market?currency={currency}&term={term}
    pub async fn get_lending_market_data(
        &self,
        currency: &str,
        term: Option<u32>,
    ) -> Result<ApiResponse> {
        let params = ParamsBuilder::new()
            .with("currency", currency)
            .with_opt("term", term)
            .build();
        self.call(ApiRequest::get("/api/v1/margin/market", params))
            .await
    }

    /// Last 300 fills in the lending and borrowing market
    ///
    /// GET /api/v1/margin/trade/last?currency={currency}
    pub async fn get_margin_fills_trade_data(&self, currency: &str) -> Result<ApiResponse> {
        let params = ParamsBuilder::new().with("currency", currency).build();
        self.call(ApiRequest::get("/api/v1/margin/trade/last", params))
            .await
    }

    /// Lending configuration (requires "General" permission)
    ///
    /// GET /api/v2/margin/lend/config
    pub async fn get_lend_config(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let params = ParamsBuilder::new().with_opt("currency", currency).build();
        self.call(ApiRequest::get("/api/v2/margin/lend/config", params))
            .await
    }

    /// Lending market list (requires "General" permission)
    ///
    /// GET /api/v2/margin/lend/market
    pub async fn get_lend_markets(
        &self,
        currency: Option<&str>,
        term: Option<u32>,
    ) -> Result<ApiResponse> {
        let params = ParamsBuilder::new()
            .with_opt("currency", currency)
            .with_opt("term", term)
            .build();
        self.call(ApiRequest::get("/api/v2/margin/lend/market", params))
            .await
    }
}
