/*
[INPUT]:  Borrow and repay parameters
[OUTPUT]: Raw response envelopes for borrow orders, repay records and repayments
[POS]:    HTTP layer - borrow/repay endpoints (require "Trade" permission)
[UPDATE]: When adding new borrow endpoints or changing parameters
*/

use rust_decimal::Decimal;

use crate::http::transport::{ApiRequest, ParamsBuilder, Transport, to_params};
use crate::http::{MarginClient, Result};
use crate::types::{
    ApiResponse, BorrowOrderRequest, MarginBorrowRequest, MarginRepayAllRequest,
    MarginRepaySingleRequest, RepayAllRequest, RepaySequence, RepaySingleRequest,
};

impl<T: Transport> MarginClient<T> {
    /// Post a borrow order
    ///
    /// POST /api/v1/margin/borrow
    pub async fn post_borrow_order(&self, request: BorrowOrderRequest) -> Result<ApiResponse> {
        let params = to_params(&request)?;
        self.call(ApiRequest::post("/api/v1/margin/borrow", params))
            .await
    }

    /// Get a borrow order by the id returned from [`Self::post_borrow_order`]
    ///
    /// GET /api/v1/margin/borrow?orderId={order_id}
    pub async fn get_borrow_order(&self, order_id: &str) -> Result<ApiResponse> {
        let params = ParamsBuilder::new().with("orderId", order_id).build();
        self.call(ApiRequest::get("/api/v1/margin/borrow", params))
            .await
    }

    /// Outstanding borrows, all currencies when `currency` is `None`
    ///
    /// GET /api/v1/margin/borrow/outstanding
    pub async fn get_repay_record(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let params = ParamsBuilder::new().with_opt("currency", currency).build();
        self.call(ApiRequest::get("/api/v1/margin/borrow/outstanding", params))
            .await
    }

    /// Repaid borrows, all currencies when `currency` is `None`
    ///
    /// GET /api/v1/margin/borrow/repaid
    pub async fn get_repayment_record(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let params = ParamsBuilder::new().with_opt("currency", currency).build();
        self.call(ApiRequest::get("/api/v1/margin/borrow/repaid", params))
            .await
    }

    /// One-click repayment
    ///
    /// POST /api/v1/margin/repay/all
    pub async fn repay_all(
        &self,
        currency: &str,
        sequence: RepaySequence,
        size: Decimal,
    ) -> Result<ApiResponse> {
        let params = to_params(&RepayAllRequest {
            currency: currency.to_string(),
            sequence,
            size,
        })?;
        self.call(ApiRequest::post("/api/v1/margin/repay/all", params))
            .await
    }

    /// Repay a single loan
    ///
    /// POST /api/v1/margin/repay/single
    pub async fn repay_single(
        &self,
        currency: &str,
        trade_id: &str,
        size: Decimal,
    ) -> Result<ApiResponse> {
        let params = to_params(&RepaySingleRequest {
            currency: currency.to_string(),
            trade_id: trade_id.to_string(),
            size,
        })?;
        self.call(ApiRequest::post("/api/v1/margin/repay/single", params))
            .await
    }

    /// Borrow against cross or isolated margin
    ///
    /// POST /api/v2/margin/borrow
    pub async fn post_margin_borrow(&self, request: MarginBorrowRequest) -> Result<ApiResponse> {
        let params = to_params(&request)?;
        self.call(ApiRequest::post("/api/v2/margin/borrow", params))
            .await
    }

    /// One-click repayment for cross or isolated margin
    ///
    /// POST /api/v2/margin/repay/all
    pub async fn repay_all_v2(&self, request: MarginRepayAllRequest) -> Result<ApiResponse> {
        let params = to_params(&request)?;
        self.call(ApiRequest::post("/api/v2/margin/repay/all", params))
            .await
    }

    /// Repay a single cross or isolated loan
    ///
    /// POST /api/v2/margin/repay/single
    pub async fn repay_single_v2(&self, request: MarginRepaySingleRequest) -> Result<ApiResponse> {
        let params = to_params(&request)?;
        self.call(ApiRequest::post("/api/v2/margin/repay/single", params))
            .await
    }
}
