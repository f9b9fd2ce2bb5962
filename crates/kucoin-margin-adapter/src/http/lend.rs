/*
[INPUT]:  Lend order parameters, order ids and page selection
[OUTPUT]: Raw response envelopes for the lend order lifecycle and history
[POS]:    HTTP layer - lend endpoints (require "Trade" permission)
[UPDATE]: When adding new lend endpoints or changing parameters
*/

use rust_decimal::Decimal;

use crate::http::transport::{ApiRequest, Params, ParamsBuilder, Transport, to_params};
use crate::http::{MarginClient, Result};
use crate::types::{ApiResponse, AutoLendRequest, LendOrderRequest, PageRequest};

fn currency_page(currency: Option<&str>, page: PageRequest) -> Params {
    ParamsBuilder::new()
        .with_opt("currency", currency)
        .page(page)
        .build()
}

fn status_currency_page(status: Option<&str>, currency: Option<&str>, page: PageRequest) -> Params {
    ParamsBuilder::new()
        .with_opt("currency", currency)
        .with_opt("status", status)
        .page(page)
        .build()
}

impl<T: Transport> MarginClient<T> {
    /// Post a lend order
    ///
    /// POST /api/v1/margin/lend
    pub async fn post_lend_order(
        &self,
        currency: &str,
        size: Decimal,
        daily_int_rate: Decimal,
        term: u32,
    ) -> Result<ApiResponse> {
        let params = to_params(&LendOrderRequest {
            currency: currency.to_string(),
            size,
            daily_int_rate,
            term,
        })?;
        self.call(ApiRequest::post("/api/v1/margin/lend", params))
            .await
    }

    /// Cancel a lend order
    ///
    /// DELETE /api/v1/margin/lend/{order_id}
    ///
    /// The id is interpolated as given and must be path-safe. The HTTP
    /// transport percent-encodes `?` and `#`, but a `/` still adds a segment.
    pub async fn cancel_lend_order(&self, order_id: &str) -> Result<ApiResponse> {
        let endpoint = format!("/api/v1/margin/lend/{}", order_id);
        self.call(ApiRequest::delete(endpoint, Params::new())).await
    }

    /// Turn auto-lend on or off for a currency
    ///
    /// POST /api/v1/margin/toggle-auto-lend
    pub async fn set_auto_lend(&self, request: AutoLendRequest) -> Result<ApiResponse> {
        let params = to_params(&request)?;
        self.call(ApiRequest::post("/api/v1/margin/toggle-auto-lend", params))
            .await
    }

    /// Active lend orders
    ///
    /// GET /api/v1/margin/lend/active
    pub async fn get_active_order(
        &self,
        currency: Option<&str>,
        page: PageRequest,
    ) -> Result<ApiResponse> {
        let params = currency_page(currency, page);
        self.call(ApiRequest::get("/api/v1/margin/lend/active", params))
            .await
    }

    /// Filled or cancelled lend orders
    ///
    /// GET /api/v1/margin/lend/done
    pub async fn get_lent_history(
        &self,
        currency: Option<&str>,
        page: PageRequest,
    ) -> Result<ApiResponse> {
        let params = currency_page(currency, page);
        self.call(ApiRequest::get("/api/v1/margin/lend/done", params))
            .await
    }

    /// Unsettled lend trades
    ///
    /// GET /api/v1/margin/lend/trade/unsettled
    pub async fn get_active_lend_orders_list(
        &self,
        currency: Option<&str>,
        page: PageRequest,
    ) -> Result<ApiResponse> {
        let params = currency_page(currency, page);
        self.call(ApiRequest::get("/api/v1/margin/lend/trade/unsettled", params))
            .await
    }

    /// Settled lend trades
    ///
    /// GET /api/v1/margin/lend/trade/settled
    pub async fn get_settled_lend_order_history(
        &self,
        currency: Option<&str>,
        page: PageRequest,
    ) -> Result<ApiResponse> {
        let params = currency_page(currency, page);
        self.call(ApiRequest::get("/api/v1/margin/lend/trade/settled", params))
            .await
    }

    /// Lending summary of the main account
    ///
    /// GET /api/v1/margin/lend/assets
    pub async fn get_account_lend_record(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let params = ParamsBuilder::new().with_opt("currency", currency).build();
        self.call(ApiRequest::get("/api/v1/margin/lend/assets", params))
            .await
    }

    /// Paginated lend orders (v2)
    ///
    /// GET /api/v2/margin/lend/orders
    pub async fn get_lend_order(
        &self,
        status: Option<&str>,
        currency: Option<&str>,
        page: PageRequest,
    ) -> Result<ApiResponse> {
        let params = status_currency_page(status, currency, page);
        self.call(ApiRequest::get("/api/v2/margin/lend/orders", params))
            .await
    }

    /// Single lend order (v2)
    ///
    /// GET /api/v2/margin/lend?orderId={order_id}
    pub async fn get_single_lend_order(&self, order_id: &str) -> Result<ApiResponse> {
        let params = ParamsBuilder::new().with("orderId", order_id).build();
        self.call(ApiRequest::get("/api/v2/margin/lend", params))
            .await
    }

    /// Paginated lending records (v2)
    ///
    /// GET /api/v2/margin/lend/trade/orders
    pub async fn get_lend_records(
        &self,
        status: Option<&str>,
        currency: Option<&str>,
        page: PageRequest,
    ) -> Result<ApiResponse> {
        let params = status_currency_page(status, currency, page);
        self.call(ApiRequest::get("/api/v2/margin/lend/trade/orders", params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::MarginClient;
    use crate::http::mock::RecordingTransport;
    use crate::types::{AutoLendRequest, PageRequest};
    use reqwest::Method;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_cancel_lend_order_interpolates_id() {
        let transport = RecordingTransport::new();
        let client = MarginClient::new(&transport);

        client.cancel_lend_order("abc123").await.expect("cancel_lend_order");

        let sent = transport.single();
        assert_eq!(sent.method, Method::DELETE);
        assert_eq!(sent.path, "/api/v1/margin/lend/abc123");
        assert!(sent.params.is_empty());
    }

    #[tokio::test]
    async fn test_get_active_order_with_page() {
        let transport = RecordingTransport::new();
        let client = MarginClient::new(&transport);

        client
            .get_active_order(Some("BTC"), PageRequest::new(2, 50))
            .await
            .expect("get_active_order");

        let sent = transport.single();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.path, "/api/v1/margin/lend/active");
        assert_eq!(
            Value::Object(sent.params),
            json!({"currency": "BTC", "currentPage": 2, "pageSize": 50})
        );
    }

    #[tokio::test]
    async fn test_paginated_queries_without_filters_send_nothing() {
        let transport = RecordingTransport::new();
        let client = MarginClient::new(&transport);

        client
            .get_lent_history(None, PageRequest::default())
            .await
            .expect("get_lent_history");
        client
            .get_lend_order(None, None, PageRequest::default())
            .await
            .expect("get_lend_order");

        for sent in transport.requests() {
            assert!(sent.params.is_empty(), "unexpected params for {}", sent.path);
        }
    }

    #[tokio::test]
    async fn test_post_lend_order() {
        let transport = RecordingTransport::new();
        let client = MarginClient::new(&transport);

        client
            .post_lend_order("BTC", "0.51".parse().unwrap(), "0.0001".parse().unwrap(), 7)
            .await
            .expect("post_lend_order");

        let sent = transport.single();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.path, "/api/v1/margin/lend");
        assert_eq!(
            Value::Object(sent.params),
            json!({"currency": "BTC", "size": "0.51", "dailyIntRate": "0.0001", "term": 7})
        );
    }

    #[tokio::test]
    async fn test_set_auto_lend() {
        let transport = RecordingTransport::new();
        let client = MarginClient::new(&transport);

        client
            .set_auto_lend(AutoLendRequest::enable(
                "USDT",
                "100".parse().unwrap(),
                "0.002".parse().unwrap(),
                28,
            ))
            .await
            .expect("set_auto_lend");

        let sent = transport.single();
        assert_eq!(sent.path, "/api/v1/margin/toggle-auto-lend");
        assert_eq!(
            Value::Object(sent.params),
            json!({
                "currency": "USDT",
                "isEnable": true,
                "retainSize": "100",
                "dailyIntRate": "0.002",
                "term": 28
            })
        );
    }

    #[tokio::test]
    async fn test_v2_lend_queries() {
        let transport = RecordingTransport::new();
        let client = MarginClient::new(&transport);

        client
            .get_lend_records(Some("CLEAR"), Some("USDT"), PageRequest::new(1, 10))
            .await
            .expect("get_lend_records");
        client
            .get_single_lend_order("6385c0b3e0debdb6feb06e97")
            .await
            .expect("get_single_lend_order");

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/api/v2/margin/lend/trade/orders");
        assert_eq!(
            Value::Object(requests[0].params.clone()),
            json!({"currency": "USDT", "status": "CLEAR", "currentPage": 1, "pageSize": 10})
        );
        assert_eq!(requests[1].path, "/api/v2/margin/lend");
        assert_eq!(
            Value::Object(requests[1].params.clone()),
            json!({"orderId": "6385c0b3e0debdb6feb06e97"})
        );
    }
}
