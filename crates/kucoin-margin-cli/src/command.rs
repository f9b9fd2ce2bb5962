/*
[INPUT]:  Parsed subcommand arguments
[OUTPUT]: One endpoint binding call per subcommand
[POS]:    Command layer - maps CLI subcommands onto MarginClient bindings
[UPDATE]: When endpoint bindings are added or their parameters change
*/

use clap::{Args, Subcommand};
use kucoin_margin_adapter::{
    ApiResponse, AutoLendRequest, BorrowOrderRequest, BorrowOrderType, MarginBorrowRequest,
    MarginClient, MarginRepayAllRequest, MarginRepaySingleRequest, PageRequest, RepaySequence,
    Result, RiskLimitQuery, TimeInForce, Transport, TransferableQuery,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Page selection flags shared by paginated queries
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageArgs {
    #[arg(long)]
    pub current_page: Option<u32>,
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest {
            current_page: args.current_page,
            page_size: args.page_size,
        }
    }
}

/// Cross/isolated selection for v2 endpoints
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeArgs {
    /// Use the isolated margin account of --symbol
    #[arg(long)]
    pub isolated: bool,
    /// Trading pair, e.g. BTC-USDT
    #[arg(long)]
    pub symbol: Option<String>,
}

/// One subcommand per endpoint binding
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// POST /api/v1/margin/borrow
    PostBorrowOrder {
        #[arg(long)]
        currency: String,
        #[arg(long = "type")]
        order_type: BorrowOrderType,
        #[arg(long)]
        size: Decimal,
        #[arg(long)]
        max_rate: Option<Decimal>,
        /// Acceptable terms in days, comma separated
        #[arg(long, value_delimiter = ',')]
        term: Vec<u32>,
    },
    /// GET /api/v1/margin/borrow
    GetBorrowOrder {
        #[arg(long)]
        order_id: String,
    },
    /// GET /api/v1/margin/borrow/outstanding
    GetRepayRecord {
        #[arg(long)]
        currency: Option<String>,
    },
    /// GET /api/v1/margin/borrow/repaid
    GetRepaymentRecord {
        #[arg(long)]
        currency: Option<String>,
    },
    /// POST /api/v1/margin/repay/all
    RepayAll {
        #[arg(long)]
        currency: String,
        #[arg(long)]
        sequence: RepaySequence,
        #[arg(long)]
        size: Decimal,
    },
    /// POST /api/v1/margin/repay/single
    RepaySingle {
        #[arg(long)]
        currency: String,
        #[arg(long)]
        trade_id: String,
        #[arg(long)]
        size: Decimal,
    },
    /// POST /api/v1/margin/lend
    PostLendOrder {
        #[arg(long)]
        currency: String,
        #[arg(long)]
        size: Decimal,
        #[arg(long)]
        daily_int_rate: Decimal,
        #[arg(long)]
        term: u32,
    },
    /// DELETE /api/v1/margin/lend/{orderId}
    CancelLendOrder {
        #[arg(long)]
        order_id: String,
    },
    /// POST /api/v1/margin/toggle-auto-lend
    SetAutoLend {
        #[arg(long)]
        currency: String,
        #[arg(long, required = true, action = clap::ArgAction::Set)]
        enable: bool,
        #[arg(long)]
        retain_size: Option<Decimal>,
        #[arg(long)]
        daily_int_rate: Option<Decimal>,
        #[arg(long)]
        term: Option<u32>,
    },
    /// GET /api/v1/margin/lend/active
    GetActiveOrder {
        #[arg(long)]
        currency: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// GET /api/v1/margin/lend/done
    GetLentHistory {
        #[arg(long)]
        currency: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// GET /api/v1/margin/lend/trade/unsettled
    GetActiveLendOrdersList {
        #[arg(long)]
        currency: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// GET /api/v1/margin/lend/trade/settled
    GetSettledLendOrderHistory {
        #[arg(long)]
        currency: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// GET /api/v1/margin/lend/assets
    GetAccountLendRecord {
        #[arg(long)]
        currency: Option<String>,
    },
    /// GET /api/v1/margin/market
    GetLendingMarketData {
        #[arg(long)]
        currency: String,
        #[arg(long)]
        term: Option<u32>,
    },
    /// GET /api/v1/margin/trade/last
    GetMarginFillsTradeData {
        #[arg(long)]
        currency: String,
    },
    /// GET /api/v2/margin/lend/config
    GetLendConfig {
        #[arg(long)]
        currency: Option<String>,
    },
    /// GET /api/v2/margin/lend/market
    GetLendMarkets {
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        term: Option<u32>,
    },
    /// GET /api/v2/margin/lend/orders
    GetLendOrder {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        currency: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// GET /api/v2/margin/lend
    GetSingleLendOrder {
        #[arg(long)]
        order_id: String,
    },
    /// GET /api/v2/margin/lend/trade/orders
    GetLendRecords {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        currency: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// POST /api/v2/margin/borrow
    PostMarginBorrow {
        #[command(flatten)]
        scope: ScopeArgs,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        size: Decimal,
        #[arg(long)]
        time_in_force: Option<TimeInForce>,
    },
    /// POST /api/v2/margin/repay/all
    RepayAllV2 {
        #[command(flatten)]
        scope: ScopeArgs,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        size: Decimal,
        #[arg(long)]
        sequence: Option<RepaySequence>,
    },
    /// POST /api/v2/margin/repay/single
    RepaySingleV2 {
        #[command(flatten)]
        scope: ScopeArgs,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        size: Decimal,
        #[arg(long)]
        trade_id: String,
    },
    /// GET /api/v2/margin/accounts
    GetMarginAccounts {
        #[arg(long)]
        quote_currency: Option<String>,
    },
    /// GET /api/v2/isolated/accounts
    GetIsolatedAccounts {
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        quote_currency: Option<String>,
    },
    /// GET /api/v2/margin/transferable
    GetTransferable {
        #[command(flatten)]
        scope: ScopeArgs,
        #[arg(long)]
        currency: String,
    },
    /// GET /api/v2/margin/riskLimits
    GetRiskLimits {
        #[command(flatten)]
        scope: ScopeArgs,
        #[arg(long)]
        currency: Option<String>,
    },
}

impl ApiCommand {
    /// Issue the binding call this subcommand stands for
    pub async fn execute<T: Transport>(&self, client: &MarginClient<T>) -> Result<ApiResponse> {
        debug!(command = ?self, "executing command");
        match self {
            ApiCommand::PostBorrowOrder {
                currency,
                order_type,
                size,
                max_rate,
                term,
            } => {
                let mut request =
                    BorrowOrderRequest::new(currency.as_str(), *order_type, *size).terms(term);
                request.max_rate = *max_rate;
                client.post_borrow_order(request).await
            }
            ApiCommand::GetBorrowOrder { order_id } => client.get_borrow_order(order_id).await,
            ApiCommand::GetRepayRecord { currency } => {
                client.get_repay_record(currency.as_deref()).await
            }
            ApiCommand::GetRepaymentRecord { currency } => {
                client.get_repayment_record(currency.as_deref()).await
            }
            ApiCommand::RepayAll {
                currency,
                sequence,
                size,
            } => client.repay_all(currency, *sequence, *size).await,
            ApiCommand::RepaySingle {
                currency,
                trade_id,
                size,
            } => client.repay_single(currency, trade_id, *size).await,
            ApiCommand::PostLendOrder {
                currency,
                size,
                daily_int_rate,
                term,
            } => {
                client
                    .post_lend_order(currency, *size, *daily_int_rate, *term)
                    .await
            }
            ApiCommand::CancelLendOrder { order_id } => client.cancel_lend_order(order_id).await,
            ApiCommand::SetAutoLend {
                currency,
                enable,
                retain_size,
                daily_int_rate,
                term,
            } => {
                client
                    .set_auto_lend(AutoLendRequest {
                        currency: currency.clone(),
                        is_enable: *enable,
                        retain_size: *retain_size,
                        daily_int_rate: *daily_int_rate,
                        term: *term,
                    })
                    .await
            }
            ApiCommand::GetActiveOrder { currency, page } => {
                client
                    .get_active_order(currency.as_deref(), (*page).into())
                    .await
            }
            ApiCommand::GetLentHistory { currency, page } => {
                client
                    .get_lent_history(currency.as_deref(), (*page).into())
                    .await
            }
            ApiCommand::GetActiveLendOrdersList { currency, page } => {
                client
                    .get_active_lend_orders_list(currency.as_deref(), (*page).into())
                    .await
            }
            ApiCommand::GetSettledLendOrderHistory { currency, page } => {
                client
                    .get_settled_lend_order_history(currency.as_deref(), (*page).into())
                    .await
            }
            ApiCommand::GetAccountLendRecord { currency } => {
                client.get_account_lend_record(currency.as_deref()).await
            }
            ApiCommand::GetLendingMarketData { currency, term } => {
                client.get_lending_market_data(currency, *term).await
            }
            ApiCommand::GetMarginFillsTradeData { currency } => {
                client.get_margin_fills_trade_data(currency).await
            }
            ApiCommand::GetLendConfig { currency } => {
                client.get_lend_config(currency.as_deref()).await
            }
            ApiCommand::GetLendMarkets { currency, term } => {
                client.get_lend_markets(currency.as_deref(), *term).await
            }
            ApiCommand::GetLendOrder {
                status,
                currency,
                page,
            } => {
                client
                    .get_lend_order(status.as_deref(), currency.as_deref(), (*page).into())
                    .await
            }
            ApiCommand::GetSingleLendOrder { order_id } => {
                client.get_single_lend_order(order_id).await
            }
            ApiCommand::GetLendRecords {
                status,
                currency,
                page,
            } => {
                client
                    .get_lend_records(status.as_deref(), currency.as_deref(), (*page).into())
                    .await
            }
            ApiCommand::PostMarginBorrow {
                scope,
                currency,
                size,
                time_in_force,
            } => {
                client
                    .post_margin_borrow(MarginBorrowRequest {
                        is_isolated: scope.isolated,
                        symbol: scope.symbol.clone(),
                        currency: currency.clone(),
                        size: *size,
                        time_in_force: *time_in_force,
                    })
                    .await
            }
            ApiCommand::RepayAllV2 {
                scope,
                currency,
                size,
                sequence,
            } => {
                client
                    .repay_all_v2(MarginRepayAllRequest {
                        is_isolated: scope.isolated,
                        symbol: scope.symbol.clone(),
                        currency: currency.clone(),
                        size: *size,
                        sequence: *sequence,
                    })
                    .await
            }
            ApiCommand::RepaySingleV2 {
                scope,
                currency,
                size,
                trade_id,
            } => {
                client
                    .repay_single_v2(MarginRepaySingleRequest {
                        is_isolated: scope.isolated,
                        symbol: scope.symbol.clone(),
                        currency: currency.clone(),
                        size: *size,
                        trade_id: trade_id.clone(),
                    })
                    .await
            }
            ApiCommand::GetMarginAccounts { quote_currency } => {
                client.get_margin_accounts(quote_currency.as_deref()).await
            }
            ApiCommand::GetIsolatedAccounts {
                symbol,
                quote_currency,
            } => {
                client
                    .get_isolated_accounts(symbol.as_deref(), quote_currency.as_deref())
                    .await
            }
            ApiCommand::GetTransferable { scope, currency } => {
                client
                    .get_transferable(TransferableQuery {
                        currency: currency.clone(),
                        is_isolated: scope.isolated.then_some(true),
                        symbol: scope.symbol.clone(),
                    })
                    .await
            }
            ApiCommand::GetRiskLimits { scope, currency } => {
                client
                    .get_risk_limits(RiskLimitQuery {
                        is_isolated: scope.isolated,
                        symbol: scope.symbol.clone(),
                        currency: currency.clone(),
                    })
                    .await
            }
        }
    }
}
