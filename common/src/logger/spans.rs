use tracing::{Level, Span};

use super::TradeId;

/// Root span for one trade lifecycle (inherits into evaluate/record).
pub fn trade_span(trade_id: &TradeId) -> Span {
    tracing::span!(
        Level::INFO,
        "trade",
        trade_id = %trade_id
    )
}

/// Child span scoped to work on a single pool.
pub fn pool_span(pool: &str) -> Span {
    tracing::span!(Level::INFO, "pool", pool = %pool)
}
