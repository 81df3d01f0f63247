use corelib::models::PoolMetrics;

use crate::calc;

/// EMA weights: 90% history, 10% latest, floor division.
const EMA_KEEP: u128 = 9;
const EMA_DENOM: u128 = 10;

/// What happened when a settled trade was applied to pool state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementOutcome {
    Applied,
    /// Zero-size trades carry no information; folding them into the
    /// average would corrupt it with a zero-weight sample.
    SkippedZeroSize,
    /// The host had no valid post-trade metric to report.
    SkippedNoMetric,
}

/// Fold one settled trade into the pool's history.
///
/// Runs strictly after the trade has settled at the host, with realized
/// values. Applies, in order:
/// - `last_metric` := the realized metric (unconditional overwrite)
/// - `avg_trade_size` := trade size on cold start, else the 90/10 EMA
/// - `spike_streak` += 1 if the trade's relative size strictly exceeds
///   the spike threshold (saturating), else reset to 0
/// - `last_trade_size` := trade size
///
/// Degenerate trades skip the whole update; the state is untouched.
pub fn apply_settlement(
    metrics: &mut PoolMetrics,
    trade_size: u64,
    current_metric: Option<i64>,
) -> SettlementOutcome {
    let Some(metric) = current_metric else {
        return SettlementOutcome::SkippedNoMetric;
    };
    if trade_size == 0 {
        return SettlementOutcome::SkippedZeroSize;
    }

    // The spike test runs against the average this trade was scored
    // with, not the average after it is folded in. Cold start yields
    // the neutral 1.0 ratio and therefore never counts as a spike.
    let ratio_x10 = calc::relative_size_x10(trade_size, metrics.avg_trade_size);

    metrics.last_metric = Some(metric);
    metrics.avg_trade_size = next_average(metrics.avg_trade_size, trade_size);
    metrics.spike_streak = if ratio_x10 > calc::SPIKE_RATIO_X10 {
        metrics.spike_streak.saturating_add(1)
    } else {
        0
    };
    metrics.last_trade_size = trade_size;

    SettlementOutcome::Applied
}

fn next_average(avg_trade_size: u64, trade_size: u64) -> u64 {
    if avg_trade_size == 0 {
        // Cold start: the first real trade seeds the average outright.
        return trade_size;
    }

    ((avg_trade_size as u128 * EMA_KEEP + trade_size as u128) / EMA_DENOM) as u64
}
