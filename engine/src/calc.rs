use corelib::models::{MetricKind, PoolMetrics};

/// Fixed-point scale for size ratios: `10` == 1.0. Floor division.
pub const RATIO_SCALE: u64 = 10;

/// Relative-size cap, ×10 (10.0). A single outsized trade cannot push
/// the ratio past this, so it cannot saturate downstream scoring alone.
pub const RATIO_CAP_X10: u64 = 100;

/// Upper bound of the normalized 0..=10 impact scale for price metrics.
pub const IMPACT_CAP: u64 = 10;

/// Spike threshold, ×10. Strictly greater counts: exactly 5.0× is not
/// a spike.
pub const SPIKE_RATIO_X10: u64 = 50;

/// Cap applied to the spike streak when it feeds scoring. The stored
/// streak itself is not capped here.
pub const SPIKE_SCORE_CAP: u32 = 10;

/// Derived risk inputs for one prospective trade, computed against the
/// pool state as it stood before that trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskInputs {
    /// Trade size relative to the moving average, ×10, capped at 100.
    pub ratio_x10: u64,
    /// Metric movement since the last settled trade.
    pub impact: u64,
    /// Spike streak as seen by scoring, capped at 10.
    pub spike_count: u32,
}

/// Trade size over the moving average, ×10, floor, capped.
///
/// Cold start (`avg_trade_size == 0`) returns the neutral 1.0: there is
/// no history to compare against, so the trade is neither small nor a
/// spike, and no division by zero can occur.
pub fn relative_size_x10(trade_size: u64, avg_trade_size: u64) -> u64 {
    if avg_trade_size == 0 {
        return RATIO_SCALE;
    }

    let ratio = (trade_size as u128 * RATIO_SCALE as u128) / avg_trade_size as u128;
    ratio.min(RATIO_CAP_X10 as u128) as u64
}

/// Absolute metric movement since the last settled trade.
///
/// No prior metric (cold start) yields 0. Tick deltas are consumed
/// directly; price deltas are divided by the configured divisor to land
/// on the 0..=10 scale, then capped. A zero divisor is treated as 1
/// rather than faulting: evaluation is total.
pub fn impact(kind: MetricKind, current_metric: i64, last_metric: Option<i64>) -> u64 {
    let Some(last) = last_metric else {
        return 0;
    };

    let delta = current_metric.abs_diff(last);
    match kind {
        MetricKind::Tick => delta,
        MetricKind::Price { divisor } => (delta / divisor.max(1)).min(IMPACT_CAP),
    }
}

/// Spike streak as scoring sees it.
pub fn spike_count(spike_streak: u32) -> u32 {
    spike_streak.min(SPIKE_SCORE_CAP)
}

/// Derive all three risk inputs from stored state plus the incoming trade.
pub fn derive(
    kind: MetricKind,
    metrics: &PoolMetrics,
    trade_size: u64,
    current_metric: i64,
) -> RiskInputs {
    RiskInputs {
        ratio_x10: relative_size_x10(trade_size, metrics.avg_trade_size),
        impact: impact(kind, current_metric, metrics.last_metric),
        spike_count: spike_count(metrics.spike_streak),
    }
}
