use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Basis points denominator: 10_000 bps == 100%.
pub const BPS_DENOM: u16 = 10_000;

/// Opaque, comparable key identifying one trading pool.
///
/// The engine attaches no meaning to the bytes; hosts map their own
/// venue addressing onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolId(Uuid);

impl PoolId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PoolId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PoolId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

/// Unit of the reference metric the host supplies with each trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MetricKind {
    /// Discretized tick index. Deltas are consumed directly.
    #[default]
    Tick,

    /// Host-scaled raw price. Deltas are divided by `divisor` to land
    /// on the shared 0..=10 impact scale, then capped at 10.
    Price { divisor: u64 },
}

/// Per-pool mutable trade history.
///
/// Every field holds the zero/absent sentinel until the pool's first
/// settled trade; `avg_trade_size == 0` is the cold-start signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolMetrics {
    /// Metric observed after the most recent settled trade.
    pub last_metric: Option<i64>,

    /// Size of the most recent settled trade.
    pub last_trade_size: u64,

    /// Exponential moving average of settled trade sizes
    /// (90% history, 10% latest, floor division).
    pub avg_trade_size: u64,

    /// Consecutive oversized-trade streak. Saturating, never wraps.
    pub spike_streak: u32,
}

/// Parameters of the discrete weighted tier model.
///
/// Fee tiers are half-open: `score < threshold_low` pays `fee_low_bps`,
/// `threshold_low <= score < threshold_high` pays `fee_med_bps`,
/// `score >= threshold_high` pays `fee_high_bps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredParams {
    pub fee_low_bps: u16,
    pub fee_med_bps: u16,
    pub fee_high_bps: u16,

    pub threshold_low: u16,
    pub threshold_high: u16,

    /// Weight on the relative-size ratio.
    pub w_size: u16,
    /// Weight on the metric impact.
    pub w_impact: u16,
    /// Weight on the spike streak.
    pub w_spike: u16,
}

impl Default for TieredParams {
    fn default() -> Self {
        Self {
            fee_low_bps: 5,
            fee_med_bps: 20,
            fee_high_bps: 60,
            threshold_low: 50,
            threshold_high: 150,
            w_size: 50,
            w_impact: 30,
            w_spike: 20,
        }
    }
}

/// Parameters of the continuous quadratic model.
///
/// `fee = clamp(base + k1·delta + k2·delta², base, max)`, all terms in
/// bps with floor division applied per term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadraticParams {
    pub base_fee_bps: u16,
    pub max_fee_bps: u16,

    /// Linear coefficient, stored ×10 (`5` means 0.5 bps per unit delta).
    pub k1_x10: u16,
    /// Quadratic coefficient, stored ×10 (`2` means 0.2 bps per delta²).
    pub k2_x10: u16,
}

impl Default for QuadraticParams {
    fn default() -> Self {
        Self {
            base_fee_bps: 5,
            max_fee_bps: 60,
            k1_x10: 5,
            k2_x10: 2,
        }
    }
}

/// Fee model selector with its parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyParams {
    Tiered(TieredParams),
    Quadratic(QuadraticParams),
}

/// Per-pool tunable configuration.
///
/// An unconfigured pool runs these defaults: the tiered model over a
/// tick-valued metric. Defaults stay active until an explicit,
/// validated configuration write succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub metric: MetricKind,
    pub strategy: StrategyParams,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            metric: MetricKind::Tick,
            strategy: StrategyParams::Tiered(TieredParams::default()),
        }
    }
}
