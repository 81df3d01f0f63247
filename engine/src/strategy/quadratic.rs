use corelib::models::{MetricKind, PoolMetrics, QuadraticParams};

use super::{FeeDecision, RiskFeeStrategy};
use crate::calc;

/// Coefficients are stored ×10; every term divides its product by this
/// scale with floor rounding *before* summing, so boundary fees are
/// reproducible bit-for-bit.
pub const COEF_SCALE: u128 = 10;

/// Continuous impact model: map metric movement through a quadratic
/// polynomial, clamped to `[base_fee, max_fee]`.
///
/// The quadratic term penalizes large single-trade impacts
/// super-linearly, so an attack whose profit scales with the impact it
/// causes pays more than proportionally for it.
pub struct QuadraticStrategy<'c> {
    params: &'c QuadraticParams,
    metric: MetricKind,
}

impl<'c> QuadraticStrategy<'c> {
    pub fn new(params: &'c QuadraticParams, metric: MetricKind) -> Self {
        Self { params, metric }
    }
}

impl RiskFeeStrategy for QuadraticStrategy<'_> {
    fn compute_fee(
        &self,
        metrics: &PoolMetrics,
        trade_size: u64,
        current_metric: i64,
    ) -> FeeDecision {
        let inputs = calc::derive(self.metric, metrics, trade_size, current_metric);

        FeeDecision {
            fee_bps: polynomial_fee(self.params, inputs.impact),
            inputs,
            score: None,
        }
    }
}

/// `clamp(base + k1·delta + k2·delta², base, max)`, floor per term.
fn polynomial_fee(params: &QuadraticParams, delta: u64) -> u16 {
    let d = delta as u128;

    let linear = (params.k1_x10 as u128).saturating_mul(d) / COEF_SCALE;
    let quadratic = (params.k2_x10 as u128)
        .saturating_mul(d)
        .saturating_mul(d)
        / COEF_SCALE;

    let raw = (params.base_fee_bps as u128)
        .saturating_add(linear)
        .saturating_add(quadratic);

    // Not `clamp`: a store can hand back a config that never passed
    // validation, and evaluation must not panic on inverted bounds.
    raw.max(params.base_fee_bps as u128)
        .min(params.max_fee_bps as u128) as u16
}
