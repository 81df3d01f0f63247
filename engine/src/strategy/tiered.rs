use corelib::models::{MetricKind, PoolMetrics, TieredParams};

use super::{FeeDecision, RiskFeeStrategy};
use crate::calc::{self, RATIO_SCALE, RiskInputs};

/// Upper bound of the weighted risk score. Saturating, never wraps.
pub const SCORE_CAP: u16 = 255;

/// Discrete weighted model: combine the three risk inputs into a
/// bounded score, then map the score through ordered fee tiers.
pub struct TieredStrategy<'c> {
    params: &'c TieredParams,
    metric: MetricKind,
}

impl<'c> TieredStrategy<'c> {
    pub fn new(params: &'c TieredParams, metric: MetricKind) -> Self {
        Self { params, metric }
    }
}

impl RiskFeeStrategy for TieredStrategy<'_> {
    fn compute_fee(
        &self,
        metrics: &PoolMetrics,
        trade_size: u64,
        current_metric: i64,
    ) -> FeeDecision {
        let inputs = calc::derive(self.metric, metrics, trade_size, current_metric);
        let score = weighted_score(self.params, &inputs);

        FeeDecision {
            fee_bps: select_tier(self.params, score),
            inputs,
            score: Some(score),
        }
    }
}

/// `clamp(w1·ratio + w2·impact + w3·spikes, 0, 255)`.
///
/// The ratio is carried ×10, so its weighted term divides by the scale
/// (floor) before summing; a neutral 1.0 ratio contributes exactly `w1`.
fn weighted_score(params: &TieredParams, inputs: &RiskInputs) -> u16 {
    let size_term = (params.w_size as u128 * inputs.ratio_x10 as u128) / RATIO_SCALE as u128;
    let impact_term = params.w_impact as u128 * inputs.impact as u128;
    let spike_term = params.w_spike as u128 * inputs.spike_count as u128;

    let raw = size_term
        .saturating_add(impact_term)
        .saturating_add(spike_term);

    raw.min(SCORE_CAP as u128) as u16
}

/// Half-open tier boundaries: a score exactly at a threshold pays the
/// tier above it.
fn select_tier(params: &TieredParams, score: u16) -> u16 {
    if score < params.threshold_low {
        params.fee_low_bps
    } else if score < params.threshold_high {
        params.fee_med_bps
    } else {
        params.fee_high_bps
    }
}
