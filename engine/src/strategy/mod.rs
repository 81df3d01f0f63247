pub mod quadratic;
pub mod tiered;

use corelib::models::{PoolConfig, PoolMetrics, StrategyParams};

use crate::calc::RiskInputs;

/// One fee decision together with the inputs that produced it, so hosts
/// can log or emit the reasoning alongside the charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeDecision {
    /// Fee to apply to the trade, in basis points.
    pub fee_bps: u16,

    /// Derived metrics the strategy scored.
    pub inputs: RiskInputs,

    /// Weighted risk score in 0..=255. `None` for the quadratic model,
    /// which maps impact to a fee directly.
    pub score: Option<u16>,
}

/// Seam shared by both fee models.
///
/// A strategy:
/// - is stateless; all state arrives as `PoolMetrics`
/// - is total: any well-typed input yields a fee, never an error
/// - reads the pool state as it stood *before* the trade
pub trait RiskFeeStrategy {
    fn compute_fee(
        &self,
        metrics: &PoolMetrics,
        trade_size: u64,
        current_metric: i64,
    ) -> FeeDecision;
}

/// Select the strategy a pool's configuration names.
pub fn for_config(config: &PoolConfig) -> Box<dyn RiskFeeStrategy + '_> {
    match &config.strategy {
        StrategyParams::Tiered(params) => {
            Box::new(tiered::TieredStrategy::new(params, config.metric))
        }
        StrategyParams::Quadratic(params) => {
            Box::new(quadratic::QuadraticStrategy::new(params, config.metric))
        }
    }
}
