use std::sync::Arc;

use tracing::{debug, instrument};

use corelib::models::{PoolConfig, PoolId, PoolMetrics};

use crate::error::ConfigError;
use crate::store::PoolStateStore;
use crate::strategy::{self, FeeDecision};
use crate::updater::{self, SettlementOutcome};

/// Per-trade risk assessment and post-settlement bookkeeping for an
/// AMM-style swap venue.
///
/// The engine itself holds no pool state; everything lives in the
/// injected [`PoolStateStore`].
///
/// Caller obligations:
/// - within one pool, the host must serialize the sequence
///   `evaluate(T)` → settle `T` → `record(T)` against any other trade
///   on that pool; the engine provides no same-pool locking
/// - distinct pools are fully isolated and may be driven concurrently
///
/// `evaluate` and `record` are total: every cold-start or degenerate
/// input resolves to a documented default, never an error, because the
/// engine's contract is to always price a trade rather than block it.
pub struct FeeEngine {
    store: Arc<dyn PoolStateStore>,
}

impl FeeEngine {
    pub fn new(store: Arc<dyn PoolStateStore>) -> Self {
        Self { store }
    }

    /// Pre-trade fee quote in basis points, read-only.
    pub fn evaluate(&self, pool: &PoolId, current_metric: i64, trade_size: u64) -> u16 {
        self.evaluate_detailed(pool, current_metric, trade_size).fee_bps
    }

    /// Pre-trade fee quote with the scored inputs attached, for hosts
    /// that log or emit the reasoning alongside the charge.
    #[instrument(skip(self), target = "engine", fields(pool = %pool))]
    pub fn evaluate_detailed(
        &self,
        pool: &PoolId,
        current_metric: i64,
        trade_size: u64,
    ) -> FeeDecision {
        let config = self.config(pool);
        let metrics = self.metrics(pool);

        let decision =
            strategy::for_config(&config).compute_fee(&metrics, trade_size, current_metric);

        debug!(
            fee_bps = decision.fee_bps,
            ratio_x10 = decision.inputs.ratio_x10,
            impact = decision.inputs.impact,
            spike_count = decision.inputs.spike_count,
            score = ?decision.score,
            "trade evaluated"
        );

        decision
    }

    /// Fold a settled trade into the pool's history, using realized
    /// values. Degenerate trades (zero size, no metric) leave the state
    /// untouched.
    #[instrument(skip(self), target = "engine", fields(pool = %pool))]
    pub fn record(&self, pool: &PoolId, current_metric: Option<i64>, trade_size: u64) {
        let mut metrics = self.metrics(pool);

        match updater::apply_settlement(&mut metrics, trade_size, current_metric) {
            SettlementOutcome::Applied => {
                self.store.put_metrics(pool, metrics.clone());
                debug!(
                    avg_trade_size = metrics.avg_trade_size,
                    spike_streak = metrics.spike_streak,
                    "settlement recorded"
                );
            }
            outcome => {
                debug!(?outcome, "degenerate settlement skipped");
            }
        }
    }

    /// Replace the pool's configuration atomically.
    ///
    /// An invalid parameter set returns the validation error and leaves
    /// the prior configuration (or the defaults) untouched. Caller
    /// identity is the host's concern; only values are checked here.
    #[instrument(skip(self, config), target = "engine", fields(pool = %pool))]
    pub fn set_config(&self, pool: &PoolId, config: PoolConfig) -> Result<(), ConfigError> {
        crate::config::validate(&config)?;
        self.store.put_config(pool, config);

        debug!("pool configuration applied");
        Ok(())
    }

    /// Active configuration: the documented defaults until an explicit,
    /// validated write succeeds.
    pub fn config(&self, pool: &PoolId) -> PoolConfig {
        self.store.config(pool).unwrap_or_default()
    }

    /// Current history: the all-zero sentinel before the pool's first
    /// settled trade.
    pub fn metrics(&self, pool: &PoolId) -> PoolMetrics {
        self.store.metrics(pool).unwrap_or_default()
    }

    /// Seed the all-zero sentinel explicitly. Optional: lazy creation
    /// on the first recorded trade behaves identically.
    #[instrument(skip(self), target = "engine", fields(pool = %pool))]
    pub fn init_pool(&self, pool: &PoolId) {
        if self.store.metrics(pool).is_none() {
            self.store.put_metrics(pool, PoolMetrics::default());
            debug!("pool state initialized");
        }
    }
}
