use std::collections::HashMap;

use parking_lot::Mutex;

use corelib::models::{PoolConfig, PoolId, PoolMetrics};

/// Host-supplied keyed storage for per-pool state.
///
/// Guarantees the engine relies on:
/// - get/set semantics keyed by `PoolId`; a set is visible to the next
///   get for the same pool
/// - pools are fully isolated; writing one pool never disturbs another
///
/// The engine never deletes entries; venue teardown is the host's
/// lifecycle to manage.
pub trait PoolStateStore: Send + Sync {
    fn config(&self, pool: &PoolId) -> Option<PoolConfig>;

    fn put_config(&self, pool: &PoolId, config: PoolConfig);

    fn metrics(&self, pool: &PoolId) -> Option<PoolMetrics>;

    fn put_metrics(&self, pool: &PoolId, metrics: PoolMetrics);
}

/// Reference in-memory store. Hosts with an external key-value backend
/// implement `PoolStateStore` over it instead.
#[derive(Default)]
pub struct InMemoryPoolStore {
    configs: Mutex<HashMap<PoolId, PoolConfig>>,
    metrics: Mutex<HashMap<PoolId, PoolMetrics>>,
}

impl InMemoryPoolStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PoolStateStore for InMemoryPoolStore {
    fn config(&self, pool: &PoolId) -> Option<PoolConfig> {
        self.configs.lock().get(pool).copied()
    }

    fn put_config(&self, pool: &PoolId, config: PoolConfig) {
        self.configs.lock().insert(*pool, config);
    }

    fn metrics(&self, pool: &PoolId) -> Option<PoolMetrics> {
        self.metrics.lock().get(pool).cloned()
    }

    fn put_metrics(&self, pool: &PoolId, metrics: PoolMetrics) {
        self.metrics.lock().insert(*pool, metrics);
    }
}
