use std::sync::Arc;

use corelib::models::{
    MetricKind, PoolConfig, PoolId, QuadraticParams, StrategyParams, TieredParams,
};
use engine::{ConfigError, FeeEngine, InMemoryPoolStore};

fn mk_engine() -> FeeEngine {
    common::logger::init_logger("engine-tests");
    FeeEngine::new(Arc::new(InMemoryPoolStore::new()))
}

fn quadratic_config() -> PoolConfig {
    PoolConfig {
        metric: MetricKind::Tick,
        strategy: StrategyParams::Quadratic(QuadraticParams::default()),
    }
}

/// Cold start on defaults: ratio 1.0, impact 0, no spikes. Score is
/// exactly w1 = 50, which sits on the low threshold and therefore pays
/// the medium tier.
#[test]
fn cold_start_pays_the_medium_tier() {
    let eng = mk_engine();
    let pool = PoolId::new();

    let decision = eng.evaluate_detailed(&pool, 1_000, 100);
    assert_eq!(decision.inputs.ratio_x10, 10);
    assert_eq!(decision.inputs.impact, 0);
    assert_eq!(decision.inputs.spike_count, 0);
    assert_eq!(decision.score, Some(50));
    assert_eq!(decision.fee_bps, 20);
}

#[test]
fn quadratic_cold_start_pays_base_fee() {
    let eng = mk_engine();
    let pool = PoolId::new();
    eng.set_config(&pool, quadratic_config()).unwrap();

    assert_eq!(eng.evaluate(&pool, 1_000, 100), 5);
}

#[test]
fn quadratic_fee_tracks_tick_movement() {
    let eng = mk_engine();
    let pool = PoolId::new();
    eng.set_config(&pool, quadratic_config()).unwrap();

    eng.record(&pool, Some(1_000), 100);

    // delta 10: 5 + 0.5·10 + 0.2·100 = 30 bps.
    assert_eq!(eng.evaluate(&pool, 1_010, 100), 30);
    // delta 15: raw 57.5 floors per term to 57 bps.
    assert_eq!(eng.evaluate(&pool, 1_015, 100), 57);
    // delta 16 overshoots and clamps to the max fee.
    assert_eq!(eng.evaluate(&pool, 1_016, 100), 60);
}

#[test]
fn evaluate_is_read_only_and_deterministic() {
    let eng = mk_engine();
    let pool = PoolId::new();

    eng.record(&pool, Some(500), 200);
    let before = eng.metrics(&pool);

    let first = eng.evaluate_detailed(&pool, 520, 900);
    let second = eng.evaluate_detailed(&pool, 520, 900);

    assert_eq!(first, second);
    assert_eq!(eng.metrics(&pool), before);
}

#[test]
fn record_then_reevaluate_is_stable() {
    let eng = mk_engine();
    let pool = PoolId::new();

    // Correlate the lifecycle the way a host would.
    let trade_id = common::logger::TradeId::default();
    let _trade = common::logger::trade_span(&trade_id).entered();
    let _pool = common::logger::pool_span(&pool.to_string()).entered();

    eng.record(&pool, Some(100), 50);
    eng.record(&pool, Some(103), 60);

    // The same hypothetical trade keeps yielding the same fee until the
    // next record: no hidden state.
    let fee = eng.evaluate(&pool, 105, 70);
    for _ in 0..5 {
        assert_eq!(eng.evaluate(&pool, 105, 70), fee);
    }
}

#[test]
fn spike_streak_builds_and_resets_through_the_facade() {
    let eng = mk_engine();
    let pool = PoolId::new();

    eng.record(&pool, Some(0), 100);
    assert_eq!(eng.metrics(&pool).spike_streak, 0);

    // Each trade lands at 10x the then-current average: the streak
    // grows by one per settlement.
    for expected in 1..=10u32 {
        let size = eng.metrics(&pool).avg_trade_size * 10;
        eng.record(&pool, Some(0), size);
        assert_eq!(eng.metrics(&pool).spike_streak, expected);
    }

    // Scoring sees the streak capped at 10 even while it keeps growing.
    let size = eng.metrics(&pool).avg_trade_size * 10;
    eng.record(&pool, Some(0), size);
    assert_eq!(eng.metrics(&pool).spike_streak, 11);
    let decision = eng.evaluate_detailed(&pool, 0, 1);
    assert_eq!(decision.inputs.spike_count, 10);

    // One ordinary trade resets the streak outright.
    eng.record(&pool, Some(0), eng.metrics(&pool).avg_trade_size);
    assert_eq!(eng.metrics(&pool).spike_streak, 0);
}

#[test]
fn degenerate_records_leave_state_untouched() {
    let eng = mk_engine();
    let pool = PoolId::new();

    eng.record(&pool, Some(700), 100);
    let settled = eng.metrics(&pool);

    eng.record(&pool, Some(710), 0);
    eng.record(&pool, None, 250);
    assert_eq!(eng.metrics(&pool), settled);
}

#[test]
fn rejected_config_never_partially_applies() {
    let eng = mk_engine();
    let pool = PoolId::new();

    let good = PoolConfig {
        metric: MetricKind::Tick,
        strategy: StrategyParams::Tiered(TieredParams {
            fee_low_bps: 10,
            fee_med_bps: 30,
            fee_high_bps: 90,
            ..Default::default()
        }),
    };
    eng.set_config(&pool, good).unwrap();

    let bad = PoolConfig {
        metric: MetricKind::Tick,
        strategy: StrategyParams::Tiered(TieredParams {
            threshold_low: 200,
            threshold_high: 100,
            ..Default::default()
        }),
    };
    assert_eq!(
        eng.set_config(&pool, bad),
        Err(ConfigError::InvalidThresholdOrder { low: 200, high: 100 })
    );

    // The previously applied configuration survives intact.
    assert_eq!(eng.config(&pool), good);
}

#[test]
fn unconfigured_pool_reports_defaults() {
    let eng = mk_engine();
    let pool = PoolId::new();

    assert_eq!(eng.config(&pool), PoolConfig::default());
    assert_eq!(eng.metrics(&pool), Default::default());
}

#[test]
fn init_pool_seeds_the_sentinel_once() {
    let eng = mk_engine();
    let pool = PoolId::new();

    eng.init_pool(&pool);
    assert_eq!(eng.metrics(&pool).avg_trade_size, 0);

    eng.record(&pool, Some(5), 80);
    // Re-initializing must not clobber live history.
    eng.init_pool(&pool);
    assert_eq!(eng.metrics(&pool).avg_trade_size, 80);
}

#[test]
fn pools_do_not_share_history() {
    let eng = mk_engine();
    let a = PoolId::new();
    let b = PoolId::new();

    eng.record(&a, Some(1_000), 500);
    eng.set_config(&b, quadratic_config()).unwrap();

    assert_eq!(eng.metrics(&b).avg_trade_size, 0);
    assert_eq!(eng.config(&a), PoolConfig::default());
    // Pool a's price history has no bearing on pool b's fee.
    assert_eq!(eng.evaluate(&b, 1_500, 500), 5);
}

#[test]
fn price_metric_pools_normalize_impact() {
    let eng = mk_engine();
    let pool = PoolId::new();

    eng.set_config(
        &pool,
        PoolConfig {
            metric: MetricKind::Price { divisor: 1_000 },
            strategy: StrategyParams::Tiered(TieredParams::default()),
        },
    )
    .unwrap();

    eng.record(&pool, Some(1_000_000), 100);

    // |Δprice| = 3_000 normalizes to impact 3; score 50 + 90 = 140,
    // still the medium tier.
    let decision = eng.evaluate_detailed(&pool, 1_003_000, 100);
    assert_eq!(decision.inputs.impact, 3);
    assert_eq!(decision.score, Some(140));
    assert_eq!(decision.fee_bps, 20);

    // A 40_000 move caps at impact 10: 50 + 300 clamps into the high tier.
    let decision = eng.evaluate_detailed(&pool, 1_043_000, 100);
    assert_eq!(decision.inputs.impact, 10);
    assert_eq!(decision.score, Some(255));
    assert_eq!(decision.fee_bps, 60);
}
