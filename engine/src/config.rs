use corelib::models::{BPS_DENOM, PoolConfig, StrategyParams};

use crate::error::ConfigError;

/// Validate a full parameter set before it is applied.
///
/// Checks, in order:
/// - every fee lies in `1..=10_000` bps
/// - tiered: `fee_low < fee_med < fee_high`
/// - tiered: `threshold_low < threshold_high`
/// - quadratic: `max_fee > base_fee`
///
/// Callers must only write the config to storage after this returns
/// `Ok`; a rejected set never partially applies.
pub fn validate(config: &PoolConfig) -> Result<(), ConfigError> {
    match &config.strategy {
        StrategyParams::Tiered(p) => {
            for fee in [p.fee_low_bps, p.fee_med_bps, p.fee_high_bps] {
                check_fee_bounds(fee)?;
            }

            if !(p.fee_low_bps < p.fee_med_bps && p.fee_med_bps < p.fee_high_bps) {
                return Err(ConfigError::InvalidFeeRange(format!(
                    "tiers must be strictly increasing: {} / {} / {}",
                    p.fee_low_bps, p.fee_med_bps, p.fee_high_bps
                )));
            }

            if p.threshold_low >= p.threshold_high {
                return Err(ConfigError::InvalidThresholdOrder {
                    low: p.threshold_low,
                    high: p.threshold_high,
                });
            }

            Ok(())
        }

        StrategyParams::Quadratic(p) => {
            check_fee_bounds(p.base_fee_bps)?;
            check_fee_bounds(p.max_fee_bps)?;

            if p.max_fee_bps <= p.base_fee_bps {
                return Err(ConfigError::InvalidFeeRange(format!(
                    "max fee {} must exceed base fee {}",
                    p.max_fee_bps, p.base_fee_bps
                )));
            }

            Ok(())
        }
    }
}

fn check_fee_bounds(fee_bps: u16) -> Result<(), ConfigError> {
    if fee_bps == 0 || fee_bps > BPS_DENOM {
        return Err(ConfigError::FeeOutOfBounds(fee_bps));
    }
    Ok(())
}
