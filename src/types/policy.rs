use crate::power::PowerProfile;

use super::error::ConfigError;

/// Price and benchmark bands for the CPU/GPU balance heuristic.
///
/// These are empirical tiering choices, not hardware limits, so every band
/// can be overridden.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceThresholds {
    /// GPUs at or above this price want a strong CPU.
    pub flagship_gpu_price: f64,
    /// Minimum CPU score for a flagship GPU.
    pub flagship_min_cpu_score: u32,
    /// GPUs at or above this price (and below flagship) want a decent CPU.
    pub midrange_gpu_price: f64,
    /// Minimum CPU score for a midrange GPU.
    pub midrange_min_cpu_score: u32,
    /// CPUs above this score are wasted on a budget GPU.
    pub high_end_cpu_score: u32,
    /// GPUs below this price count as budget.
    pub budget_gpu_price: f64,
}

impl Default for BalanceThresholds {
    fn default() -> Self {
        Self {
            flagship_gpu_price: 1000.0,
            flagship_min_cpu_score: 8000,
            midrange_gpu_price: 500.0,
            midrange_min_cpu_score: 6000,
            high_end_cpu_score: 10000,
            budget_gpu_price: 300.0,
        }
    }
}

/// Power supply sizing ratios against the estimated draw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadroomPolicy {
    /// Below `estimate × recommended_ratio` the supply has too little headroom.
    pub recommended_ratio: f64,
    /// Above `estimate × oversized_ratio` the supply runs under its efficient load band.
    pub oversized_ratio: f64,
}

impl Default for HeadroomPolicy {
    fn default() -> Self {
        Self {
            recommended_ratio: 1.25,
            oversized_ratio: 2.0,
        }
    }
}

/// Every threshold the built-in rules consult.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Policy {
    pub balance: BalanceThresholds,
    pub headroom: HeadroomPolicy,
    /// Memory rated above this speed usually needs a manual firmware profile.
    pub memory_speed_advisory_mhz: u32,
    /// A card strictly longer than this share of the case limit is a tight
    /// fit. A card exactly at the share is not.
    pub gpu_tight_fit_ratio: f64,
    /// Estimator preset used by the power sufficiency rule.
    pub power_profile: PowerProfile,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            balance: BalanceThresholds::default(),
            headroom: HeadroomPolicy::default(),
            memory_speed_advisory_mhz: 6000,
            gpu_tight_fit_ratio: 0.95,
            power_profile: PowerProfile::SUFFICIENCY,
        }
    }
}

impl Policy {
    /// Check that the thresholds describe a consistent policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPolicy`] naming the first offending field.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let headroom = &self.headroom;
        if !(headroom.recommended_ratio >= 1.0) {
            return Err(invalid(
                "headroom.recommended_ratio",
                "must be at least 1.0",
            ));
        }
        if !(headroom.oversized_ratio > headroom.recommended_ratio) {
            return Err(invalid(
                "headroom.oversized_ratio",
                "must exceed the recommended ratio",
            ));
        }
        if !(self.gpu_tight_fit_ratio > 0.0 && self.gpu_tight_fit_ratio <= 1.0) {
            return Err(invalid("gpu_tight_fit_ratio", "must be in (0, 1]"));
        }
        let balance = &self.balance;
        if !(balance.midrange_gpu_price < balance.flagship_gpu_price) {
            return Err(invalid(
                "balance.midrange_gpu_price",
                "must be below the flagship price",
            ));
        }
        if !(balance.budget_gpu_price >= 0.0) {
            return Err(invalid("balance.budget_gpu_price", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidPolicy {
        field: field.to_owned(),
        reason: reason.to_owned(),
    }
}
