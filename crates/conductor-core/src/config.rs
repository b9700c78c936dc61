//! Configuration for capability scoring

use crate::history::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};

/// Weights of the capability score terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Multiplier on the capability matching the task type
    pub capability: f64,
    /// Multiplier on the success rate (0-100)
    pub success_rate: f64,
    /// Penalty per second of average response time
    pub latency_penalty: f64,
    /// Bonus when cost per token fits the budget
    pub within_budget_bonus: f64,
    /// Penalty when cost per token exceeds the budget
    pub over_budget_penalty: f64,
    /// Bonus for a fully private model on a privacy request
    pub privacy_bonus: f64,
    /// Penalty for any other model on a privacy request
    pub privacy_penalty: f64,
    /// Bonus when the context window covers the request
    pub context_bonus: f64,
    /// Privacy capability value that counts as fully private
    pub full_privacy: f64,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
}

impl ScoringWeights {
    pub fn new() -> Self {
        Self {
            capability: 0.4,
            success_rate: 0.2,
            latency_penalty: 5.0,
            within_budget_bonus: 20.0,
            over_budget_penalty: 30.0,
            privacy_bonus: 50.0,
            privacy_penalty: 50.0,
            context_bonus: 10.0,
            full_privacy: 100.0,
            confidence_floor: 65.0,
            confidence_ceiling: 95.0,
        }
    }

    /// Floor and ceiling are numbers with the floor not above the ceiling
    pub fn has_valid_confidence_band(&self) -> bool {
        self.confidence_floor <= self.confidence_ceiling
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Thresholds that decide which phrases make it into the reasoning string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasoningThresholds {
    /// Coding capability strictly above this is called out
    pub coding: f64,
    /// Success rate strictly above this is called out
    pub success_rate: f64,
    /// Cost per token strictly below this is called out
    pub cost_per_token: f64,
}

impl ReasoningThresholds {
    pub fn new() -> Self {
        Self {
            coding: 90.0,
            success_rate: 95.0,
            cost_per_token: 0.00002,
        }
    }
}

impl Default for ReasoningThresholds {
    fn default() -> Self {
        Self::new()
    }
}

/// Scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub weights: ScoringWeights,
    pub reasoning: ReasoningThresholds,
    /// Number of selection records kept in history
    pub history_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::new(),
            reasoning: ReasoningThresholds::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
