//! Weighted capability scorer

use crate::config::Config;
use crate::error::CoreError;
use crate::history::SelectionHistory;
use crate::types::{Capability, ModelDescriptor, SelectionRecord, TaskRequest, TaskType};
use chrono::{DateTime, Utc};
use serde::Serialize;

const REASON_SEPARATOR: &str = ". ";
const FALLBACK_REASON: &str = "best overall option for this task";

/// Per-term contributions to a candidate's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub capability: f64,
    pub success_rate: f64,
    pub latency: f64,
    pub cost: f64,
    pub privacy: f64,
    pub context: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.capability + self.success_rate + self.latency + self.cost + self.privacy + self.context
    }
}

/// A candidate with its score, as produced by [`CapabilityScorer::rank`]
#[derive(Debug, Clone, Serialize)]
pub struct RankedModel<'a> {
    /// Position in the input candidate list
    pub index: usize,
    pub model: &'a ModelDescriptor,
    pub breakdown: ScoreBreakdown,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CapabilityScorer {
    config: Config,
}

impl CapabilityScorer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Score one candidate against a request
    pub fn score(&self, model: &ModelDescriptor, request: &TaskRequest) -> ScoreBreakdown {
        let w = &self.config.weights;

        let capability = request
            .task_type
            .scored_capability()
            .and_then(|cap| model.capability(cap))
            .map(|value| value * w.capability)
            .unwrap_or(0.0);

        let cost = if model.cost_per_token <= request.max_cost {
            w.within_budget_bonus
        } else {
            -w.over_budget_penalty
        };

        let privacy = match (request.privacy_required, self.is_fully_private(model)) {
            (true, true) => w.privacy_bonus,
            (true, false) => -w.privacy_penalty,
            (false, _) => 0.0,
        };

        let context = if model.max_context_length >= request.context_length {
            w.context_bonus
        } else {
            0.0
        };

        ScoreBreakdown {
            capability,
            success_rate: model.performance.success_rate * w.success_rate,
            latency: -model.performance.avg_response_time * w.latency_penalty,
            cost,
            privacy,
            context,
        }
    }

    /// All candidates ordered best-first; equal scores keep input order
    pub fn rank<'a>(
        &self,
        request: &TaskRequest,
        candidates: &'a [ModelDescriptor],
    ) -> Vec<RankedModel<'a>> {
        let mut ranked: Vec<RankedModel<'a>> = candidates
            .iter()
            .enumerate()
            .map(|(index, model)| {
                let breakdown = self.score(model, request);
                RankedModel {
                    index,
                    model,
                    breakdown,
                    score: breakdown.total(),
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Pick the best candidate for `request`
    pub fn select(
        &self,
        request: &TaskRequest,
        candidates: &[ModelDescriptor],
    ) -> Result<SelectionRecord, CoreError> {
        self.select_at(request, candidates, Utc::now())
    }

    /// [`select`](Self::select) with an explicit timestamp
    pub fn select_at(
        &self,
        request: &TaskRequest,
        candidates: &[ModelDescriptor],
        timestamp: DateTime<Utc>,
    ) -> Result<SelectionRecord, CoreError> {
        let mut best: Option<(&ModelDescriptor, f64)> = None;

        for model in candidates {
            let score = self.score(model, request).total();
            tracing::debug!(model = %model.model_key, score, "scored candidate");

            // Strictly greater: the first of equal scores wins
            let better = match best {
                Some((_, top)) => score > top,
                None => true,
            };
            if better {
                best = Some((model, score));
            }
        }

        let (model, score) = best.ok_or(CoreError::NoEligibleModel)?;
        let confidence = self.confidence(score);

        tracing::info!(
            task_type = %request.task_type,
            model = %model.model_key,
            score,
            confidence,
            "selected model"
        );

        Ok(SelectionRecord {
            task_type: request.task_type,
            selected_model: model.clone(),
            reasoning: self.reasoning(model, request),
            confidence,
            score,
            timestamp,
        })
    }

    /// Select and return the history that includes the new record
    pub fn route(
        &self,
        history: &SelectionHistory,
        request: &TaskRequest,
        candidates: &[ModelDescriptor],
    ) -> Result<(SelectionRecord, SelectionHistory), CoreError> {
        let record = self.select(request, candidates)?;
        let history = history.with_record(record.clone());
        Ok((record, history))
    }

    /// Display confidence: the raw score clamped into the configured band.
    ///
    /// An inverted band never panics; the ceiling takes precedence.
    pub fn confidence(&self, score: f64) -> f64 {
        let w = &self.config.weights;
        score.max(w.confidence_floor).min(w.confidence_ceiling)
    }

    /// Human-readable justification for choosing `model`
    pub fn reasoning(&self, model: &ModelDescriptor, request: &TaskRequest) -> String {
        let t = &self.config.reasoning;
        let mut reasons = Vec::new();

        if request.task_type == TaskType::Coding {
            if let Some(coding) = model.capability(Capability::Coding) {
                if coding > t.coding {
                    reasons.push(format!("high coding capability ({coding}%)"));
                }
            }
        }

        if request.privacy_required && self.is_fully_private(model) {
            reasons.push("local processing guarantees full privacy".to_string());
        }

        let success = model.performance.success_rate;
        if success > t.success_rate {
            reasons.push(format!("high success rate ({success}%)"));
        }

        if model.cost_per_token < t.cost_per_token {
            reasons.push("optimal per-token cost".to_string());
        }

        if reasons.is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            reasons.join(REASON_SEPARATOR)
        }
    }

    fn is_fully_private(&self, model: &ModelDescriptor) -> bool {
        model.capability(Capability::Privacy) == Some(self.config.weights.full_privacy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::types::PerformanceRecord;

    fn fixture(key: &str, caps: &[(Capability, f64)], perf: (f64, f64), cost: f64) -> ModelDescriptor {
        ModelDescriptor {
            id: key.to_string(),
            name: key.to_string(),
            provider: "test".to_string(),
            model_key: key.to_string(),
            capabilities: caps.iter().copied().collect(),
            performance: PerformanceRecord {
                avg_response_time: perf.0,
                success_rate: perf.1,
            },
            cost_per_token: cost,
            max_context_length: 8192,
            is_active: true,
        }
    }

    fn coding_request() -> TaskRequest {
        TaskRequest::new("refactor the parser", TaskType::Coding)
    }

    #[test]
    fn test_score_terms() {
        let scorer = CapabilityScorer::default();
        let model = fixture("a", &[(Capability::Coding, 98.0)], (1.8, 97.5), 0.000015);

        let b = scorer.score(&model, &coding_request());
        assert!((b.capability - 39.2).abs() < 1e-9);
        assert!((b.success_rate - 19.5).abs() < 1e-9);
        assert!((b.latency + 9.0).abs() < 1e-9);
        assert_eq!(b.cost, 20.0);
        assert_eq!(b.privacy, 0.0);
        assert_eq!(b.context, 10.0);
        assert!((b.total() - 79.7).abs() < 1e-9);
    }

    #[test]
    fn test_missing_capability_scores_zero() {
        let scorer = CapabilityScorer::default();
        let model = fixture("a", &[(Capability::Reasoning, 90.0)], (1.0, 90.0), 0.0);
        let b = scorer.score(&model, &coding_request());
        assert_eq!(b.capability, 0.0);
    }

    #[test]
    fn test_zero_cost_is_within_budget() {
        let scorer = CapabilityScorer::default();
        let model = fixture("free", &[], (1.0, 90.0), 0.0);
        assert_eq!(scorer.score(&model, &coding_request()).cost, 20.0);

        let pricey = fixture("pricey", &[], (1.0, 90.0), 0.5);
        assert_eq!(scorer.score(&pricey, &coding_request()).cost, -30.0);
    }

    #[test]
    fn test_context_bonus_requires_enough_window() {
        let scorer = CapabilityScorer::default();
        let model = fixture("small", &[], (1.0, 90.0), 0.0);
        let mut request = coding_request();
        request.context_length = 100_000;
        assert_eq!(scorer.score(&model, &request).context, 0.0);
    }

    #[test]
    fn test_capability_dominates_latency() {
        let scorer = CapabilityScorer::default();
        let a = fixture("a", &[(Capability::Coding, 98.0)], (1.8, 97.5), 0.000015);
        let b = fixture("b", &[(Capability::Coding, 70.0)], (0.25, 85.0), 0.0);

        let record = scorer.select(&coding_request(), &[b, a]).unwrap();
        assert_eq!(record.selected_model.model_key, "a");
        assert_eq!(record.task_type, TaskType::Coding);
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let scorer = CapabilityScorer::default();
        let first = fixture("first", &[(Capability::Coding, 80.0)], (1.0, 90.0), 0.0);
        let second = fixture("second", &[(Capability::Coding, 80.0)], (1.0, 90.0), 0.0);

        let record = scorer.select(&coding_request(), &[first, second]).unwrap();
        assert_eq!(record.selected_model.model_key, "first");
    }

    #[test]
    fn test_empty_candidates() {
        let scorer = CapabilityScorer::default();
        assert_eq!(
            scorer.select(&coding_request(), &[]),
            Err(CoreError::NoEligibleModel)
        );
    }

    #[test]
    fn test_confidence_clamped() {
        let scorer = CapabilityScorer::default();
        assert_eq!(scorer.confidence(-40.0), 65.0);
        assert_eq!(scorer.confidence(79.7), 79.7);
        assert_eq!(scorer.confidence(140.0), 95.0);
    }

    #[test]
    fn test_reasoning_phrases() {
        let scorer = CapabilityScorer::default();
        let model = fixture("a", &[(Capability::Coding, 98.0)], (1.8, 97.5), 0.000015);

        let reasoning = scorer.reasoning(&model, &coding_request());
        assert_eq!(
            reasoning,
            "high coding capability (98%). high success rate (97.5%). optimal per-token cost"
        );
    }

    #[test]
    fn test_reasoning_privacy_and_fallback() {
        let scorer = CapabilityScorer::default();
        let local = fixture("local", &[(Capability::Privacy, 100.0)], (3.0, 90.0), 0.0);
        let mut request = TaskRequest::new("private notes", TaskType::General);
        request.privacy_required = true;
        assert_eq!(
            scorer.reasoning(&local, &request),
            "local processing guarantees full privacy. optimal per-token cost"
        );

        let plain = fixture("plain", &[], (3.0, 90.0), 0.001);
        assert_eq!(
            scorer.reasoning(&plain, &TaskRequest::default()),
            "best overall option for this task"
        );
    }

    #[test]
    fn test_rank_is_stable_and_best_first() {
        let scorer = CapabilityScorer::default();
        let catalog = default_catalog();
        let request = coding_request();

        let ranked = scorer.rank(&request, &catalog);
        assert_eq!(ranked.len(), catalog.len());
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));

        let winner = scorer.select(&request, &catalog).unwrap();
        assert_eq!(ranked[0].model.model_key, winner.selected_model.model_key);
    }

    #[test]
    fn test_route_records_history() {
        let scorer = CapabilityScorer::default();
        let catalog = default_catalog();
        let history = SelectionHistory::new();

        let (record, updated) = scorer.route(&history, &coding_request(), &catalog).unwrap();
        assert!(history.is_empty());
        assert_eq!(updated.latest(), Some(&record));
    }

    #[test]
    fn test_custom_weights() {
        let mut config = Config::new();
        config.weights.latency_penalty = 100.0;
        let scorer = CapabilityScorer::new(config);

        let a = fixture("a", &[(Capability::Coding, 98.0)], (1.8, 97.5), 0.000015);
        let b = fixture("b", &[(Capability::Coding, 70.0)], (0.25, 85.0), 0.0);
        let record = scorer.select(&coding_request(), &[a, b]).unwrap();
        assert_eq!(record.selected_model.model_key, "b");
    }

    #[test]
    fn test_inverted_confidence_band_does_not_panic() {
        let config: Config =
            serde_json::from_str(r#"{"weights":{"confidence_floor":96,"confidence_ceiling":95}}"#)
                .unwrap();
        let scorer = CapabilityScorer::new(config);

        let record = scorer.select(&coding_request(), &default_catalog()).unwrap();
        assert_eq!(record.confidence, 95.0);
    }
}
