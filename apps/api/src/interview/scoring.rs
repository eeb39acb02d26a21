//! Response scoring — criterion weights, score-line parsing, and the
//! `Evaluation` record appended to the session after every scored answer.
//!
//! Parsing is deliberately forgiving: the collaborator's output is untrusted,
//! so unparsable values, missing keys, and out-of-range numbers all degrade
//! to safe defaults instead of failing the turn.

use serde::{Deserialize, Serialize};

use crate::interview::stage::Stage;

/// Fixed-shape sub-scores for one answer, each clamped to the 0–10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionScores {
    pub relevance: f64,
    pub depth: f64,
    pub clarity: f64,
    pub technical: f64,
}

/// Per-stage weights combining the four sub-scores into one overall score.
/// Each set sums to 1.0; `technical` carries weight only in the two
/// technically grounded stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionWeights {
    pub relevance: f64,
    pub depth: f64,
    pub clarity: f64,
    pub technical: f64,
}

impl CriterionWeights {
    pub fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::Technical => Self {
                relevance: 0.25,
                depth: 0.30,
                clarity: 0.15,
                technical: 0.30,
            },
            Stage::Experience => Self {
                relevance: 0.30,
                depth: 0.30,
                clarity: 0.20,
                technical: 0.20,
            },
            _ => Self {
                relevance: 0.40,
                depth: 0.30,
                clarity: 0.30,
                technical: 0.0,
            },
        }
    }

    /// Weighted sum of the four sub-scores, rounded to 2 decimal places.
    pub fn apply(&self, scores: &CriterionScores) -> f64 {
        round2(
            self.relevance * scores.relevance
                + self.depth * scores.depth
                + self.clarity * scores.clarity
                + self.technical * scores.technical,
        )
    }
}

/// The scored record attached to one candidate answer. Immutable once
/// appended to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub stage: Stage,
    pub question: String,
    pub detailed_scores: CriterionScores,
    pub overall_score: f64,
    pub feedback: String,
}

impl Evaluation {
    /// Builds an evaluation from a raw scoring response.
    ///
    /// The response is expected as `KEY: value` lines. Lines without a
    /// separator are skipped, the `FEEDBACK` line becomes the feedback text,
    /// and the four score keys are parsed as numbers — anything unparsable
    /// becomes 0 and every value is clamped to [0, 10]. Keys absent from the
    /// response default to 0. This path never fails.
    pub fn from_response(stage: Stage, question: &str, response: &str) -> Self {
        let mut scores = CriterionScores::default();
        let mut feedback = String::new();

        for line in response.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "FEEDBACK" => feedback = value.to_string(),
                "RELEVANCE_SCORE" => scores.relevance = parse_score(value),
                "DEPTH_SCORE" => scores.depth = parse_score(value),
                "CLARITY_SCORE" => scores.clarity = parse_score(value),
                "TECHNICAL_SCORE" => scores.technical = parse_score(value),
                _ => {}
            }
        }

        let overall_score = CriterionWeights::for_stage(stage).apply(&scores);

        Self {
            stage,
            question: question.to_string(),
            detailed_scores: scores,
            overall_score,
            feedback: if feedback.is_empty() {
                "No feedback provided".to_string()
            } else {
                feedback
            },
        }
    }

    /// The zero-scored fallback used when the scoring call itself fails.
    pub fn degraded(stage: Stage, question: &str, reason: &str) -> Self {
        Self {
            stage,
            question: question.to_string(),
            detailed_scores: CriterionScores::default(),
            overall_score: 0.0,
            feedback: format!("Error evaluating response: {reason}"),
        }
    }
}

/// Parses one score value. Non-numeric and non-finite values become 0;
/// everything else is clamped to the 0–10 scale.
fn parse_score(value: &str) -> f64 {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map_or(0.0, |v| v.clamp(0.0, 10.0))
}

/// Rounds to 2 decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criterion_weights_sum_to_one() {
        for stage in Stage::ALL {
            let w = CriterionWeights::for_stage(stage);
            let total = w.relevance + w.depth + w.clarity + w.technical;
            assert!((total - 1.0).abs() < 1e-9, "{stage}: sum was {total}");
        }
    }

    #[test]
    fn test_technical_weight_zero_outside_technical_stages() {
        for stage in [Stage::Introduction, Stage::Behavioral, Stage::Closing] {
            assert_eq!(CriterionWeights::for_stage(stage).technical, 0.0);
        }
    }

    #[test]
    fn test_technical_stage_weighted_overall() {
        // 8*0.25 + 6*0.3 + 10*0.15 + 4*0.3 = 2 + 1.8 + 1.5 + 1.2 = 6.5
        let response = "RELEVANCE_SCORE: 8\n\
                        DEPTH_SCORE: 6\n\
                        CLARITY_SCORE: 10\n\
                        TECHNICAL_SCORE: 4\n\
                        FEEDBACK: Solid depth, could be more precise.";
        let eval = Evaluation::from_response(Stage::Technical, "Q", response);
        assert_eq!(eval.overall_score, 6.5);
        assert_eq!(eval.detailed_scores.relevance, 8.0);
        assert_eq!(eval.feedback, "Solid depth, could be more precise.");
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let response = "RELEVANCE_SCORE: 15\n\
                        DEPTH_SCORE: -3\n\
                        CLARITY_SCORE: 10.0\n\
                        TECHNICAL_SCORE: 7";
        let eval = Evaluation::from_response(Stage::Technical, "Q", response);
        assert_eq!(eval.detailed_scores.relevance, 10.0);
        assert_eq!(eval.detailed_scores.depth, 0.0);
        assert_eq!(eval.detailed_scores.clarity, 10.0);
    }

    #[test]
    fn test_unparsable_values_become_zero() {
        let response = "RELEVANCE_SCORE: N/A\n\
                        DEPTH_SCORE: eight\n\
                        CLARITY_SCORE: 7/10\n\
                        TECHNICAL_SCORE: NaN";
        let eval = Evaluation::from_response(Stage::Introduction, "Q", response);
        assert_eq!(eval.detailed_scores, CriterionScores::default());
        assert_eq!(eval.overall_score, 0.0);
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let response = "RELEVANCE_SCORE: 10\nFEEDBACK: Short but relevant.";
        let eval = Evaluation::from_response(Stage::Introduction, "Q", response);
        assert_eq!(eval.detailed_scores.relevance, 10.0);
        assert_eq!(eval.detailed_scores.depth, 0.0);
        // introduction weights: 0.4*10 = 4.0
        assert_eq!(eval.overall_score, 4.0);
    }

    #[test]
    fn test_garbage_lines_and_unknown_keys_are_ignored() {
        let response = "Here is my evaluation\n\
                        MYSTERY_SCORE: 9\n\
                        RELEVANCE_SCORE: 5";
        let eval = Evaluation::from_response(Stage::Behavioral, "Q", response);
        assert_eq!(eval.detailed_scores.relevance, 5.0);
        assert_eq!(eval.detailed_scores.technical, 0.0);
    }

    #[test]
    fn test_feedback_keeps_embedded_separators() {
        let response = "FEEDBACK: Good answer: detailed, with tradeoffs.";
        let eval = Evaluation::from_response(Stage::Closing, "Q", response);
        assert_eq!(eval.feedback, "Good answer: detailed, with tradeoffs.");
    }

    #[test]
    fn test_empty_feedback_gets_placeholder() {
        let eval = Evaluation::from_response(Stage::Closing, "Q", "RELEVANCE_SCORE: 3");
        assert_eq!(eval.feedback, "No feedback provided");
    }

    #[test]
    fn test_degraded_evaluation_is_zeroed_with_reason() {
        let eval = Evaluation::degraded(Stage::Technical, "Q", "connection refused");
        assert_eq!(eval.overall_score, 0.0);
        assert_eq!(eval.detailed_scores, CriterionScores::default());
        assert!(eval.feedback.contains("connection refused"));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.666666), 6.67);
        assert_eq!(round2(7.0), 7.0);
        assert_eq!(round2(2.449), 2.45);
    }
}
