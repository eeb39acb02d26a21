//! One interview session — turn orchestration, scoring, and summary.
//!
//! Flow per turn: score previous answer (degrading on collaborator failure) →
//! stage transition decision → build stage prompt → collaborator returns next
//! question (failure here is surfaced — no question means no turn).
//!
//! All state is instance-scoped; the service layer owns the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::interview::controller::StageController;
use crate::interview::prompts::{
    question_prompt, OPENING_QUESTION, QUESTION_SYSTEM, SCORING_PROMPT_TEMPLATE, SCORING_SYSTEM,
    SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM, TRANSITION_PROMPT_TEMPLATE, TRANSITION_SYSTEM,
};
use crate::interview::scoring::{round2, Evaluation};
use crate::interview::stage::Stage;
use crate::llm_client::{LanguageModel, LlmError};

/// Note returned in place of a narrative when nothing was scored.
const NO_RESPONSES_NOTE: &str = "No responses to evaluate";
/// Fallback narrative when the summary call fails.
const SUMMARY_UNAVAILABLE: &str = "Summary unavailable";

/// One active interview. Single-owner: the store wraps each session in a
/// mutex so a turn runs to completion before the next one is accepted.
pub struct InterviewSession {
    resume_text: String,
    controller: StageController,
    previous_question: Option<String>,
    evaluations: Vec<Evaluation>,
    started_at: DateTime<Utc>,
}

/// The outcome of one candidate turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub question: String,
    pub evaluation: Option<Evaluation>,
    pub stage: Stage,
}

/// Per-stage average scores, fixed shape — 0.0 where a stage saw no answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageScores {
    pub introduction: f64,
    pub technical: f64,
    pub experience: f64,
    pub behavioral: f64,
    pub closing: f64,
}

impl StageScores {
    pub fn get(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Introduction => self.introduction,
            Stage::Technical => self.technical,
            Stage::Experience => self.experience,
            Stage::Behavioral => self.behavioral,
            Stage::Closing => self.closing,
        }
    }

    fn set(&mut self, stage: Stage, score: f64) {
        match stage {
            Stage::Introduction => self.introduction = score,
            Stage::Technical => self.technical = score,
            Stage::Experience => self.experience = score,
            Stage::Behavioral => self.behavioral = score,
            Stage::Closing => self.closing = score,
        }
    }
}

/// The end-of-session aggregate report.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewSummary {
    pub overall_score: f64,
    pub stage_scores: StageScores,
    pub detailed_scores: Vec<Evaluation>,
    pub summary: String,
}

impl InterviewSession {
    /// Opens a session around extracted resume text. The fixed opening
    /// question is recorded as the previous question so the very first
    /// answer can be scored against it.
    pub fn start(resume_text: String) -> (Self, &'static str) {
        let session = Self {
            resume_text,
            controller: StageController::new(),
            previous_question: Some(OPENING_QUESTION.to_string()),
            evaluations: Vec::new(),
            started_at: Utc::now(),
        };
        (session, OPENING_QUESTION)
    }

    pub fn stage(&self) -> Stage {
        self.controller.stage()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Processes one candidate turn.
    ///
    /// Scoring and the transition judgment degrade on collaborator failure;
    /// a failed question call is surfaced, since without a question the turn
    /// cannot proceed.
    pub async fn process_turn(
        &mut self,
        llm: &dyn LanguageModel,
        candidate_response: &str,
    ) -> Result<TurnOutcome, LlmError> {
        let evaluation = match self.previous_question.clone() {
            Some(question) if !candidate_response.is_empty() => {
                Some(self.evaluate(llm, candidate_response, &question).await)
            }
            _ => None,
        };

        // The judgment call is skipped when the interaction cap already
        // forces the move, and at the terminal stage where no advance is
        // possible either way.
        let judged = if self.controller.stage().is_terminal() || self.controller.must_advance() {
            false
        } else {
            self.judge_transition(llm, candidate_response).await
        };
        self.controller.maybe_advance(judged);

        let question = self.next_question(llm, candidate_response).await?;
        self.previous_question = Some(question.clone());

        Ok(TurnOutcome {
            question,
            evaluation,
            stage: self.controller.stage(),
        })
    }

    /// Scores one answer against the question it was given for, and appends
    /// the result. Never fails: a collaborator error produces a zero-scored
    /// evaluation whose feedback describes the error. No retry.
    async fn evaluate(
        &mut self,
        llm: &dyn LanguageModel,
        candidate_response: &str,
        question: &str,
    ) -> Evaluation {
        let stage = self.controller.stage();
        let prompt = SCORING_PROMPT_TEMPLATE
            .replace("{stage}", stage.as_str())
            .replace("{question}", question)
            .replace("{candidate_response}", candidate_response);

        let evaluation = match llm.generate(&prompt, SCORING_SYSTEM).await {
            Ok(response) => Evaluation::from_response(stage, question, &response),
            Err(e) => {
                warn!("Scoring call failed, recording zero evaluation: {e}");
                Evaluation::degraded(stage, question, &e.to_string())
            }
        };

        debug!(
            "Evaluation completed: stage={} overall={}",
            stage, evaluation.overall_score
        );
        self.evaluations.push(evaluation.clone());
        evaluation
    }

    /// Asks the collaborator whether the latest answer closes out the
    /// current stage. Only an exact affirmative advances; garbled output and
    /// collaborator failure both hold the stage.
    async fn judge_transition(&self, llm: &dyn LanguageModel, candidate_response: &str) -> bool {
        let prompt = TRANSITION_PROMPT_TEMPLATE
            .replace("{stage}", self.controller.stage().as_str())
            .replace("{candidate_response}", candidate_response);

        match llm.generate(&prompt, TRANSITION_SYSTEM).await {
            Ok(response) => response.trim().eq_ignore_ascii_case("yes"),
            Err(e) => {
                warn!("Transition judgment failed, holding stage: {e}");
                false
            }
        }
    }

    /// Builds the stage prompt and requests the next question. The resume is
    /// substituted only for the technically grounded stages. The trimmed
    /// response is taken as the question with no further validation.
    async fn next_question(
        &mut self,
        llm: &dyn LanguageModel,
        candidate_response: &str,
    ) -> Result<String, LlmError> {
        let stage = self.controller.stage();
        let resume_text = if stage.uses_resume() {
            self.resume_text.as_str()
        } else {
            ""
        };
        let prompt = question_prompt(stage)
            .replace("{resume_text}", resume_text)
            .replace("{candidate_response}", candidate_response);

        let question = llm.generate(&prompt, QUESTION_SYSTEM).await?;
        self.controller.record_question();

        debug!(
            "Generated question: stage={} interactions={}",
            stage,
            self.controller.interactions()
        );
        Ok(question.trim().to_string())
    }

    /// Aggregates all evaluations into the end-of-session report.
    ///
    /// Never fails: with no evaluations it returns the zero summary with an
    /// explanatory note, and a failed narrative call falls back to a fixed
    /// message. Non-destructive — callable any time.
    pub async fn summarize(&self, llm: &dyn LanguageModel) -> InterviewSummary {
        if self.evaluations.is_empty() {
            return InterviewSummary {
                overall_score: 0.0,
                stage_scores: StageScores::default(),
                detailed_scores: Vec::new(),
                summary: NO_RESPONSES_NOTE.to_string(),
            };
        }

        let mut stage_scores = StageScores::default();
        for stage in Stage::ALL {
            let scores: Vec<f64> = self
                .evaluations
                .iter()
                .filter(|e| e.stage == stage)
                .map(|e| e.overall_score)
                .collect();
            if !scores.is_empty() {
                stage_scores.set(
                    stage,
                    round2(scores.iter().sum::<f64>() / scores.len() as f64),
                );
            }
        }

        let overall_score = round2(
            Stage::ALL
                .iter()
                .map(|s| stage_scores.get(*s) * s.summary_weight())
                .sum(),
        );

        let score_lines = Stage::ALL
            .iter()
            .map(|s| format!("{}: {}/10", s, stage_scores.get(*s)))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = SUMMARY_PROMPT_TEMPLATE
            .replace("{stage_scores}", &score_lines)
            .replace("{overall_score}", &overall_score.to_string());

        let summary = match llm.generate(&prompt, SUMMARY_SYSTEM).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Summary narrative call failed: {e}");
                SUMMARY_UNAVAILABLE.to_string()
            }
        };

        InterviewSummary {
            overall_score,
            stage_scores,
            detailed_scores: self.evaluations.clone(),
            summary,
        }
    }
}
