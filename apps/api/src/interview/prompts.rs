// All LLM prompt constants for the interview module.
// Templates are versioned constants; placeholder substitution happens in
// session.rs. Keep template content here, out of the state machine logic.

use crate::interview::stage::Stage;

/// Fixed opening message. The first turn never goes through the LLM; this is
/// also recorded as the previous question so the first answer can be scored.
pub const OPENING_QUESTION: &str = "Hello! I'm Natasha, your interviewer today. \
    I've reviewed your resume, and I'd like to learn more about you. Could you \
    tell me about your background and what interests you about this position?";

/// System prompt for question generation — enforces question-only output.
pub const QUESTION_SYSTEM: &str = "You are an experienced professional interviewer. \
    Respond with ONLY the next interview question. \
    Do NOT include preamble, labels, or commentary. \
    Do NOT mention interview stages.";

/// System prompt for the yes/no stage-transition judgment.
pub const TRANSITION_SYSTEM: &str = "You are an AI analyzing interview responses. \
    Respond with ONLY the single word 'yes' or 'no'.";

/// System prompt for response scoring — enforces the line-oriented format.
pub const SCORING_SYSTEM: &str = "You are an expert interview evaluator. \
    Respond ONLY in the exact KEY: value line format requested. \
    Do NOT include any other text.";

/// System prompt for the final narrative summary.
pub const SUMMARY_SYSTEM: &str =
    "You are an expert interview evaluator writing a concise hiring summary.";

/// Stage-transition judgment prompt. Replace `{stage}` and
/// `{candidate_response}` before sending. Only an exact affirmative advances
/// the stage; the closing stage is never judged.
pub const TRANSITION_PROMPT_TEMPLATE: &str = r#"You are analyzing an interview in progress.
Current stage: {stage}
Candidate's response: {candidate_response}

Determine if the interview should move to the next stage based on:
- Introduction stage: Have they covered their background and education?
- Technical stage: Have they demonstrated their technical knowledge?
- Experience stage: Have they explained their project implementations?
- Behavioral stage: Have they shown their soft skills and problem-solving approach?

Respond with ONLY 'yes' to move to the next stage, or 'no' to continue the current stage."#;

/// Scoring prompt. Replace `{stage}`, `{question}`, `{candidate_response}`.
/// The KEY names here must match the keys parsed in scoring.rs.
pub const SCORING_PROMPT_TEMPLATE: &str = r#"Evaluate the following candidate response.

Stage: {stage}
Question Asked: {question}
Candidate Response: {candidate_response}

Score the response on these criteria (0-10 scale, use 0 if not applicable):
1. Relevance: How directly does it answer the question?
2. Depth: How detailed and thorough is the response?
3. Clarity: How well-structured and clear is the communication?
4. Technical Accuracy: How technically sound is the response? (use 0 for non-technical questions)

Provide your evaluation in the following format ONLY:
RELEVANCE_SCORE: [number between 0-10]
DEPTH_SCORE: [number between 0-10]
CLARITY_SCORE: [number between 0-10]
TECHNICAL_SCORE: [number between 0-10]
FEEDBACK: [Brief 1-2 sentence feedback]"#;

/// Summary narrative prompt. Replace `{stage_scores}` (one `stage: score/10`
/// line per stage) and `{overall_score}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Generate a brief interview summary based on these scores:

Stage Scores:
{stage_scores}

Overall Score: {overall_score}/10

Provide a concise summary with:
1. Overall assessment (2-3 sentences)
2. Key strengths (2-3 bullet points)
3. Areas for improvement (1-2 bullet points)"#;

const INTRODUCTION_PROMPT_TEMPLATE: &str = r#"You are an HR interviewer named Natasha conducting a professional interview.
Previous response: {candidate_response}

Generate a natural follow-up question focusing on:
- Educational background
- Academic achievements
- General professional background
- Career journey and aspirations

RULES:
- Keep questions professional and focused
- Make it conversational and natural
- One clear question at a time
- Consider the candidate's previous response

Respond with ONLY the question, nothing else."#;

const TECHNICAL_PROMPT_TEMPLATE: &str = r#"You are a technical interviewer.
Resume: {resume_text}
Previous response: {candidate_response}

Generate a technical follow-up question that:
- Builds upon their previous response
- Assesses specific technical skills mentioned in their resume
- Tests depth of technical knowledge
- Focuses on core technologies they've worked with

Keep questions specific and technical.
Respond with ONLY the question, nothing else."#;

const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"You are a technical interviewer.
Resume: {resume_text}
Previous response: {candidate_response}

Generate a follow-up question about:
- Specific projects they've mentioned
- Technical challenges and solutions
- Implementation details
- Real-world application of their skills
- Impact and results of their work

Focus on practical experience and implementation.
Respond with ONLY the question, nothing else."#;

const BEHAVIORAL_PROMPT_TEMPLATE: &str = r#"You are an HR interviewer.
Previous response: {candidate_response}

Generate a natural follow-up behavioral question that assesses:
- Problem-solving approach
- Team collaboration
- Handling challenges
- Leadership qualities
- Conflict resolution

Use STAR (Situation, Task, Action, Result) format.
Consider their previous response for context.
Respond with ONLY the question, nothing else."#;

const CLOSING_PROMPT_TEMPLATE: &str = r#"You are an HR interviewer wrapping up the interview.
Previous response: {candidate_response}

Generate a closing question about:
- Role clarification
- Company culture
- Next steps
- Start date availability
- Any final questions

Keep it professional and welcoming.
Respond with ONLY the question, nothing else."#;

/// The question template for one stage. Resume text is only substituted into
/// the technically grounded stages' templates.
pub fn question_prompt(stage: Stage) -> &'static str {
    match stage {
        Stage::Introduction => INTRODUCTION_PROMPT_TEMPLATE,
        Stage::Technical => TECHNICAL_PROMPT_TEMPLATE,
        Stage::Experience => EXPERIENCE_PROMPT_TEMPLATE,
        Stage::Behavioral => BEHAVIORAL_PROMPT_TEMPLATE,
        Stage::Closing => CLOSING_PROMPT_TEMPLATE,
    }
}
