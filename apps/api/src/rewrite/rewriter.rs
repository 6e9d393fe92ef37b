//! Resume Rewriter — tailors resume text to one job description via the LLM.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_OUTPUT_INSTRUCTION};
use crate::llm_client::{LlmClient, MODEL};
use crate::rewrite::prompts::{REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM};

/// Upper bound on each input, in characters. Keeps the prompt well inside the
/// model's context window.
pub const MAX_INPUT_CHARS: usize = 40_000;

#[derive(Debug, Clone, Serialize)]
pub struct RewriteResponse {
    pub rewritten_resume: String,
    pub model: &'static str,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Rejects blank or oversized inputs before any tokens are spent.
pub fn validate_inputs(resume_text: &str, job_description: &str) -> Result<(), AppError> {
    for (name, value) in [("resume", resume_text), ("job_description", job_description)] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} cannot be empty")));
        }
        let chars = value.chars().count();
        if chars > MAX_INPUT_CHARS {
            return Err(AppError::Validation(format!(
                "{name} is too long ({chars} chars, max {MAX_INPUT_CHARS})"
            )));
        }
    }
    Ok(())
}

pub fn build_rewrite_prompt(resume_text: &str, job_description: &str) -> String {
    fill_template(
        REWRITE_PROMPT_TEMPLATE,
        &[
            ("{grounding_instruction}", GROUNDING_INSTRUCTION),
            ("{output_instruction}", PLAIN_OUTPUT_INSTRUCTION),
            ("{job_description}", job_description.trim()),
            ("{resume_text}", resume_text.trim()),
        ],
    )
}

/// Substitutes placeholders in a single left-to-right pass. Substituted text is
/// never scanned again, so user input containing `{resume_text}` stays literal.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Sends the resume and job description to the LLM and returns the rewrite.
pub async fn rewrite_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
) -> Result<RewriteResponse, AppError> {
    validate_inputs(resume_text, job_description)?;

    let prompt = build_rewrite_prompt(resume_text, job_description);
    let completion = llm
        .call_text(&prompt, REWRITE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to rewrite resume: {e}")))?;

    info!(
        "Resume rewritten: {} chars in, {} chars out",
        resume_text.len(),
        completion.text.len()
    );

    Ok(RewriteResponse {
        rewritten_resume: completion.text,
        model: MODEL,
        input_tokens: completion.usage.input_tokens,
        output_tokens: completion.usage.output_tokens,
    })
}
