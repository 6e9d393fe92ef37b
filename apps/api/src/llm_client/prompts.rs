// Cross-cutting prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that rewrites user-supplied material.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Use only facts present in the candidate's resume. \
    Do NOT invent employers, titles, dates, degrees, certifications, or metrics. \
    If the job description asks for something the resume does not show, leave it out \
    rather than implying experience the candidate does not have.";

/// Keeps the model from wrapping the answer in commentary.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "\
    Respond with the finished document only. \
    Do NOT include explanations, notes to the reader, or apologies.";
