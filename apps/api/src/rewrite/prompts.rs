// LLM prompt constants for resume rewriting.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resume rewriting.
pub const REWRITE_SYSTEM: &str = "You are an expert resume writer and career coach. \
    You tailor an existing resume to a specific job posting so that it passes \
    applicant tracking systems and reads well to a hiring manager. \
    You never fabricate experience.";

/// Resume rewrite prompt template.
/// Replace: {grounding_instruction}, {output_instruction}, {job_description}, {resume_text}
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Rewrite the resume below so it targets the job description.

Guidelines:
1. Keep the candidate's real history: same employers, titles, dates, and education
2. Reorder and rephrase bullets so the most relevant experience comes first
3. Mirror the job description's terminology where the resume already supports it
4. Start bullets with strong action verbs and keep any numbers the resume states
5. Open with a 2-3 sentence professional summary aimed at this role
6. Use plain text with simple section headings (SUMMARY, EXPERIENCE, SKILLS, EDUCATION)

{output_instruction}

JOB DESCRIPTION:
{job_description}

CURRENT RESUME:
{resume_text}"#;
