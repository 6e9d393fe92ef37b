// Resume rewriting: PDF text extraction, prompt assembly, LLM rewrite.
// All LLM calls go through llm_client.

pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod rewriter;
