//! Instruction templates for the rewriting service.
//!
//! Pure functions: identical inputs always produce identical prompt
//! strings, so outbound request bodies are deterministic.

/// Prompt for rewriting `text` in the given tone and language.
pub fn rewrite_prompt(text: &str, mode: &str, language: &str) -> String {
    format!(
        "You are an expert content rewriter.\n\
         \n\
         Rewrite the text below in {language} using a **{mode}** tone.\n\
         Maintain the original meaning, make it engaging, and improve flow.\n\
         \n\
         Rules:\n\
         - Keep meaning & context same.\n\
         - Maintain natural tone in {language}.\n\
         - Don't shorten too much unless it improves readability.\n\
         - Avoid repetition or unnecessary words.\n\
         - Output only the rewritten text.\n\
         \n\
         Text:\n\
         {text}\n\
         \n\
         Rewritten version:\n"
    )
}

/// Prompt for condensing `text` into a short summary.
pub fn summarize_prompt(text: &str) -> String {
    format!(
        "Summarize this text in 3-4 clear sentences, keeping key ideas only.\n\
         \n\
         Text:\n\
         {text}\n\
         \n\
         Summary:\n"
    )
}

/// Prompt for elaborating on `text`.
pub fn expand_prompt(text: &str) -> String {
    format!(
        "Expand the following text by adding examples, clarity, and smooth transitions.\n\
         \n\
         Text:\n\
         {text}\n\
         \n\
         Expanded version:\n"
    )
}
