//! Prompt construction for the extraction call.

/// Fixed instruction: strict JSON, no prose.
pub const SYSTEM_PROMPT: &str = "You extract assignments from college syllabus excerpts. \
Given lines of syllabus text, return ONLY a JSON object of the form \
{\"assignments\": [{\"title\": string, \"dueDate\": \"YYYY-MM-DD\", \"category\": string}]}. \
Use categories like Assignment, Discussion, Quiz, Exam, Project, Lab. \
Omit dueDate if no date is present. Do not include any text outside the JSON object.";

/// Join candidate lines into the user message.
pub fn build_user_prompt(lines: &[String]) -> String {
    format!(
        "Extract the assignments from these syllabus lines:\n\n{}",
        lines.join("\n")
    )
}
