// src/services/prompts.rs
//! System and user prompts for each endpoint.

pub const TUTOR_SYSTEM: &str = "You are a friendly AI study buddy for college students. \
Explain concepts step by step with simple examples, and keep answers concise but clear.";

pub const SUMMARIZER_SYSTEM: &str = "You are an expert at summarizing lecture notes for exams. \
Keep all important definitions, formulas and keywords.";

pub const QUIZ_SYSTEM: &str =
    "You are an exam coach. You make short quizzes to help students self-test.";

/// Question prompt, with the student's extra context appended when given.
pub fn ask_prompt(question: &str, extra: &str) -> String {
    if extra.is_empty() {
        question.to_string()
    } else {
        format!("{question}\n\nExtra context/notes from the student:\n{extra}")
    }
}

pub fn summary_prompt(notes: &str) -> String {
    format!(
        "Summarize these notes for a student.\n\n\
         Output format:\n\
         1. A very short title\n\
         2. 5–10 bullet points with key ideas\n\
         3. One short revision paragraph at the end.\n\n\
         Notes:\n{notes}"
    )
}

pub fn quiz_prompt(notes: &str) -> String {
    format!(
        "Make a 5-question quiz (MCQ if possible) from these notes or topic. \
         After each question, show the correct answer on the next line starting \
         with 'Answer:'. Use simple language.\n\n\
         Notes/topic:\n{notes}"
    )
}
