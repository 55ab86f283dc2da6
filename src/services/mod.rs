pub mod completion;
pub mod prompts;
