mod completion;

pub use completion::{CompletionClient, CompletionRequest, ScriptedCompletionClient};
