mod corpus_provider;
mod interpreter;

pub use corpus_provider::ICorpusProvider;
pub use interpreter::{IInterpreter, InterpretationRequest};
