use thiserror::Error;

/// Domain failures the pipeline promotes above the generic error chain.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The research provider answered, but with nothing usable. A silent
    /// empty note is worse than a visible failure, so this is raised instead
    /// of returning blank fields.
    #[error("research for '{topic}' produced an empty summary")]
    EmptyResearch { topic: String },
}
