use crate::syntax::types::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Please enter text for the step")]
    EmptyText,

    #[error("Add a start node first")]
    NotStarted,

    #[error("The flowchart already has a start node")]
    AlreadyStarted,

    #[error("Flowchart already ended; delete the end step or reset")]
    AlreadyEnded,

    #[error("No step with id {0}")]
    UnknownNode(NodeId),

    #[error("The end step {0} cannot be connected from or looped to")]
    EndNodeReferenced(NodeId),

    #[error("Sources must be distinct: {0} is used twice")]
    DuplicateSource(NodeId),

    #[error("The start node cannot be deleted")]
    CannotDeleteStart,

    #[error("No steps were selected to connect to the end")]
    NoEndSources,

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}
