pub mod batch;
pub mod problem;

pub use batch::{AnswerPayload, BatchProblemResponse, ParsedItem, ProblemBatch, ResolvedItem};
pub use problem::{ChoiceOption, ProblemKind, ProblemStem};
