pub mod extractor;
pub mod problem_store;
pub mod resolver;
pub mod segmenter;
pub mod tokenizer;
pub mod tokens;

pub use extractor::extract;
pub use resolver::AnswerResolver;
pub use segmenter::{segment, Sections};
pub use tokenizer::split_items;
