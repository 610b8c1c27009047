pub mod cli;
pub mod complete;
pub mod tree;

pub use cli::engine::{CompletionReply, Engine};
pub use complete::context::TokenContext;
pub use complete::generator::Fetcher;
pub use complete::suggest::Suggestion;
