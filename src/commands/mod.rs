mod inline;

pub use inline::{inline, InlineError};
