pub mod error;
pub mod metric;
pub mod ngram;

pub use error::*;
pub use metric::*;
pub use ngram::*;
