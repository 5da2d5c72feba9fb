pub mod prompt;
pub mod utils;
