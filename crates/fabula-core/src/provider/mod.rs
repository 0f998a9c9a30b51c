mod prompt_execute;
mod text_generate;

pub use prompt_execute::*;
pub use text_generate::*;
