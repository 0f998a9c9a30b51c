mod common;
mod generate_content;

pub use common::*;
pub use generate_content::*;
