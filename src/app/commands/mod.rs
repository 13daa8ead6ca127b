pub mod generate;
pub mod template;
