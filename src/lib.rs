pub mod cli;
pub mod converter;
pub mod error;
pub mod format;
pub mod input;
pub mod lexer;
pub mod reader;
pub mod style;
