pub mod codegen;
pub mod config;
pub mod debug;
pub mod error;
pub mod expand;
pub mod extractor;
pub mod fragment;
pub mod lexer;
pub mod parser;

pub use codegen::*;
pub use config::*;
pub use expand::*;
pub use extractor::*;
pub use fragment::*;
pub use lexer::*;
pub use parser::*;
