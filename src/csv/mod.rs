//! CSV utilities for scanning and encoding

mod encoder;
mod scanner;

pub use encoder::CsvEncoder;
pub use scanner::{CsvScanner, Records, Token, Tokens};
