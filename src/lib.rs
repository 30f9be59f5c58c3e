pub mod error;
pub mod scanner;

pub use error::{ErrorKind, LexError};
pub use scanner::position::{Position, Source};
pub use scanner::token::{Literal, Token, TokenKind};

/// Tokenize `text`, reporting errors against `source_name`.
pub fn run(source_name: &str, text: &str) -> Result<Vec<Token>, LexError> {
    scanner::scan(source_name, text)
}
