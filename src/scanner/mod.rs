pub mod lexer;
pub mod position;
pub mod token;

use crate::error::LexError;
use token::Token;

/// Scan source text into a list of tokens.
///
/// All or nothing: on the first unrecognized character no tokens are returned.
pub fn scan(source_name: &str, text: &str) -> Result<Vec<Token>, LexError> {
    lexer::Scanner::new(source_name, text).tokenize()
}
