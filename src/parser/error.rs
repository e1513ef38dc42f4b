//! Parser error types

use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse error with location information
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Syntax error at a specific location
    #[error("Syntax error at position {position}: {message}")]
    SyntaxError {
        /// Position where the error occurred
        position: usize,
        /// Error message describing the syntax error
        message: String,
    },

    /// Unexpected character in the input
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The character that could not be tokenized
        character: char,
        /// Position where the character was found
        position: usize,
    },

    /// Unexpected token
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The unexpected token that was found
        token: String,
        /// Position where the token was found
        position: usize,
    },

    /// Unexpected end of input
    #[error("Unexpected end of input at position {position}")]
    UnexpectedEndOfInput {
        /// Position where more input was expected
        position: usize,
    },

    /// Invalid numeric literal
    #[error("Invalid number literal at position {position}: {value}")]
    InvalidNumber {
        /// The invalid literal text
        value: String,
        /// Position where the literal started
        position: usize,
    },
}

impl ParseError {
    /// Byte offset the error points at
    pub fn position(&self) -> usize {
        match self {
            ParseError::SyntaxError { position, .. }
            | ParseError::UnexpectedCharacter { position, .. }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEndOfInput { position }
            | ParseError::InvalidNumber { position, .. } => *position,
        }
    }
}
