//! Tokenizer for query text
//!
//! Operators are keywords wrapped in underscores (`_AND_`, `_OR_`, `_NOT_`,
//! any case). Everything else that is not whitespace or a parenthesis is
//! part of a word. Tokenizing never fails: an underscore sequence that is
//! not a recognized operator comes back as a word with its full text.

use serde::{Deserialize, Serialize};

/// Delimiter surrounding an operator keyword
pub const OPERATOR_DELIMITER: char = '_';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Word(String),
    And,
    Or,
    Not,
    LeftParen,
    RightParen,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    fn text(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    fn read_word(&mut self) -> Token {
        let start = self.position;
        while self.peek().is_some_and(is_word_char) {
            self.position += 1;
        }
        Token::Word(self.text(start))
    }

    /// Read `_KEYWORD_` starting at the opening delimiter
    fn read_marker(&mut self) -> Token {
        let start = self.position;
        self.position += 1;
        while self
            .peek()
            .is_some_and(|c| c != OPERATOR_DELIMITER && !c.is_whitespace() && !is_paren(c))
        {
            self.position += 1;
        }
        let keyword = self.text(start + 1);

        if self.peek() != Some(OPERATOR_DELIMITER) {
            return Token::Word(self.text(start));
        }
        self.position += 1;

        match keyword.to_ascii_uppercase().as_str() {
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            _ => Token::Word(self.text(start)),
        }
    }

    /// Get the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let token = match self.peek()? {
            '(' => {
                self.position += 1;
                Token::LeftParen
            }
            ')' => {
                self.position += 1;
                Token::RightParen
            }
            OPERATOR_DELIMITER => self.read_marker(),
            _ => self.read_word(),
        };
        Some(token)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn is_paren(c: char) -> bool {
    c == '(' || c == ')'
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !is_paren(c) && c != OPERATOR_DELIMITER
}

/// Tokenize a whole query
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
