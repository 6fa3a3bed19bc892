//! Lexer for validator argument text
//!
//! Splits raw argument text into literal tokens. Quoted strings and regular
//! expression literals are read as whole tokens, so commas, brackets and
//! parentheses inside them never act as delimiters.

use regex::Regex;

use crate::error::ArgumentError;

/// Kinds of tokens in argument text.
#[derive(Debug, Clone)]
pub(crate) enum TokenKind {
    LeftBracket,
    RightBracket,
    Comma,
    String(String),
    Number(f64),
    Bool(bool),
    Regex(Regex),
    Eof,
}

/// A token together with its byte offset in the source.
#[derive(Debug, Clone)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
}

impl Token {
    /// Short description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match &self.kind {
            TokenKind::LeftBracket => "'['".to_string(),
            TokenKind::RightBracket => "']'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Number(_) => "number literal".to_string(),
            TokenKind::Bool(_) => "boolean literal".to_string(),
            TokenKind::Regex(_) => "regular expression literal".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// Lexer over raw argument text.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Tokenize the whole input; the last token is always `Eof`.
    pub(crate) fn tokenize(&mut self) -> Result<Vec<Token>, ArgumentError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, ArgumentError> {
        self.skip_whitespace();

        let offset = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                offset,
            });
        };

        let kind = match ch {
            '[' => {
                self.advance();
                TokenKind::LeftBracket
            }
            ']' => {
                self.advance();
                TokenKind::RightBracket
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '"' | '\'' | '`' => TokenKind::String(self.read_string(ch)?),
            '/' => TokenKind::Regex(self.read_regex()?),
            '-' | '+' | '.' => TokenKind::Number(self.read_number()?),
            ch if ch.is_ascii_digit() => TokenKind::Number(self.read_number()?),
            ch if ch.is_alphabetic() || ch == '_' || ch == '$' => self.read_keyword()?,
            other => {
                return Err(ArgumentError::Unexpected {
                    found: format!("character '{other}'"),
                    expected: "a literal",
                    offset,
                });
            }
        };

        Ok(Token { kind, offset })
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek(&self) -> Option<char> {
        let current = self.current_char()?;
        self.input[self.position + current.len_utf8()..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Read a quoted string, processing escape sequences.
    fn read_string(&mut self, quote: char) -> Result<String, ArgumentError> {
        let start = self.position;
        self.advance(); // opening quote

        let mut result = String::new();

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == quote {
                return Ok(result);
            }
            if ch == '\\' {
                let Some(escaped) = self.current_char() else {
                    break;
                };
                self.advance();
                match escaped {
                    'n' => result.push('\n'),
                    't' => result.push('\t'),
                    'r' => result.push('\r'),
                    'b' => result.push('\u{8}'),
                    'f' => result.push('\u{c}'),
                    'v' => result.push('\u{b}'),
                    '0' => result.push('\0'),
                    // line continuation
                    '\n' => {}
                    'u' => result.push(self.read_unicode_escape(start)?),
                    'x' => result.push(self.read_hex_escape(2, start)?),
                    other => result.push(other),
                }
            } else if ch == '\n' && quote != '`' {
                break;
            } else {
                result.push(ch);
            }
        }

        Err(ArgumentError::UnterminatedString { offset: start })
    }

    fn read_unicode_escape(&mut self, start: usize) -> Result<char, ArgumentError> {
        if self.current_char() != Some('{') {
            return self.read_hex_escape(4, start);
        }

        self.advance();
        let digits_start = self.position;
        while self.current_char().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
        }
        let digits = &self.input[digits_start..self.position];
        if self.current_char() != Some('}') {
            return Err(self.invalid_escape(start));
        }
        self.advance();

        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.invalid_escape(start))
    }

    fn read_hex_escape(&mut self, len: usize, start: usize) -> Result<char, ArgumentError> {
        let digits_start = self.position;
        for _ in 0..len {
            if !self.current_char().is_some_and(|c| c.is_ascii_hexdigit()) {
                return Err(self.invalid_escape(start));
            }
            self.advance();
        }

        u32::from_str_radix(&self.input[digits_start..self.position], 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.invalid_escape(start))
    }

    fn invalid_escape(&self, start: usize) -> ArgumentError {
        ArgumentError::Unexpected {
            found: "malformed escape sequence".to_string(),
            expected: "a valid string escape",
            offset: start,
        }
    }

    /// Read a `/pattern/flags` literal.
    ///
    /// A `/` inside a character class or escaped with `\` does not end the
    /// pattern.
    fn read_regex(&mut self) -> Result<Regex, ArgumentError> {
        let start = self.position;
        self.advance(); // opening slash

        let mut pattern = String::new();
        let mut in_class = false;
        let mut closed = false;

        while let Some(ch) = self.current_char() {
            self.advance();
            match ch {
                '\\' => {
                    let Some(escaped) = self.current_char() else {
                        break;
                    };
                    self.advance();
                    if escaped != '/' {
                        pattern.push('\\');
                    }
                    pattern.push(escaped);
                }
                '[' => {
                    in_class = true;
                    pattern.push(ch);
                }
                ']' => {
                    in_class = false;
                    pattern.push(ch);
                }
                '/' if !in_class => {
                    closed = true;
                    break;
                }
                '\n' => break,
                _ => pattern.push(ch),
            }
        }

        if !closed {
            return Err(ArgumentError::UnterminatedRegex { offset: start });
        }

        let mut inline_flags = String::new();
        while let Some(flag) = self.current_char().filter(|c| c.is_alphabetic()) {
            match flag {
                'i' | 'm' | 's' => {
                    if !inline_flags.contains(flag) {
                        inline_flags.push(flag);
                    }
                }
                // global, sticky, unicode and indices flags do not change matching here
                'g' | 'y' | 'u' | 'v' | 'd' => {}
                other => {
                    return Err(ArgumentError::InvalidRegexFlag {
                        flag: other,
                        offset: self.position,
                    });
                }
            }
            self.advance();
        }

        let source = if inline_flags.is_empty() {
            pattern.clone()
        } else {
            format!("(?{inline_flags}){pattern}")
        };

        Regex::new(&source).map_err(|e| ArgumentError::InvalidRegex {
            pattern,
            message: e.to_string(),
        })
    }

    /// Read a decimal number with optional sign, fraction and exponent.
    fn read_number(&mut self) -> Result<f64, ArgumentError> {
        let start = self.position;
        let mut literal = String::new();

        if let Some(sign @ ('-' | '+')) = self.current_char() {
            literal.push(sign);
            self.advance();
            // `- 5` is what token stringification produces for `-5`
            self.skip_whitespace();
        }

        self.read_digits(&mut literal);
        if self.current_char() == Some('.') {
            literal.push('.');
            self.advance();
            self.read_digits(&mut literal);
        }
        if let Some(e @ ('e' | 'E')) = self.current_char() {
            literal.push(e);
            self.advance();
            if let Some(sign @ ('-' | '+')) = self.current_char() {
                literal.push(sign);
                self.advance();
            }
            self.read_digits(&mut literal);
        }

        let has_digits = literal.chars().any(|c| c.is_ascii_digit());
        let trailing_ident = self
            .current_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');

        if !has_digits || trailing_ident {
            while self
                .current_char()
                .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.')
            {
                literal.push(self.current_char().unwrap_or_default());
                self.advance();
            }
            return Err(ArgumentError::InvalidNumber {
                literal,
                offset: start,
            });
        }

        literal
            .parse::<f64>()
            .map_err(|_| ArgumentError::InvalidNumber {
                literal,
                offset: start,
            })
    }

    fn read_digits(&mut self, literal: &mut String) {
        while let Some(ch) = self.current_char().filter(char::is_ascii_digit) {
            literal.push(ch);
            self.advance();
        }
    }

    /// Only `true` and `false` are valid bare words.
    fn read_keyword(&mut self) -> Result<TokenKind, ArgumentError> {
        let start = self.position;
        while self
            .current_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        match &self.input[start..self.position] {
            "true" => Ok(TokenKind::Bool(true)),
            "false" => Ok(TokenKind::Bool(false)),
            word => Err(ArgumentError::Unexpected {
                found: format!("identifier '{word}'"),
                expected: "a literal",
                offset: start,
            }),
        }
    }
}
