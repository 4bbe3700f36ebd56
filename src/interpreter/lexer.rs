use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Classifies a lexical token in the source input.
///
/// Rules are declared in priority order. Whitespace is matched and skipped,
/// so [`TokenKind::Ignore`] never leaves the lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Spaces, tabs and line breaks.
    #[regex(r"\s+", logos::skip)]
    Ignore,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `ans`, the previous answer.
    #[token("ans")]
    Ans,
    /// Numeric literals such as `42`, `42.`, `.5`, `3.14` or `2.1e-10`.
    #[regex(r"([0-9]*\.[0-9]+|[0-9]+\.?)([eE][+-]?[0-9]+)?", number_boundary)]
    Number,
}

impl TokenKind {
    /// Returns the single character used to tag this kind when a token is
    /// displayed. `Ignore` never reaches a token and maps to `'\0'`.
    ///
    /// # Example
    /// ```
    /// use anscalc::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Number.tag(), 'N');
    /// assert_eq!(TokenKind::Ans.tag(), '_');
    /// assert_eq!(TokenKind::Slash.tag(), '/');
    /// ```
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Ignore => '\0',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::LParen => '(',
            Self::RParen => ')',
            Self::Ans => '_',
            Self::Number => 'N',
        }
    }
}

/// Rejects a number that runs straight into another `.`, digit or exponent
/// marker, as in `1.2.3` or `4e`.
fn number_boundary(lex: &logos::Lexer<TokenKind>) -> bool {
    !lex.remainder()
        .starts_with(|c: char| c == '.' || c == 'e' || c == 'E' || c.is_ascii_digit())
}

/// A minimal but meaningful unit of the source text.
///
/// The token borrows its text from the source, so it cannot outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source text the token was matched from.
    pub text:     &'a str,
    /// Byte offset of the token in the source.
    pub position: usize,
}

impl<'a> Token<'a> {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, position: usize) -> Self {
        Self { kind,
               text,
               position }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{{ \"type\": \"{}\", \"value\": \"{}\" }}",
               self.kind.tag(),
               self.text)
    }
}

/// Pulls tokens from a source string on demand.
///
/// Tokens handed back through [`Lexer::putback`] are returned again, most
/// recent first, before any new input is scanned.
///
/// # Example
/// ```
/// use anscalc::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("2 * ans");
/// let two = lexer.next().unwrap().unwrap();
/// assert_eq!(two.kind, TokenKind::Number);
///
/// lexer.putback(two);
/// assert_eq!(lexer.next().unwrap().unwrap().text, "2");
/// assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Star);
/// assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Ans);
/// assert!(lexer.next().unwrap().is_none());
/// ```
pub struct Lexer<'a> {
    inner:   logos::Lexer<'a, TokenKind>,
    pending: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner:   TokenKind::lexer(source),
               pending: Vec::new(), }
    }

    /// Returns the whole source text being scanned.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.inner.source()
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    /// Returns [`LexError::UnrecognizedToken`] if the input at the cursor
    /// matches no rule. The lexer does not try to recover.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<Token<'a>>, LexError> {
        if let Some(token) = self.pending.pop() {
            return Ok(Some(token));
        }

        match self.inner.next() {
            None => Ok(None),
            Some(Ok(kind)) => {
                let token = Token::new(kind, self.inner.slice(), self.inner.span().start);
                trace!("token {token}");
                Ok(Some(token))
            },
            Some(Err(())) => {
                Err(LexError::UnrecognizedToken { token:    self.inner.slice().to_string(),
                                                  position: self.inner.span().start, })
            },
        }
    }

    /// Makes `token` the next one returned by [`Lexer::next`].
    pub fn putback(&mut self, token: Token<'a>) {
        self.pending.push(token);
    }
}
