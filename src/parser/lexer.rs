//! Logos-based lexer for markup arguments
//!
//! Splits the text following a keyword into whitespace-separated arguments.
//! Quoted string literals are kept whole, quotes included, even when they
//! contain whitespace. Whitespace is Unicode `White_Space` throughout, the
//! same set `str::split_whitespace` and `str::trim` use.

use logos::Logos;

/// Kind of an argument token
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum ArgumentKind {
    #[regex(r#""([^"\\]|\\.)*""#, priority = 5)]
    DoubleQuoted,

    #[regex(r"'[^']*'", priority = 5)]
    SingleQuoted,

    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", priority = 4)]
    Number,

    #[regex(r"[^\s]+", priority = 1)]
    Word,
}

/// An argument with its kind and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument<'a> {
    pub kind: ArgumentKind,
    pub text: &'a str,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct ArgumentLexer<'a> {
    input: &'a str,
    /// Offset of `inner`'s input within `input`
    base: usize,
    inner: logos::Lexer<'a, ArgumentKind>,
}

impl<'a> ArgumentLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            base: 0,
            inner: ArgumentKind::lexer(input),
        }
    }

    /// Keep the first blank-free run of rejected text, e.g. an unclosed
    /// quote, and restart lexing right after it.
    fn recover(&mut self) -> Option<Argument<'a>> {
        let span = self.inner.span();
        let rejected = &self.input[self.base + span.start..self.base + span.end];
        let start = rejected.len() - rejected.trim_start().len();
        let word = rejected[start..].split(char::is_whitespace).next()?;
        if word.is_empty() {
            return None;
        }

        let resume = self.base + span.start + start + word.len();
        if resume < self.base + span.end {
            self.base = resume;
            self.inner = ArgumentKind::lexer(&self.input[resume..]);
        }
        Some(Argument {
            kind: ArgumentKind::Word,
            text: word,
        })
    }
}

impl<'a> Iterator for ArgumentLexer<'a> {
    type Item = Argument<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Ok(kind) => Some(Argument {
                kind,
                text: self.inner.slice(),
            }),
            Err(()) => self.recover(),
        }
    }
}

/// Tokenize an entire argument string into a Vec
pub fn arguments(input: &str) -> Vec<Argument<'_>> {
    ArgumentLexer::new(input).collect()
}
