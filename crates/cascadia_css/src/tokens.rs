use cascadia_shared::errors::CssResult;
use cascadia_shared::location::Location;

/// The closed set of token kinds the lexer may hand to the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Selector text of a style rule, up to its opening brace
    Selector,
    /// A `property: value` declaration
    Property,
    Comment,
    Charset,
    Import,
    Namespace,
    Media,
    Keyframes,
    Supports,
    Document,
    FontFace,
    Viewport,
    Page,
    /// Closes the innermost open at-rule block
    BlockEnd,
    /// Terminal marker, emitted once when the source is exhausted
    End,
}

impl TokenKind {
    /// At-rule kinds whose token opens a block of nested content
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            TokenKind::Media
                | TokenKind::Keyframes
                | TokenKind::Supports
                | TokenKind::Document
                | TokenKind::FontFace
                | TokenKind::Viewport
                | TokenKind::Page
        )
    }
}

/// A single lexical unit as produced by the lexer. Which of the optional
/// fields are filled in depends on the kind; the tree builder only ever reads
/// tokens, it never changes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Name part, e.g. the property name or the keyframes identifier
    pub name: Option<String>,
    /// Raw text, e.g. selector text or comment body
    pub text: Option<String>,
    /// The at-rule prelude including the `@` keyword
    pub prefix: Option<String>,
    /// Value part, e.g. the property value
    pub value: Option<String>,
    /// Position of the first character this token covers
    pub start: Location,
    /// Position just past the last character this token covers
    pub end: Location,
}

impl Token {
    /// Returns a new token of the given kind with no fields filled in
    #[must_use]
    pub fn new(kind: TokenKind) -> Token {
        Token {
            kind,
            name: None,
            text: None,
            prefix: None,
            value: None,
            start: Location::default(),
            end: Location::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Token {
        self.name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Token {
        self.text = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Token {
        self.prefix = Some(prefix.to_string());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Token {
        self.value = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn with_span(mut self, start: Location, end: Location) -> Token {
        self.start = start;
        self.end = end;
        self
    }
}

/// The lexer collaborator. Tokenization owns character-level scanning,
/// quoting and comment extraction; the tree builder starts where this trait
/// ends. Implementations must terminate the stream with a single
/// [`TokenKind::End`] token (the builder also copes when it is missing).
pub trait Tokenize {
    fn tokenize(&self, source: &str) -> CssResult<Vec<Token>>;
}
