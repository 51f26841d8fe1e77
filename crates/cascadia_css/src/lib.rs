//! Builds a tree-structured representation of a stylesheet out of the token
//! stream a lexer produces. Tokenization itself and re-emitting text from the
//! tree both live with their own collaborators; this crate only groups tokens
//! into nodes.

use crate::cursor::TokenCursor;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::node::Stylesheet;
use crate::parser_config::ParserConfig;
use crate::tokens::{Token, Tokenize};

use cascadia_shared::errors::CssResult;
use cascadia_shared::{timing_start, timing_stop};

pub mod cursor;
pub mod diagnostics;
pub mod node;
pub mod parser;
pub mod parser_config;
pub mod tokens;
pub mod walker;

/// One tree build over one token stream. All state lives here and dies with
/// the builder, so two parses can never bleed into each other.
pub struct TreeBuilder<'d> {
    /// Cursor over the token stream being grouped
    cursor: TokenCursor,
    /// The parser configuration as given
    config: ParserConfig,
    /// How many at-rule blocks are currently open
    depth: usize,
    /// Sink for structural oddities; never changes the produced tree
    diagnostics: &'d mut dyn Diagnostics,
}

impl<'d> TreeBuilder<'d> {
    /// Creates a new builder over the given tokens so only `parse()` needs to
    /// be called
    fn new(tokens: Vec<Token>, config: ParserConfig, diagnostics: &'d mut dyn Diagnostics) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            config,
            depth: 0,
            diagnostics,
        }
    }

    /// Builds the tree for a token sequence
    pub fn parse_tokens(tokens: Vec<Token>, config: ParserConfig) -> Stylesheet {
        let mut diagnostics = LogDiagnostics;
        Self::parse_tokens_with(tokens, config, &mut diagnostics)
    }

    /// Builds the tree for a token sequence, reporting structural oddities to
    /// the given sink
    pub fn parse_tokens_with(
        tokens: Vec<Token>,
        config: ParserConfig,
        diagnostics: &mut dyn Diagnostics,
    ) -> Stylesheet {
        TreeBuilder::new(tokens, config, diagnostics).parse()
    }

    /// Hands raw stylesheet text to the lexer collaborator first, then builds
    /// the tree from whatever tokens it produced
    pub fn parse_str<T: Tokenize>(source: &str, config: ParserConfig, tokenizer: &T) -> CssResult<Stylesheet> {
        let tokens = tokenizer.tokenize(source)?;
        Ok(Self::parse_tokens(tokens, config))
    }

    fn parse(&mut self) -> Stylesheet {
        let t_id = timing_start!("css.build", self.config.source.as_deref().unwrap_or(""));

        let stylesheet = self.parse_stylesheet();

        timing_stop!(t_id);

        stylesheet
    }
}
