use crate::tokens::Token;

/// Ordered view over the token stream of one parse. The backing sequence is
/// never modified; consuming advances an index, and `reconsume` moves it back
/// so the last token can be handed to an enclosing reader.
#[derive(Debug)]
pub struct TokenCursor {
    /// Full token sequence for this parse
    tokens: Vec<Token>,
    /// Position of the NEXT token to consume
    position: usize,
}

impl TokenCursor {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> TokenCursor {
        TokenCursor { tokens, position: 0 }
    }

    /// Removes and returns the foremost token, or None when the stream is
    /// exhausted
    pub fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Steps back over the most recently consumed token. At most one token
    /// may be pending between successive `consume` calls.
    pub fn reconsume(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    #[must_use]
    pub fn eof(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
