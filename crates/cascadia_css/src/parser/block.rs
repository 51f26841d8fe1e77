use crate::node::Node;
use crate::tokens::{Token, TokenKind};
use crate::TreeBuilder;

impl TreeBuilder<'_> {
    /// Collects the nodes of one body. Tokens are consumed and dispatched
    /// while `accept` holds; a rejected token is handed back to the cursor so
    /// the enclosing reader can pick it up, except for the terminal `End`
    /// marker, which only exists to stop a loop and is dropped instead.
    fn read_body(&mut self, accept: fn(&Self, &Token) -> bool) -> Vec<Node> {
        let mut nodes = Vec::new();

        while let Some(token) = self.cursor.consume() {
            if !accept(self, &token) {
                if token.kind != TokenKind::End {
                    self.cursor.reconsume();
                }
                break;
            }

            if let Some(node) = self.dispatch(token) {
                nodes.push(node);
            }
        }

        nodes
    }

    /// Flat body of a rule or of a declaration-only at-rule
    pub(crate) fn parse_declaration_list(&mut self) -> Vec<Node> {
        self.read_body(|_, token| matches!(token.kind, TokenKind::Property | TokenKind::Comment))
    }

    /// Nested body of an at-rule block. The predicate reads the shared depth
    /// counter on every step, so the decrement a dispatched block-end
    /// performs ends this loop right where the block closes.
    pub(crate) fn parse_rule_list(&mut self) -> Vec<Node> {
        self.read_body(|builder, _| builder.depth > 0)
    }
}
