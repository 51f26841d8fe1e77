use crate::diagnostics::DiagnosticEvent;
use crate::node::{Node, NodeOverrides};
use crate::tokens::{Token, TokenKind};
use crate::TreeBuilder;

mod at_rule;
mod block;
mod rule;
mod stylesheet;

impl TreeBuilder<'_> {
    /// Routes one token to the builder responsible for its kind. Most kinds
    /// produce a node; the structural ones only move state. The depth
    /// decrement for a block-end token happens here and nowhere else.
    fn dispatch(&mut self, token: Token) -> Option<Node> {
        match token.kind {
            TokenKind::Property | TokenKind::Charset | TokenKind::Import | TokenKind::Namespace => {
                self.build_node(&token, NodeOverrides::default())
            }
            TokenKind::Selector => self.parse_rule(&token),
            TokenKind::Comment => self.parse_comment(&token),
            TokenKind::Media
            | TokenKind::Keyframes
            | TokenKind::Supports
            | TokenKind::Document
            | TokenKind::FontFace
            | TokenKind::Viewport
            | TokenKind::Page => self.parse_at_rule(&token),
            TokenKind::BlockEnd => {
                self.exit_group(&token);
                None
            }
            TokenKind::End => None,
        }
    }

    /// Comment nodes only exist when the caller asked for them
    fn parse_comment(&mut self, token: &Token) -> Option<Node> {
        if !self.config.comments {
            return None;
        }

        let overrides = NodeOverrides {
            text: token.text.clone(),
            ..Default::default()
        };
        self.build_node(token, overrides)
    }

    fn build_node(&self, token: &Token, overrides: NodeOverrides) -> Option<Node> {
        Node::build(token, overrides, self.config.position)
    }

    fn enter_group(&mut self) {
        self.depth += 1;
    }

    fn exit_group(&mut self, token: &Token) {
        if self.depth == 0 {
            self.diagnostics.report(DiagnosticEvent::UnbalancedBlockEnd {
                location: token.start,
            });
            return;
        }
        self.depth -= 1;
    }
}
