use crate::node::{Node, NodeOverrides};
use crate::tokens::{Token, TokenKind};
use crate::TreeBuilder;

impl TreeBuilder<'_> {
    /// Builds one at-rule group node. The kind decides the body shape:
    /// font-face and viewport hold a flat declaration list, page holds its
    /// prefix plus a flat declaration list, everything else holds its prefix
    /// plus a nested rule list. The depth increment happens here; the
    /// matching decrement is driven later by the block-end token reaching the
    /// dispatcher, never by this routine.
    pub(crate) fn parse_at_rule(&mut self, token: &Token) -> Option<Node> {
        log::trace!("parse_at_rule");

        self.enter_group();

        let mut overrides = NodeOverrides::default();
        match token.kind {
            TokenKind::FontFace | TokenKind::Viewport => {
                overrides.declarations = Some(self.parse_declaration_list());
            }
            TokenKind::Page => {
                overrides.prefix = token.prefix.clone();
                overrides.declarations = Some(self.parse_declaration_list());
            }
            _ => {
                overrides.prefix = token.prefix.clone();
                overrides.rules = Some(self.parse_rule_list());
            }
        }

        self.build_node(token, overrides)
    }
}
