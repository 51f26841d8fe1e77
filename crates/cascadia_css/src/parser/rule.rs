use crate::node::{Node, NodeOverrides};
use crate::tokens::Token;
use crate::TreeBuilder;

impl TreeBuilder<'_> {
    /// A selector token opens a style rule: the selector text splits on
    /// commas into the selector list, and the flat declaration body that
    /// follows belongs to this rule.
    pub(crate) fn parse_rule(&mut self, token: &Token) -> Option<Node> {
        log::trace!("parse_rule");

        let selectors = token
            .text
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|part| part.trim().to_string())
            .collect();

        let declarations = self.parse_declaration_list();

        let overrides = NodeOverrides {
            selectors: Some(selectors),
            declarations: Some(declarations),
            ..Default::default()
        };
        self.build_node(token, overrides)
    }
}
