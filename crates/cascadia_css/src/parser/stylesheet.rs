use crate::diagnostics::DiagnosticEvent;
use crate::node::Stylesheet;
use crate::TreeBuilder;

impl TreeBuilder<'_> {
    /// Drains the whole cursor through the dispatcher and wraps whatever
    /// came out in the stylesheet root, in encounter order.
    pub(crate) fn parse_stylesheet(&mut self) -> Stylesheet {
        log::trace!("parse_stylesheet");

        let mut rules = Vec::new();

        while let Some(token) = self.cursor.consume() {
            if let Some(node) = self.dispatch(token) {
                rules.push(node);
            }
        }

        if self.depth > 0 {
            self.diagnostics.report(DiagnosticEvent::UnclosedGroup { open: self.depth });
        }

        Stylesheet { rules }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::{CollectingDiagnostics, DiagnosticEvent};
    use crate::node::NodeKind;
    use crate::parser_config::ParserConfig;
    use crate::tokens::{Token, TokenKind};
    use crate::TreeBuilder;
    use cascadia_shared::location::Location;

    #[test]
    fn an_empty_token_stream_yields_an_empty_stylesheet() {
        let sheet = TreeBuilder::parse_tokens(vec![], ParserConfig::default());
        assert!(sheet.rules.is_empty());

        let sheet = TreeBuilder::parse_tokens(vec![Token::new(TokenKind::End)], ParserConfig::default());
        assert!(sheet.rules.is_empty());
    }

    #[test]
    fn flat_kinds_copy_through_without_a_body() {
        let sheet = TreeBuilder::parse_tokens(
            vec![
                Token::new(TokenKind::Charset).with_name("\"utf-8\""),
                Token::new(TokenKind::Import).with_name("url(\"fineprint.css\")"),
                Token::new(TokenKind::Namespace).with_name("svg url(http://www.w3.org/2000/svg)"),
                Token::new(TokenKind::End),
            ],
            ParserConfig::default(),
        );

        assert_eq!(sheet.rules.len(), 3);
        assert_eq!(sheet.rules[0].kind, NodeKind::Charset);
        assert_eq!(sheet.rules[0].name.as_deref(), Some("\"utf-8\""));
        assert_eq!(sheet.rules[1].kind, NodeKind::Import);
        assert_eq!(sheet.rules[2].kind, NodeKind::Namespace);
        for node in &sheet.rules {
            assert_eq!(node.declarations, None);
            assert_eq!(node.rules, None);
        }
    }

    #[test]
    fn groups_nest_their_bodies_under_the_group_node() {
        let sheet = TreeBuilder::parse_tokens(
            vec![
                Token::new(TokenKind::Media).with_prefix("@media (min-width: 1px)"),
                Token::new(TokenKind::Selector).with_text("a"),
                Token::new(TokenKind::Property).with_name("color").with_value("red"),
                Token::new(TokenKind::BlockEnd),
            ],
            ParserConfig::default(),
        );

        assert_eq!(sheet.rules.len(), 1);
        let media = &sheet.rules[0];
        assert_eq!(media.kind, NodeKind::Media);
        assert_eq!(media.prefix.as_deref(), Some("@media (min-width: 1px)"));

        let body = media.rules.as_deref().unwrap_or_default();
        assert_eq!(body.len(), 1);
        let rule = &body[0];
        assert_eq!(rule.kind, NodeKind::Rule);
        assert_eq!(rule.selectors.as_deref(), Some(&["a".to_string()][..]));

        let declarations = rule.declarations.as_deref().unwrap_or_default();
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].kind, NodeKind::Property);
        assert_eq!(declarations[0].name.as_deref(), Some("color"));
        assert_eq!(declarations[0].value.as_deref(), Some("red"));
    }

    #[test]
    fn comments_are_dropped_unless_asked_for() {
        let tokens = vec![
            Token::new(TokenKind::Comment).with_text(" top "),
            Token::new(TokenKind::Selector).with_text("a"),
            Token::new(TokenKind::Comment).with_text(" inside "),
            Token::new(TokenKind::Property).with_name("color").with_value("red"),
            Token::new(TokenKind::End),
        ];

        let without = TreeBuilder::parse_tokens(tokens.clone(), ParserConfig::default());
        assert_eq!(without.rules.len(), 1);
        let body = without.rules[0].declarations.as_deref().unwrap_or_default();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].kind, NodeKind::Property);

        let config = ParserConfig {
            comments: true,
            ..Default::default()
        };
        let with = TreeBuilder::parse_tokens(tokens, config);
        assert_eq!(with.rules.len(), 2);
        assert_eq!(with.rules[0].kind, NodeKind::Comment);
        assert_eq!(with.rules[0].text.as_deref(), Some(" top "));
        let body = with.rules[1].declarations.as_deref().unwrap_or_default();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].kind, NodeKind::Comment);
        assert_eq!(body[0].text.as_deref(), Some(" inside "));
        assert_eq!(body[1].kind, NodeKind::Property);
    }

    #[test]
    fn every_node_carries_its_token_span_when_positions_are_on() {
        let config = ParserConfig {
            position: true,
            ..Default::default()
        };
        let sheet = TreeBuilder::parse_tokens(
            vec![
                Token::new(TokenKind::Selector)
                    .with_text("a")
                    .with_span(Location::new(1, 1, 0), Location::new(1, 3, 2)),
                Token::new(TokenKind::Property)
                    .with_name("color")
                    .with_value("red")
                    .with_span(Location::new(1, 5, 4), Location::new(1, 15, 14)),
            ],
            config,
        );

        let rule = &sheet.rules[0];
        let span = rule.position.unwrap_or_default();
        assert_eq!(span.start, Location::new(1, 1, 0));
        assert_eq!(span.end, Location::new(1, 3, 2));

        let property = &rule.declarations.as_deref().unwrap_or_default()[0];
        let span = property.position.unwrap_or_default();
        assert_eq!(span.start, Location::new(1, 5, 4));
        assert_eq!(span.end, Location::new(1, 15, 14));
    }

    #[test]
    fn no_node_carries_a_position_by_default() {
        let sheet = TreeBuilder::parse_tokens(
            vec![
                Token::new(TokenKind::Selector)
                    .with_text("a")
                    .with_span(Location::new(1, 1, 0), Location::new(1, 3, 2)),
                Token::new(TokenKind::Property).with_name("color").with_value("red"),
            ],
            ParserConfig::default(),
        );

        let rule = &sheet.rules[0];
        assert_eq!(rule.position, None);
        assert_eq!(rule.declarations.as_deref().unwrap_or_default()[0].position, None);
    }

    #[test]
    fn two_independent_parses_agree() {
        let tokens = vec![
            Token::new(TokenKind::Charset).with_name("\"utf-8\""),
            Token::new(TokenKind::Media).with_prefix("@media print"),
            Token::new(TokenKind::Selector).with_text("body"),
            Token::new(TokenKind::Property).with_name("font-size").with_value("10pt"),
            Token::new(TokenKind::BlockEnd),
            Token::new(TokenKind::End),
        ];

        let first = TreeBuilder::parse_tokens(tokens.clone(), ParserConfig::default());
        let second = TreeBuilder::parse_tokens(tokens, ParserConfig::default());
        assert_eq!(first, second);
    }

    #[test]
    fn a_stray_block_end_is_reported_and_skipped() {
        let mut diagnostics = CollectingDiagnostics::default();
        let sheet = TreeBuilder::parse_tokens_with(
            vec![
                Token::new(TokenKind::BlockEnd).with_span(Location::new(1, 1, 0), Location::new(1, 2, 1)),
                Token::new(TokenKind::Selector).with_text("a"),
            ],
            ParserConfig::default(),
            &mut diagnostics,
        );

        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.rules[0].kind, NodeKind::Rule);
        assert_eq!(
            diagnostics.events,
            vec![DiagnosticEvent::UnbalancedBlockEnd {
                location: Location::new(1, 1, 0)
            }]
        );
    }

    #[test]
    fn an_unclosed_group_absorbs_the_rest_of_the_stream() {
        let mut diagnostics = CollectingDiagnostics::default();
        let sheet = TreeBuilder::parse_tokens_with(
            vec![
                Token::new(TokenKind::Media).with_prefix("@media screen"),
                Token::new(TokenKind::Selector).with_text("a"),
                Token::new(TokenKind::Property).with_name("color").with_value("red"),
                Token::new(TokenKind::Selector).with_text("b"),
            ],
            ParserConfig::default(),
            &mut diagnostics,
        );

        // everything after the open group folded into its body
        assert_eq!(sheet.rules.len(), 1);
        let media = &sheet.rules[0];
        assert_eq!(media.rules.as_ref().map(Vec::len), Some(2));
        assert_eq!(diagnostics.events, vec![DiagnosticEvent::UnclosedGroup { open: 1 }]);
    }
}
