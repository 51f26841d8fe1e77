use crate::tokens::{Token, TokenKind};
use anyhow::anyhow;
use cascadia_shared::location::Span;
use cascadia_shared::types::Result;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Kinds of nodes the builder can place in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Rule,
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
}

impl NodeKind {
    /// The node kind a token of the given kind materializes as. A selector
    /// token becomes a style rule; the structural kinds (`BlockEnd`, `End`)
    /// never materialize at all.
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<NodeKind> {
        match kind {
            TokenKind::Selector => Some(NodeKind::Rule),
            TokenKind::Property => Some(NodeKind::Property),
            TokenKind::Comment => Some(NodeKind::Comment),
            TokenKind::Charset => Some(NodeKind::Charset),
            TokenKind::Import => Some(NodeKind::Import),
            TokenKind::Namespace => Some(NodeKind::Namespace),
            TokenKind::Media => Some(NodeKind::Media),
            TokenKind::Keyframes => Some(NodeKind::Keyframes),
            TokenKind::Supports => Some(NodeKind::Supports),
            TokenKind::Document => Some(NodeKind::Document),
            TokenKind::FontFace => Some(NodeKind::FontFace),
            TokenKind::Viewport => Some(NodeKind::Viewport),
            TokenKind::Page => Some(NodeKind::Page),
            TokenKind::BlockEnd | TokenKind::End => None,
        }
    }
}

/// A node is a single element in the tree. Which fields are present depends
/// on the kind; absent fields are left out when the tree is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selectors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declarations: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
}

/// Fields a builder routine wants set on the node it is producing, on top of
/// what the token itself carries. An override beats the token's own field,
/// and each override is applied exactly once per build.
#[derive(Debug, Clone, Default)]
pub struct NodeOverrides {
    pub name: Option<String>,
    pub value: Option<String>,
    pub text: Option<String>,
    pub prefix: Option<String>,
    pub selectors: Option<Vec<String>>,
    pub declarations: Option<Vec<Node>>,
    pub rules: Option<Vec<Node>>,
}

impl Node {
    /// Produces a fresh node for the given token. `name` and `value` are
    /// copied from the token unless overridden; the remaining fields come
    /// from the overrides alone. The token is only read.
    pub fn build(token: &Token, overrides: NodeOverrides, attach_position: bool) -> Option<Node> {
        let kind = NodeKind::from_token(token.kind)?;

        let mut node = Node {
            kind,
            name: overrides.name.or_else(|| token.name.clone()),
            value: overrides.value.or_else(|| token.value.clone()),
            text: overrides.text,
            prefix: overrides.prefix,
            selectors: overrides.selectors,
            declarations: overrides.declarations,
            rules: overrides.rules,
            position: None,
        };

        if attach_position {
            node.position = Some(Span::new(token.start, token.end));
        }

        Some(node)
    }
}

/// The root of one parse: the ordered top-level nodes of the stylesheet.
/// The whole tree is owned here; nodes never refer back to their parents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub rules: Vec<Node>,
}

impl Stylesheet {
    /// Renders the tree as JSON, the form the serializer collaborator takes
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow!("cannot serialize stylesheet: {e}"))
    }
}

impl Serialize for Stylesheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut root = serializer.serialize_struct("Stylesheet", 2)?;
        root.serialize_field("kind", "stylesheet")?;
        root.serialize_field("rules", &self.rules)?;
        root.end()
    }
}
