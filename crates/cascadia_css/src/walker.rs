use crate::node::{Node, NodeKind, Stylesheet};
use std::io::Write;

/// The walker renders a built tree as an indented listing, one line per
/// node. Used for debugging and for compact tree-shape assertions in tests.
pub struct Walker<'a> {
    root: &'a Stylesheet,
}

impl<'a> Walker<'a> {
    #[must_use]
    pub fn new(root: &'a Stylesheet) -> Self {
        Self { root }
    }

    pub fn walk_stdout(&self) {
        let _ = self.walk(&mut std::io::stdout());
    }

    #[must_use]
    pub fn walk_to_string(&self) -> String {
        let mut output: Vec<u8> = Vec::new();

        let _ = self.walk(&mut output);

        String::from_utf8_lossy(&output).to_string()
    }

    fn walk(&self, f: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(f, "[Stylesheet ({})]", self.root.rules.len())?;
        for node in &self.root.rules {
            inner_walk(node, 1, f)?;
        }
        Ok(())
    }
}

fn inner_walk(node: &Node, depth: usize, f: &mut dyn Write) -> Result<(), std::io::Error> {
    let pad = " ".repeat(depth * 2);

    let label = match node.kind {
        NodeKind::Rule => node.selectors.as_deref().unwrap_or_default().join(", "),
        NodeKind::Property => format!(
            "{}: {}",
            node.name.as_deref().unwrap_or_default(),
            node.value.as_deref().unwrap_or_default()
        ),
        NodeKind::Comment => node.text.clone().unwrap_or_default(),
        NodeKind::Charset | NodeKind::Import | NodeKind::Namespace => {
            node.name.clone().unwrap_or_default()
        }
        _ => node
            .prefix
            .as_deref()
            .or(node.name.as_deref())
            .unwrap_or_default()
            .to_string(),
    };

    if label.is_empty() {
        writeln!(f, "{}[{:?}]", pad, node.kind)?;
    } else {
        writeln!(f, "{}[{:?}] {}", pad, node.kind, label)?;
    }

    for child in node.declarations.as_deref().unwrap_or_default() {
        inner_walk(child, depth + 1, f)?;
    }
    for child in node.rules.as_deref().unwrap_or_default() {
        inner_walk(child, depth + 1, f)?;
    }

    Ok(())
}
