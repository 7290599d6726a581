//! Page model and the selector subset used to find quiz content.
//!
//! Supported selectors are compounds of an optional tag and any number of
//! classes (`p`, `.markdown`, `div.option.answered-correct`, `*`), joined by
//! descendant combinators (whitespace).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One element of the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    /// Text directly inside this element, before any children.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub children: Vec<PageNode>,
}

impl PageNode {
    #[must_use]
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Own text followed by all descendant text, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported selector '{selector}': {reason}")]
    Unsupported { selector: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, node: &PageNode) -> bool {
        self.tag
            .as_deref()
            .is_none_or(|tag| tag.eq_ignore_ascii_case(&node.tag))
            && self.classes.iter().all(|c| node.has_class(c))
    }
}

/// A parsed descendant-combinator selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    steps: Vec<Compound>,
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        let unsupported = |reason: &str| SelectorError::Unsupported {
            selector: selector.to_string(),
            reason: reason.to_string(),
        };

        let mut steps = Vec::new();
        for part in selector.split_whitespace() {
            if part.contains(['>', '+', '~', '#', '[', ':']) {
                return Err(unsupported("only tag, class and descendant selectors"));
            }
            let mut pieces = part.split('.');
            let tag = pieces
                .next()
                .filter(|tag| !tag.is_empty() && *tag != "*")
                .map(str::to_string);
            let classes: Vec<String> = pieces.map(str::to_string).collect();
            if classes.iter().any(String::is_empty) {
                return Err(unsupported("empty class name"));
            }
            steps.push(Compound { tag, classes });
        }

        if steps.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self {
            source: selector.trim().to_string(),
            steps,
        })
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// A matched node with its ancestors, outermost first.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    pub node: &'a PageNode,
    ancestors: Vec<&'a PageNode>,
}

impl Selector {
    /// First node in the snapshot `root` matching this selector, in document
    /// order. `root` is the document element and may itself match.
    #[must_use]
    pub fn query<'a>(&self, root: &'a PageNode) -> Option<&'a PageNode> {
        self.locate(root).map(|found| found.node)
    }

    /// Like [`Self::query`], keeping the ancestor chain for scoped lookups.
    #[must_use]
    pub fn locate<'a>(&self, root: &'a PageNode) -> Option<Located<'a>> {
        let mut path = Vec::new();
        self.find(root, &mut path)
    }

    /// First strict descendant of `scope` matching this selector. Ancestors
    /// of `scope` still count for descendant combinators, as with
    /// `element.querySelector`.
    #[must_use]
    pub fn query_within<'a>(&self, scope: &Located<'a>) -> Option<&'a PageNode> {
        let mut path = scope.ancestors.clone();
        path.push(scope.node);
        scope
            .node
            .children
            .iter()
            .find_map(|child| self.find(child, &mut path))
            .map(|found| found.node)
    }

    fn find<'a>(&self, node: &'a PageNode, path: &mut Vec<&'a PageNode>) -> Option<Located<'a>> {
        if self.matches(node, path) {
            return Some(Located {
                node,
                ancestors: path.clone(),
            });
        }
        path.push(node);
        let found = node.children.iter().find_map(|child| self.find(child, path));
        path.pop();
        found
    }

    fn matches(&self, node: &PageNode, ancestors: &[&PageNode]) -> bool {
        let Some((last, rest)) = self.steps.split_last() else {
            return false;
        };
        if !last.matches(node) {
            return false;
        }
        // Right-to-left; greedy nearest-ancestor matching is exact for
        // descendant-only combinators.
        let mut remaining = ancestors.iter().rev();
        rest.iter()
            .rev()
            .all(|step| remaining.any(|ancestor| step.matches(ancestor)))
    }
}
