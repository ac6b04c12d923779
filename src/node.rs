//! The section tree node shared by the section and document builders.
//!
//! A node owns three independently ordered sequences: the body (leaf
//! elements and nested sections, insertion order), link targets (rendered
//! before the title), and definitions (rendered after everything else).
//! Nested sections are nodes themselves, so the body forms a recursive
//! tree, and `Clone` is a full deep copy: builders snapshot by cloning,
//! which is what makes snapshot aliasing impossible.

use crate::border;
use crate::element::{Definition, LinkTarget, Render};
use crate::error::Result;

/// Root documents sit one level above the outermost sections.
pub(crate) const ROOT_LEVEL: i32 = -1;

/// One entry in a node's body.
///
/// Leaves render infallibly; nested sections recurse through the fallible
/// node renderer (border resolution can fail at depth).
#[derive(Debug, Clone)]
pub(crate) enum BodyItem {
    Element(Box<dyn Render>),
    Section(ContentNode),
}

/// A titled container of ordered content.
///
/// The title and nesting level are fixed at construction and never
/// change. Whoever creates a nested node assigns it `parent level + 1`;
/// a node appended under a new parent keeps the level it was created
/// with.
#[derive(Debug, Clone)]
pub(crate) struct ContentNode {
    title: String,
    level: i32,
    body: Vec<BodyItem>,
    link_targets: Vec<LinkTarget>,
    definitions: Vec<Definition>,
}

impl ContentNode {
    pub(crate) fn new(title: impl Into<String>, level: i32) -> Self {
        Self {
            title: title.into(),
            level,
            body: Vec::new(),
            link_targets: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn level(&self) -> i32 {
        self.level
    }

    pub(crate) fn add_element(&mut self, element: Box<dyn Render>) {
        self.body.push(BodyItem::Element(element));
    }

    pub(crate) fn add_section(&mut self, node: ContentNode) {
        self.body.push(BodyItem::Section(node));
    }

    pub(crate) fn add_link_target(&mut self, target: LinkTarget) {
        self.link_targets.push(target);
    }

    pub(crate) fn add_definition(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    /// Render this node and all descendants.
    ///
    /// Regions appear in order (link targets, title block, body,
    /// definitions), joined by single blank lines. The root sentinel
    /// level renders no title block: a document's title names the file,
    /// not a heading.
    pub(crate) fn render(&self) -> Result<String> {
        let mut blocks = Vec::new();

        for target in &self.link_targets {
            blocks.push(target.render());
        }

        if self.level > ROOT_LEVEL {
            blocks.push(border::title_block(&self.title, self.level)?);
        }

        for item in &self.body {
            match item {
                BodyItem::Element(element) => blocks.push(element.render()),
                BodyItem::Section(node) => blocks.push(node.render()?),
            }
        }

        for definition in &self.definitions {
            blocks.push(definition.render());
        }

        Ok(blocks.join("\n\n"))
    }
}
