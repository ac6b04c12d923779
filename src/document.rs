//! Documents and the root-level document builder.

use crate::element::{Definition, Directive, LinkTarget, Paragraph, Render, Transition};
use crate::error::Result;
use crate::node::{ContentNode, ROOT_LEVEL};
use crate::section::Section;

/// An immutable, fully built document.
///
/// The outermost, unbordered container: its name labels the output file
/// rather than rendering as a heading. Like [`Section`], a document owns
/// a deep copy of its content and never changes after construction.
#[derive(Debug, Clone)]
pub struct Document {
    node: ContentNode,
}

impl Document {
    /// Start building a document with the given name.
    pub fn builder(name: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(name)
    }

    /// The document name, used by the export layer for the file name.
    pub fn name(&self) -> &str {
        self.node.title()
    }

    /// Render the whole document to reStructuredText.
    ///
    /// Fails with [`Error::DepthExceeded`](crate::Error::DepthExceeded)
    /// if any section sits deeper than the border table allows.
    pub fn write(&self) -> Result<String> {
        let rendered = self.node.render()?;
        if rendered.is_empty() {
            return Ok(rendered);
        }
        Ok(format!("{}\n", rendered))
    }
}

/// Accumulates root-level document content.
///
/// A document cannot nest inside another document, so there is no
/// sub-section stack here; pre-built [`Section`]s are appended as
/// ordinary content instead, in the order supplied.
#[derive(Debug)]
pub struct DocumentBuilder {
    root: ContentNode,
}

impl DocumentBuilder {
    /// Create a builder for a document with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            root: ContentNode::new(name, ROOT_LEVEL),
        }
    }

    /// Append a plain paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_element(Paragraph::new(text))
    }

    /// Append any renderable element.
    pub fn add_element(&mut self, element: impl Render + 'static) -> &mut Self {
        self.root.add_element(Box::new(element));
        self
    }

    /// Append a directive block.
    pub fn add_directive(&mut self, directive: Directive) -> &mut Self {
        self.add_element(directive)
    }

    /// Append a transition.
    pub fn add_transition(&mut self) -> &mut Self {
        self.add_element(Transition)
    }

    /// Declare a link target rendered at the very top of the document.
    pub fn add_link_target(&mut self, name: impl Into<String>) -> &mut Self {
        self.root.add_link_target(LinkTarget::new(name));
        self
    }

    /// Defer a definition to the end of the document.
    pub fn add_definition(&mut self, definition: Definition) -> &mut Self {
        self.root.add_definition(definition);
        self
    }

    /// Append a pre-built section. Top-level sections render at depth 0,
    /// one below the document's sentinel root level.
    pub fn add_section(&mut self, section: &Section) -> &mut Self {
        self.root.add_section(section.node().clone());
        self
    }

    /// Snapshot the accumulated content into an immutable [`Document`].
    ///
    /// Cannot fail: there is no stack to leave open. The builder stays
    /// usable afterward; later mutations are invisible to the returned
    /// document.
    pub fn build(&self) -> Document {
        Document {
            node: self.root.clone(),
        }
    }
}
