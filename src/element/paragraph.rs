//! Plain text paragraphs.

use super::Render;

/// A paragraph of text.
///
/// Inline markup is plain text in reStructuredText, so spans built with
/// [`Inline`](crate::Inline) can be spliced straight into the paragraph
/// body before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Render for Paragraph {
    fn render(&self) -> String {
        self.text.clone()
    }

    fn clone_box(&self) -> Box<dyn Render> {
        Box::new(self.clone())
    }
}
