//! Link targets and substitution definitions.
//!
//! Both are deferred-placement elements: a section renders its link
//! targets immediately before its title and its definitions after all
//! other content. Each also implements [`Render`], so either can instead
//! be placed explicitly in the body at a position of the caller's
//! choosing.

use super::Render;

/// A named link target, rendered as `.. _name:`.
///
/// Declared on a section, it lands above the title so inline references
/// (`` `name`_ ``) can point at that section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    name: String,
    target: String,
}

impl LinkTarget {
    /// An internal target pointing at the place it is rendered.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: String::new(),
        }
    }

    /// A target with an explicit destination, rendered as `.. _name: url`.
    pub fn with_target(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

impl Render for LinkTarget {
    fn render(&self) -> String {
        if self.target.is_empty() {
            format!(".. _{}:", self.name)
        } else {
            format!(".. _{}: {}", self.name, self.target)
        }
    }

    fn clone_box(&self) -> Box<dyn Render> {
        Box::new(self.clone())
    }
}

/// A substitution definition, rendered as `.. |name| replace:: text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    name: String,
    text: String,
}

impl Definition {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl Render for Definition {
    fn render(&self) -> String {
        format!(".. |{}| replace:: {}", self.name, self.text)
    }

    fn clone_box(&self) -> Box<dyn Render> {
        Box::new(self.clone())
    }
}
