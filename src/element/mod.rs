//! Leaf content elements and the rendering capability they share.
//!
//! Every unit of body content implements [`Render`], so the set of
//! element kinds is open: anything that can turn itself into
//! reStructuredText can sit in a section body. Boxed elements are
//! cloneable through [`Render::clone_box`], which is what lets containers
//! deep-copy their entire body when a builder snapshots.

use std::fmt::Debug;

mod directive;
mod links;
mod paragraph;
mod transition;

pub use directive::Directive;
pub use links::{Definition, LinkTarget};
pub use paragraph::Paragraph;
pub use transition::Transition;

/// A unit of renderable document content.
///
/// `render` is pure: no I/O, no dependency on the container holding the
/// element, identical output on every call.
pub trait Render: Send + Sync + Debug {
    /// Produce the element's reStructuredText, without trailing blank
    /// lines; the containing section supplies block separation.
    fn render(&self) -> String;

    /// Clone into a new boxed element.
    fn clone_box(&self) -> Box<dyn Render>;
}

impl Clone for Box<dyn Render> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
