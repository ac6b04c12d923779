//! Horizontal transitions.

use super::Render;

/// A transition: a horizontal rule separating body content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition;

impl Render for Transition {
    fn render(&self) -> String {
        "----".to_string()
    }

    fn clone_box(&self) -> Box<dyn Render> {
        Box::new(*self)
    }
}
