//! Sections and the stack-based section builder.
//!
//! The builder lets a caller express a section tree through a linear call
//! sequence: `open_sub_section` pushes the current container onto a stack
//! of in-progress parents and starts a fresh one a level deeper,
//! `close_sub_section` pops and reattaches. Every add targets the
//! innermost open container, so no parent/child wiring appears at the
//! call site.

use crate::element::{Definition, Directive, LinkTarget, Paragraph, Render, Transition};
use crate::error::{Error, Result};
use crate::node::ContentNode;

/// An immutable, fully built section.
///
/// A section owns a deep copy of the content it was built from; the
/// builder that produced it can keep mutating without ever affecting the
/// snapshot, and snapshots can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct Section {
    node: ContentNode,
}

impl Section {
    /// Start building a top-level section with the given title.
    pub fn builder(title: impl Into<String>) -> SectionBuilder {
        SectionBuilder::new(title)
    }

    /// Render the section and all nested content to reStructuredText.
    ///
    /// Fails with [`Error::DepthExceeded`] if any nested section sits
    /// deeper than the border table allows.
    pub fn write(&self) -> Result<String> {
        Ok(format!("{}\n", self.node.render()?))
    }

    pub(crate) fn node(&self) -> &ContentNode {
        &self.node
    }
}

/// Accumulates section content, including nested sub-sections.
///
/// Builders are single-writer: mutate from one thread, then share the
/// built snapshots freely. A builder stays usable after
/// [`build`](Self::build); each snapshot is independent.
#[derive(Debug)]
pub struct SectionBuilder {
    current: ContentNode,
    parents: Vec<ContentNode>,
}

impl SectionBuilder {
    /// Create a builder for a top-level section (nesting depth 0).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            current: ContentNode::new(title, 0),
            parents: Vec::new(),
        }
    }

    /// Append a plain paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_element(Paragraph::new(text))
    }

    /// Append any renderable element.
    pub fn add_element(&mut self, element: impl Render + 'static) -> &mut Self {
        self.current.add_element(Box::new(element));
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

    /// Declare a link target for the current section, rendered above its
    /// title so inline references can point at it.
    pub fn add_link_target(&mut self, name: impl Into<String>) -> &mut Self {
        self.current.add_link_target(LinkTarget::new(name));
        self
    }

    /// Defer a definition to the end of the current section's content.
    pub fn add_definition(&mut self, definition: Definition) -> &mut Self {
        self.current.add_definition(definition);
        self
    }

    /// Append an already built section as a sub-section.
    ///
    /// The section keeps the nesting level it was built with; nesting is
    /// positional, not recomputed from the new parent.
    pub fn add_sub_section(&mut self, section: &Section) -> &mut Self {
        self.current.add_section(section.node().clone());
        self
    }

    /// Open a sub-section one level below the current one.
    ///
    /// Until the matching [`close_sub_section`](Self::close_sub_section),
    /// every addition lands inside the sub-section. Opening is always
    /// permitted; depth is only checked when the finished tree renders.
    pub fn open_sub_section(&mut self, title: impl Into<String>) -> &mut Self {
        let child = ContentNode::new(title, self.current.level() + 1);
        self.parents.push(std::mem::replace(&mut self.current, child));
        self
    }

    /// Close the innermost open sub-section, appending it to its parent's
    /// body and making the parent current again.
    ///
    /// Fails with [`Error::NoOpenSubSection`] if nothing is open; the
    /// builder is left untouched in that case.
    pub fn close_sub_section(&mut self) -> Result<&mut Self> {
        let parent = self.parents.pop().ok_or(Error::NoOpenSubSection)?;
        let finished = std::mem::replace(&mut self.current, parent);
        self.current.add_section(finished);
        Ok(self)
    }

    /// Snapshot the accumulated content into an immutable [`Section`].
    ///
    /// Fails with [`Error::UnclosedSubSection`] while sub-sections remain
    /// open. The builder stays usable afterward; later mutations are
    /// invisible to the returned section.
    pub fn build(&self) -> Result<Section> {
        if !self.parents.is_empty() {
            return Err(Error::UnclosedSubSection(self.parents.len()));
        }
        Ok(Section {
            node: self.current.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn build_produces_bordered_title() {
        let section = Section::builder("Intro").build().unwrap();
        assert_eq!(section.write().unwrap(), "#####\nIntro\n#####\n");
    }

    #[test]
    fn additions_while_open_land_in_the_sub_section() {
        let mut builder = Section::builder("Outer");
        builder.add_paragraph("outer text");
        builder.open_sub_section("Inner");
        builder.add_paragraph("inner text");
        builder.close_sub_section().unwrap();
        let text = builder.build().unwrap().write().unwrap();

        let inner_title = text.find("Inner").unwrap();
        let inner_text = text.find("inner text").unwrap();
        assert!(text.find("outer text").unwrap() < inner_title);
        assert!(inner_title < inner_text);
    }

    #[test]
    fn sub_section_depth_is_parent_plus_one() {
        let mut builder = Section::builder("A");
        builder.open_sub_section("B");
        builder.open_sub_section("C");
        builder.close_sub_section().unwrap();
        builder.close_sub_section().unwrap();
        let text = builder.build().unwrap().write().unwrap();

        // A at depth 0 (#, overlined), B at 1 (*, overlined), C at 2 (=).
        assert!(text.contains("#\nA\n#"));
        assert!(text.contains("*\nB\n*"));
        assert!(text.contains("C\n="));
    }

    #[test]
    fn close_without_open_fails_and_leaves_builder_intact() {
        let mut builder = Section::builder("Title");
        builder.add_paragraph("content");
        let before = builder.build().unwrap().write().unwrap();

        assert!(matches!(
            builder.close_sub_section(),
            Err(Error::NoOpenSubSection)
        ));
        assert_eq!(builder.build().unwrap().write().unwrap(), before);
    }

    #[test]
    fn build_with_open_sub_section_fails() {
        let mut builder = Section::builder("Title");
        builder.open_sub_section("Open");
        assert!(matches!(
            builder.build(),
            Err(Error::UnclosedSubSection(1))
        ));

        builder.open_sub_section("Deeper");
        assert!(matches!(
            builder.build(),
            Err(Error::UnclosedSubSection(2))
        ));
    }

    #[test]
    fn builder_reusable_and_snapshots_isolated() {
        let mut builder = Section::builder("Title");
        builder.add_paragraph("one");
        let first = builder.build().unwrap();
        let before = first.write().unwrap();

        builder.add_paragraph("two");
        assert_eq!(first.write().unwrap(), before, "snapshot must not alias");

        let second = builder.build().unwrap();
        assert!(second.write().unwrap().contains("two"));
        assert_eq!(first.write().unwrap(), before);
    }

    #[test]
    fn identical_sequences_build_identical_output() {
        let make = || {
            let mut builder = Section::builder("Same");
            builder.add_paragraph("text");
            builder.open_sub_section("Sub");
            builder.add_paragraph("more");
            builder.close_sub_section().unwrap();
            builder.build().unwrap().write().unwrap()
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn pre_built_sections_keep_their_level() {
        let child = Section::builder("Child").build().unwrap();
        let mut builder = Section::builder("Parent");
        builder.add_sub_section(&child);
        let text = builder.build().unwrap().write().unwrap();

        // The child was built at depth 0, so it renders with the depth-0
        // glyph even though it now sits under a depth-0 parent.
        assert!(text.contains("#####\nChild\n#####"));
    }

    proptest! {
        #[test]
        fn prop_build_succeeds_iff_stack_balanced(
            opens in prop::collection::vec(prop::bool::ANY, 0..24)
        ) {
            let mut builder = Section::builder("Root");
            let mut depth = 0usize;
            for open in opens {
                if open {
                    builder.open_sub_section("Child");
                    depth += 1;
                } else if depth > 0 {
                    builder.close_sub_section().unwrap();
                    depth -= 1;
                } else {
                    prop_assert!(matches!(
                        builder.close_sub_section(),
                        Err(Error::NoOpenSubSection)
                    ));
                }
            }

            match builder.build() {
                Ok(_) => prop_assert_eq!(depth, 0),
                Err(Error::UnclosedSubSection(n)) => prop_assert_eq!(n, depth),
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
