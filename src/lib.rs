//! # rubric
//!
//! A fast, lightweight library for generating reStructuredText documents.
//!
//! ## Features
//!
//! - Build section trees through a linear call sequence; nesting depth
//!   picks the title border glyph automatically
//! - Defer link targets above the title and definitions below the content
//! - Reusable builders producing immutable, deep-copied snapshots
//! - Paragraphs with inline emphasis spans, transitions, and directives
//!
//! ## Quick Start
//!
//! ```
//! use rubric::{Document, Section};
//!
//! let mut section = Section::builder("Intro");
//! section.add_paragraph("Welcome.");
//! section.open_sub_section("Details");
//! section.add_paragraph("The fine print.");
//! section.close_sub_section().unwrap();
//! let section = section.build().unwrap();
//!
//! let mut doc = Document::builder("readme");
//! doc.add_section(&section);
//! let text = doc.build().write().unwrap();
//! assert!(text.starts_with("#####\nIntro\n#####\n"));
//! ```
//!
//! ## Builders and snapshots
//!
//! Builders are mutable accumulators; [`SectionBuilder::build`] and
//! [`DocumentBuilder::build`] snapshot the accumulated tree by deep copy,
//! so a builder can keep going (or be built repeatedly) without a
//! previously returned [`Section`] or [`Document`] ever observing the
//! change. Builders are single-writer; snapshots are freely shareable
//! across threads.

pub mod border;
pub mod element;
pub mod error;
pub mod export;
pub mod inline;

mod document;
mod node;
mod section;

pub use document::{Document, DocumentBuilder};
pub use element::{Definition, Directive, LinkTarget, Paragraph, Render, Transition};
pub use error::{Error, Result};
pub use export::{write_rst, write_rst_to};
pub use inline::Inline;
pub use section::{Section, SectionBuilder};
