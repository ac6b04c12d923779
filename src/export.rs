//! Writing rendered documents to files and writers.
//!
//! The builder and render paths perform no I/O; this layer is the only
//! place the crate touches a sink. Render failures and I/O failures stay
//! distinct [`Error`](crate::Error) variants.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::Result;

/// File extension appended to the document name on disk.
const EXTENSION: &str = "rst";

/// Render a document and write the text to any sink.
pub fn write_rst_to(document: &Document, writer: &mut impl Write) -> Result<()> {
    let text = document.write()?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Render a document to `<dir>/<name>.rst`, returning the path written.
///
/// # Examples
///
/// ```no_run
/// use rubric::{Document, write_rst};
///
/// let mut builder = Document::builder("guide");
/// builder.add_paragraph("Hello.");
/// let path = write_rst(&builder.build(), ".").unwrap();
/// assert!(path.ends_with("guide.rst"));
/// ```
pub fn write_rst(document: &Document, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir
        .as_ref()
        .join(format!("{}.{}", document.name(), EXTENSION));
    let mut file = File::create(&path)?;
    write_rst_to(document, &mut file)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rendered_text_to_sink() {
        let mut builder = Document::builder("doc");
        builder.add_paragraph("Hello.");
        let doc = builder.build();

        let mut sink = Vec::new();
        write_rst_to(&doc, &mut sink).unwrap();
        assert_eq!(sink, doc.write().unwrap().into_bytes());
    }
}
