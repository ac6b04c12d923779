//! Explicit-markup directive blocks.

use super::Render;

/// A reStructuredText directive.
///
/// Directives are explicit-markup blocks with a name, an optional
/// argument on the marker line, `:key: value` option lines, and an
/// indented content body:
///
/// ```text
/// .. image:: logo.png
///    :width: 200px
///
///    The caption.
/// ```
///
/// # Examples
///
/// ```
/// use rubric::Directive;
///
/// let note = Directive::new("note").with_content("Check the logs first.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    name: String,
    argument: Option<String>,
    options: Vec<(String, String)>,
    content: Vec<String>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
            options: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Set the argument following the directive name on the marker line.
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Append a `:key: value` option line.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }

    /// Append a line of indented content.
    pub fn with_content(mut self, line: impl Into<String>) -> Self {
        self.content.push(line.into());
        self
    }
}

impl Render for Directive {
    fn render(&self) -> String {
        let mut out = match &self.argument {
            Some(argument) => format!(".. {}:: {}", self.name, argument),
            None => format!(".. {}::", self.name),
        };
        for (key, value) in &self.options {
            out.push_str(&format!("\n   :{}: {}", key, value));
        }
        if !self.content.is_empty() {
            out.push('\n');
            for line in &self.content {
                out.push_str(&format!("\n   {}", line));
            }
        }
        out
    }

    fn clone_box(&self) -> Box<dyn Render> {
        Box::new(self.clone())
    }
}
