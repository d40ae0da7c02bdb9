//! Fluent builder for indented markup.

/// Builds line-oriented markup, nesting child content of an element one
/// indent step deeper.
///
/// ```
/// use schemata_codegen::markup::Markup;
///
/// let html = Markup::new()
///     .element("table", |m| m.line("<tr><td>id</td></tr>"))
///     .finish();
///
/// assert_eq!(html, "<table>\n  <tr><td>id</td></tr>\n</table>\n");
/// ```
#[derive(Debug, Clone)]
pub struct Markup {
    depth: usize,
    width: usize,
    out: String,
}

impl Markup {
    /// A builder indenting two spaces per level.
    pub fn new() -> Self {
        Self::with_width(2)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            depth: 0,
            width,
            out: String::new(),
        }
    }

    /// Write one line at the current depth.
    pub fn line(mut self, text: &str) -> Self {
        let pad = self.depth * self.width;
        self.out.extend(std::iter::repeat_n(' ', pad));
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Wrap the content written by `f` in `<tag>` and `</tag>` lines.
    pub fn element<F>(self, tag: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let mut open = self.line(&format!("<{}>", tag));
        open.depth += 1;
        let mut inner = f(open);
        inner.depth = inner.depth.saturating_sub(1);
        inner.line(&format!("</{}>", tag))
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::new()
    }
}
