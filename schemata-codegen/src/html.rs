//! HTML documentation for a schema.

use schemata_core::escape_html;
use schemata_schema::{Schema, Section};

use crate::markup::Markup;

/// What to include in the rendered documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the output in a complete document titled with the schema name
    pub headers: bool,
    /// Emit a heading and description for every section
    pub use_sections: bool,
    /// Include extended sections, not only core ones
    pub include_ext: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            headers: true,
            use_sections: true,
            include_ext: true,
        }
    }
}

/// Render a schema as HTML.
///
/// Every piece of schema text is escaped before it is written out.
pub fn html(schema: &Schema, options: HtmlOptions) -> String {
    let sections: Vec<&Section> = if options.include_ext {
        schema.sections().iter().collect()
    } else {
        schema.core_sections().collect()
    };

    let body = |m: Markup| m.each(&sections, |m, section| render_section(m, section, options));

    if options.headers {
        let title = escape_html(schema.name());
        Markup::new()
            .line("<!DOCTYPE html>")
            .element("html", |m| {
                m.element("head", |m| {
                    m.line("<meta charset=\"utf-8\">")
                        .line(&format!("<title>{}</title>", title))
                })
                .element("body", |m| body(m.line(&format!("<h2>{}</h2>", title))))
            })
            .finish()
    } else {
        body(Markup::new()).finish()
    }
}

fn render_section(m: Markup, section: &Section, options: HtmlOptions) -> Markup {
    m.when(options.use_sections, |m| {
        m.line(&format!("<h3>{}</h3>", escape_html(&section.name)))
            .each(section.doc.as_deref(), |m, doc| {
                m.line(&format!("<p>{}</p>", escape_html(doc)))
            })
    })
    .element("table", |m| {
        m.line("<tr><th>Name</th><th>Description</th></tr>")
            .each(&section.fields, |m, field| {
                m.line(&format!(
                    "<tr><td>{}</td><td>{}</td></tr>",
                    escape_html(field.name().unwrap_or_default()),
                    escape_html(field.doc().unwrap_or_default())
                ))
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "sections": [
            {"section": "core", "doc": "Always present", "fields": [
                {"name": "id", "type": "long", "doc": "identifier"}
            ]},
            {"section": "extras", "ext": true, "fields": [
                {"name": "score", "type": "float", "doc": "ranking score"}
            ]}
        ]
    }"#;

    fn schema(doc: &str) -> Schema {
        Schema::from_json("objects", "7.4", doc).unwrap()
    }

    fn rows(html: &str) -> usize {
        html.matches("<td>").count() / 2
    }

    #[test]
    fn test_fragment() {
        let options = HtmlOptions {
            headers: false,
            ..Default::default()
        };
        insta::assert_snapshot!(html(&schema(DOC), options), @r"
        <h3>core</h3>
        <p>Always present</p>
        <table>
          <tr><th>Name</th><th>Description</th></tr>
          <tr><td>id</td><td>identifier</td></tr>
        </table>
        <h3>extras</h3>
        <table>
          <tr><th>Name</th><th>Description</th></tr>
          <tr><td>score</td><td>ranking score</td></tr>
        </table>
        ");
    }

    #[test]
    fn test_document_shell() {
        let out = html(&schema(DOC), HtmlOptions::default());
        assert!(out.starts_with("<!DOCTYPE html>\n<html>\n  <head>\n"));
        assert!(out.contains("    <title>objects</title>\n"));
        assert!(out.ends_with("  </body>\n</html>\n"));
        assert_eq!(rows(&out), 2);
    }

    #[test]
    fn test_core_only() {
        let options = HtmlOptions {
            include_ext: false,
            ..Default::default()
        };
        let out = html(&schema(DOC), options);
        assert_eq!(rows(&out), 1);
        assert!(!out.contains("score"));
    }

    #[test]
    fn test_only_ext_section_with_core_only_has_no_rows() {
        let s = schema(
            r#"{"sections": [{"section": "lc", "ext": true, "fields": [
                {"name": "a", "type": "float"},
                {"name": "b", "type": "float"}
            ]}]}"#,
        );
        let options = HtmlOptions {
            include_ext: false,
            ..Default::default()
        };
        assert_eq!(rows(&html(&s, options)), 0);
    }

    #[test]
    fn test_without_sections() {
        let options = HtmlOptions {
            headers: false,
            use_sections: false,
            include_ext: true,
        };
        let out = html(&schema(DOC), options);
        assert!(!out.contains("<h3>"));
        assert!(!out.contains("<p>"));
        assert_eq!(out.matches("<table>").count(), 2);
    }

    #[test]
    fn test_escapes_schema_text() {
        let s = Schema::from_json(
            "<b>objects</b>",
            "7.4",
            r#"{"sections": [{"section": "s & t", "doc": "<i>x</i>", "fields": [
                {"name": "<script>", "type": "int", "doc": "a < b"}
            ]}]}"#,
        )
        .unwrap();
        let out = html(&s, HtmlOptions::default());
        assert!(out.contains("<title>&lt;b&gt;objects&lt;/b&gt;</title>"));
        assert!(out.contains("<h3>s &amp; t</h3>"));
        assert!(out.contains("<p>&lt;i&gt;x&lt;/i&gt;</p>"));
        assert!(out.contains("<td>&lt;script&gt;</td><td>a &lt; b</td>"));
        assert!(!out.contains("<script>"));
    }
}
