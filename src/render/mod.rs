//! Content rendering
//!
//! Decides output content-type per document extension and transforms
//! content for display: passthrough for plain text, markdown to HTML
//! for `.md` documents.

pub mod markdown;

pub use markdown::markdown_to_html;

/// Rendering behavior keyed by a document's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Markdown,
}

/// A document transformed for display
#[derive(Debug)]
pub struct RenderedDocument {
    pub content_type: &'static str,
    pub body: String,
    pub kind: DocumentKind,
}

/// The substring after the last `.` in a filename, if any.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Classifies a document by its extension. Anything that is not markdown
/// is treated as plain text, so unknown extensions fall back to a raw
/// passthrough instead of an unhandled case.
pub fn kind_of(filename: &str) -> DocumentKind {
    match extension(filename) {
        Some("md") => DocumentKind::Markdown,
        _ => DocumentKind::PlainText,
    }
}

/// Renders a document for the view route. `.txt` (and any unrecognized
/// extension) is served verbatim as `text/plain`; `.md` is rendered to
/// HTML. The edit route bypasses this and exposes raw text for every
/// extension.
pub fn render(filename: &str, raw: &[u8]) -> RenderedDocument {
    let text = String::from_utf8_lossy(raw);

    match kind_of(filename) {
        DocumentKind::Markdown => RenderedDocument {
            content_type: "text/html",
            body: markdown_to_html(&text),
            kind: DocumentKind::Markdown,
        },
        DocumentKind::PlainText => RenderedDocument {
            content_type: "text/plain",
            body: text.into_owned(),
            kind: DocumentKind::PlainText,
        },
    }
}
