//! HTML page construction
//!
//! Builds the CMS pages as plain strings: a shared layout with the flash
//! message and sign-in header, plus one body builder per page.

/// Values every page render needs: the consumed flash message and the
/// signed-in user, if any.
#[derive(Debug, Default)]
pub struct PageContext {
    pub message: Option<String>,
    pub user: Option<String>,
}

/// Escapes text for embedding in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps a page body in the shared layout: flash message first, then the
/// sign-in header, then the body.
pub fn layout(ctx: &PageContext, body: &str) -> String {
    let flash = match &ctx.message {
        Some(message) => format!("<p class=\"message\">{}</p>\n", escape_html(message)),
        None => String::new(),
    };

    let header = match &ctx.user {
        Some(user) => format!(
            "<p>Signed in as {}.</p>\n\
             <form method=\"post\" action=\"/users/signout\"><button>Sign Out</button></form>",
            escape_html(user)
        ),
        None => "<a href=\"/users/signin\">Sign In</a>".to_string(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Inkpad</title><meta charset=\"utf-8\"></head>\n\
         <body>\n{flash}{header}\n{body}\n</body>\n\
         </html>"
    )
}

/// The document listing: one row per document with view/edit links and a
/// delete button, plus the link to the create form.
pub fn index_page(ctx: &PageContext, filenames: &[String]) -> String {
    let mut rows = String::new();
    for name in filenames {
        let escaped = escape_html(name);
        rows.push_str(&format!(
            "<li><a href=\"/{escaped}\">{escaped}</a> \
             <a href=\"/{escaped}/edit\">edit</a> \
             <form method=\"post\" action=\"/{escaped}/delete\"><button>delete</button></form>\
             </li>\n"
        ));
    }

    let body = format!(
        "<ul>\n{rows}</ul>\n<p><a href=\"/new\">New Document</a></p>"
    );
    layout(ctx, &body)
}

/// The create-document form.
pub fn new_document_page(ctx: &PageContext) -> String {
    let body = "<h2>Add a new document:</h2>\n\
                <form method=\"post\" action=\"/new\">\n\
                <input type=\"text\" name=\"new_filename\">\n\
                <button type=\"submit\">Create</button>\n\
                </form>"
        .to_string();
    layout(ctx, &body)
}

/// The edit form, pre-filled with the document's raw content regardless
/// of extension.
pub fn edit_page(ctx: &PageContext, filename: &str, content: &str) -> String {
    let body = format!(
        "<h2>Edit contents of {}</h2>\n\
         <form method=\"post\" action=\"/{}/edit\">\n\
         <textarea name=\"file_content\" rows=\"20\" cols=\"80\">{}</textarea>\n\
         <button type=\"submit\">Save Changes</button>\n\
         </form>",
        escape_html(filename),
        escape_html(filename),
        escape_html(content)
    );
    layout(ctx, &body)
}

/// The sign-in form, pre-filled with the last failed username when one
/// was echoed into the session.
pub fn sign_in_page(ctx: &PageContext, echoed_username: &str) -> String {
    let body = format!(
        "<form method=\"post\" action=\"/users/signin\">\n\
         <label for=\"username\">Username:</label>\n\
         <input id=\"username\" type=\"text\" name=\"username\" value=\"{}\">\n\
         <label for=\"password\">Password:</label>\n\
         <input id=\"password\" type=\"password\" name=\"password\">\n\
         <button type=\"submit\">Sign In</button>\n\
         </form>",
        escape_html(echoed_username)
    );
    layout(ctx, &body)
}

/// Markdown documents render inside the layout so the flash message and
/// header appear with them.
pub fn document_page(ctx: &PageContext, rendered_html: &str) -> String {
    layout(ctx, rendered_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>\"x\" & 'y'</script>"),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_layout_shows_flash_once_rendered() {
        let ctx = PageContext {
            message: Some("Welcome!".to_string()),
            user: None,
        };
        let page = layout(&ctx, "body");
        assert!(page.contains("Welcome!"));
        assert!(page.contains("<a href=\"/users/signin\">Sign In</a>"));
    }

    #[test]
    fn test_layout_signed_in_header() {
        let ctx = PageContext {
            message: None,
            user: Some("admin".to_string()),
        };
        let page = layout(&ctx, "body");
        assert!(page.contains("Signed in as admin."));
        assert!(page.contains("<button>Sign Out</button>"));
        assert!(!page.contains("Sign In</a>"));
    }

    #[test]
    fn test_index_page_links() {
        let ctx = PageContext::default();
        let page = index_page(&ctx, &["about.md".to_string()]);
        assert!(page.contains("<a href=\"/about.md\">about.md</a>"));
        assert!(page.contains("<a href=\"/about.md/edit\">"));
        assert!(page.contains("<button>delete</button>"));
        assert!(page.contains("<a href=\"/new\">New Document</a>"));
    }

    #[test]
    fn test_edit_page_escapes_content() {
        let ctx = PageContext::default();
        let page = edit_page(&ctx, "notes.txt", "<b>bold</b>");
        assert!(page.contains("<h2>Edit contents of notes.txt</h2>"));
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_sign_in_page_echoes_username() {
        let ctx = PageContext::default();
        let page = sign_in_page(&ctx, "admip");
        assert!(page.contains(
            "<input id=\"username\" type=\"text\" name=\"username\" value=\"admip\">"
        ));
    }
}
