//! Markdown-to-HTML post-processing of generated text.

const BOLD_MARKER: &str = "**";

/// Render model output for the browser.
///
/// `**` markers are paired left to right into `<b>`/`</b>`; a final marker
/// without a partner is kept as-is. Every `\n` becomes `<br>`. Nothing else
/// is touched, so plain single-line text passes through unchanged.
pub fn render_html(text: &str) -> String {
    let segments: Vec<&str> = text.split(BOLD_MARKER).collect();
    let markers = segments.len() - 1;
    let paired = markers - markers % 2;

    let mut html = String::with_capacity(text.len() + markers * 2);
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            let marker = i - 1;
            html.push_str(match marker {
                m if m >= paired => BOLD_MARKER,
                m if m % 2 == 0 => "<b>",
                _ => "</b>",
            });
        }
        html.push_str(segment);
    }

    html.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render_html("Nothing to see here."), "Nothing to see here.");
        assert_eq!(render_html(""), "");
    }

    #[test]
    fn test_single_bold_span() {
        assert_eq!(render_html("a **bold** word"), "a <b>bold</b> word");
    }

    #[test]
    fn test_multiple_bold_spans() {
        assert_eq!(
            render_html("**Pros:** good\n**Cons:** bad"),
            "<b>Pros:</b> good<br><b>Cons:</b> bad"
        );
    }

    #[test]
    fn test_unpaired_marker_left_literal() {
        assert_eq!(render_html("**a** and **b"), "<b>a</b> and **b");
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render_html("one\ntwo\n\nthree"), "one<br>two<br><br>three");
    }
}
