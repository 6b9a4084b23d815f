use crate::{Error, Result};
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use std::cell::Cell;

/// Selector for the script element whose source gets inlined.
pub const EXTERNAL_SCRIPT_SELECTOR: &str = "script[src]";

/// Replace the shell's external script reference with the script text.
///
/// The `src` attribute is removed and the element body becomes `script`
/// byte-for-byte. The rest of the shell passes through untouched, so equal
/// inputs always give equal output.
pub fn inline_script(shell: &str, script: &str) -> Result<String> {
    let matched = Cell::new(0usize);

    let merged = rewrite_str(
        shell,
        RewriteStrSettings {
            element_content_handlers: vec![element!(EXTERNAL_SCRIPT_SELECTOR, |el| {
                matched.set(matched.get() + 1);
                el.remove_attribute("src");
                el.set_inner_content(script, ContentType::Html);
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;

    match matched.get() {
        1 => Ok(merged),
        0 => Err(Error::NoExternalScript),
        n => Err(Error::MultipleExternalScripts(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_replaces_reference() {
        let merged = inline_script(
            r#"<html><head><script type="text/javascript" src="app.js"></script></head><body></body></html>"#,
            "console.log(1)",
        )
        .unwrap();

        assert_eq!(
            merged,
            r#"<html><head><script type="text/javascript">console.log(1)</script></head><body></body></html>"#
        );
    }

    #[test]
    fn test_inline_keeps_markup_sensitive_text_verbatim() {
        let script = "if (a < b && c > d) { s = \"&amp;\" }\n";
        let merged = inline_script(r#"<script src="/app.js"></script>"#, script).unwrap();

        assert_eq!(merged, format!("<script>{script}</script>"));
    }

    #[test]
    fn test_inline_ignores_inline_scripts() {
        let shell = r#"<script>window.x = 1</script><script src="app.js"></script>"#;
        let merged = inline_script(shell, "run()").unwrap();

        assert_eq!(merged, "<script>window.x = 1</script><script>run()</script>");
    }

    #[test]
    fn test_inline_requires_exactly_one_external_script() {
        let err = inline_script("<html><body></body></html>", "run()").unwrap_err();
        assert!(matches!(err, Error::NoExternalScript));

        let err = inline_script(
            r#"<script src="a.js"></script><script src="b.js"></script>"#,
            "run()",
        )
        .unwrap_err();
        assert!(matches!(err, Error::MultipleExternalScripts(2)));
    }
}
