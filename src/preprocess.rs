//! Removal of non-content subtrees before annotation.
//!
//! Media, form controls, embedded frames, scripts, styles and comments carry
//! no readable prose but would still distort word and link accounting. They
//! are detached in place; text that follows a removed element stays where it
//! was, so adjacent prose is never lost.

use dom_query::NodeRef;
use tracing::debug;

use crate::etree;
use crate::Options;

/// Strip every forbidden element and every comment below `root`.
///
/// The root itself is never removed. Running the pass again on an already
/// clean tree removes nothing.
pub fn preprocess(root: &NodeRef, options: &Options) {
    let doomed = collect_forbidden(root, options);
    let removed = doomed.len();

    for node in doomed {
        etree::drop_tree(&node);
    }

    debug!(removed, "preprocessing stripped non-content nodes");
}

/// Topmost forbidden nodes below `root`, in document order.
///
/// Descendants of a forbidden node are not listed separately since they
/// leave the tree together with it.
fn collect_forbidden<'a>(root: &NodeRef<'a>, options: &Options) -> Vec<NodeRef<'a>> {
    let mut doomed = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = root.children().into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if node.is_comment() {
            doomed.push(node);
            continue;
        }
        if !node.is_element() {
            continue;
        }
        if etree::tag(&node).is_some_and(|tag| options.is_forbidden_tag(&tag)) {
            doomed.push(node);
            continue;
        }
        stack.extend(node.children().into_iter().rev());
    }

    doomed
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn body(doc: &Document) -> NodeRef<'_> {
        let sel = doc.select("body");
        let node = sel.nodes().first().copied();
        node.unwrap_or_else(|| panic!("document has no body"))
    }

    #[test]
    fn test_removes_forbidden_subtrees() {
        let doc = Document::from(
            r#"<html><body>
            <div><p>keep me</p><script>var x = 1;</script><img src="a.png"></div>
            <noscript><p>enable js</p></noscript>
            <style>p { color: red }</style>
            </body></html>"#,
        );
        preprocess(&body(&doc), &Options::default());

        for tag in ["script", "img", "noscript", "style"] {
            assert_eq!(doc.select(tag).length(), 0, "{tag} should be gone");
        }
        assert_eq!(doc.select("p").length(), 1);
        assert!(doc.select("body").text().contains("keep me"));
        assert!(!doc.select("body").text().contains("enable js"));
    }

    #[test]
    fn test_removes_comments() {
        let doc = Document::from("<html><body><p>a<!-- secret -->b</p></body></html>");
        preprocess(&body(&doc), &Options::default());

        assert!(!doc.select("body").html().contains("secret"));
        assert_eq!(doc.select("p").text().to_string(), "ab");
    }

    #[test]
    fn test_keeps_tail_text() {
        let doc = Document::from(
            "<html><body><p>before <span>decor</span> after span <button>ok</button> end</p></body></html>",
        );
        preprocess(&body(&doc), &Options::default());

        let text = doc.select("p").text().to_string();
        assert!(text.contains("before"));
        assert!(text.contains("after span"));
        assert!(text.contains("end"));
        assert!(!text.contains("decor"));
        assert!(!text.contains("ok"));
    }

    #[test]
    fn test_leading_tail_moves_into_parent() {
        let doc = Document::from("<html><body><p><span>ad</span>first words</p></body></html>");
        preprocess(&body(&doc), &Options::default());

        assert_eq!(doc.select("p").html().to_string(), "<p>first words</p>");
    }

    #[test]
    fn test_is_idempotent() {
        let doc = Document::from(
            "<html><body><div>text<iframe src=\"x\"></iframe> tail<select><option>1</option></select></div></body></html>",
        );
        let options = Options::default();

        preprocess(&body(&doc), &options);
        let once = doc.select("body").html().to_string();
        preprocess(&body(&doc), &options);
        let twice = doc.select("body").html().to_string();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_forbidden_set() {
        let doc = Document::from("<html><body><nav>menu</nav><span>kept</span></body></html>");
        let options = Options {
            forbidden_tags: vec!["nav".to_string()],
            ..Options::default()
        };
        preprocess(&body(&doc), &options);

        assert_eq!(doc.select("nav").length(), 0);
        assert_eq!(doc.select("span").length(), 1);
    }
}
