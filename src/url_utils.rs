//! URL Utility Functions
//!
//! Validation of the document base URL and resolution of relative link
//! targets inside an extracted subtree.

use dom_query::Selection;
use url::Url;

use crate::{Error, Result};

/// Attributes rewritten by [`make_links_absolute`].
const LINK_ATTRS: &[&str] = &["href", "src"];

/// Parse the configured base URL.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] unless `s` is an absolute URL with a host.
pub fn parse_base_url(s: &str) -> Result<Url> {
    let s = s.trim();
    match Url::parse(s) {
        Ok(url) if url.has_host() => Ok(url),
        Ok(_) => Err(Error::InvalidUrl(format!("{s}: missing host"))),
        Err(err) => Err(Error::InvalidUrl(format!("{s}: {err}"))),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// Fragment-only references and special schemes are returned unchanged, as
/// is anything that fails to resolve.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || url_str.starts_with('#') {
        return url_str.to_string();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Resolve every `href`/`src` in `root` (inclusive) against `base`.
///
/// Returns the number of attributes rewritten.
pub fn make_links_absolute(root: &Selection, base: &Url) -> usize {
    let mut rewritten = 0;
    let targets = root.select("[href], [src]");

    for node in root.nodes().iter().chain(targets.nodes()) {
        let el = Selection::from(*node);
        for attr in LINK_ATTRS {
            let Some(value) = el.attr(attr) else {
                continue;
            };
            let absolute = create_absolute_url(&value, base);
            if absolute != *value {
                el.set_attr(attr, &absolute);
                rewritten += 1;
            }
        }
    }

    rewritten
}
