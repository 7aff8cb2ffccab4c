//! Post models

use serde::Serialize;

use super::value::Metadata;

/// A post read from the source directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Filename with the `.md` extension removed
    pub slug: String,

    /// Decoded front-matter, empty when the file has none
    pub metadata: Metadata,

    /// Body text with the front-matter block stripped
    pub content: String,
}

/// Route parameters for a post, as consumed by site-generation pipelines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostParams {
    pub slug: String,
}

/// Strip a trailing `.md` extension, if any
///
/// Idempotent: an already-stripped slug passes through unchanged.
pub(crate) fn strip_md_ext(slug: &str) -> &str {
    slug.strip_suffix(".md").unwrap_or(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_md_ext() {
        assert_eq!(strip_md_ext("hello-world.md"), "hello-world");
        assert_eq!(strip_md_ext("hello-world"), "hello-world");
        assert_eq!(strip_md_ext("notes.markdown"), "notes.markdown");
    }

    #[test]
    fn test_strip_md_ext_idempotent() {
        let once = strip_md_ext("second-post.md");
        assert_eq!(strip_md_ext(once), once);
    }

    #[test]
    fn test_strip_md_ext_only_trailing() {
        assert_eq!(strip_md_ext("archive.md.bak"), "archive.md.bak");
        assert_eq!(strip_md_ext(".md"), "");
    }
}
