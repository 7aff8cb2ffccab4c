//! Post repository - reads posts from a source directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::frontmatter;
use super::post::{strip_md_ext, Post, PostParams};
use crate::error::Error;

/// Default posts subdirectory under the base directory
pub const DEFAULT_POSTS_DIR: &str = "posts";

/// Reads posts from a directory of Markdown files
///
/// The base directory is explicit rather than taken from the process
/// working directory, so embedders and tests can point the repository
/// anywhere. Posts live in `base_dir/posts` unless overridden with
/// [`PostRepository::with_directory`].
///
/// Every call re-reads the filesystem; there is no caching.
#[derive(Debug, Clone)]
pub struct PostRepository {
    posts_dir: PathBuf,
}

impl PostRepository {
    /// Create a repository over `base_dir/posts`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self::with_directory(base_dir, DEFAULT_POSTS_DIR)
    }

    /// Create a repository over `base_dir/dir`
    pub fn with_directory<P: AsRef<Path>, D: AsRef<Path>>(base_dir: P, dir: D) -> Self {
        Self {
            posts_dir: base_dir.as_ref().join(dir),
        }
    }

    /// The resolved posts directory
    pub fn directory(&self) -> &Path {
        &self.posts_dir
    }

    /// List the filenames in the posts directory
    ///
    /// Immediate entries only, in filesystem order, with no extension
    /// filter or sorting applied.
    pub fn list_slugs(&self) -> Result<Vec<String>, Error> {
        let entries = fs::read_dir(&self.posts_dir)?;
        let mut slugs = Vec::new();
        for entry in entries {
            let name = entry?.file_name();
            let slug = match name.into_string() {
                Ok(name) => name,
                Err(name) => {
                    // Lossy slugs will not resolve back to their file
                    tracing::warn!("non-UTF-8 filename in {:?}: {:?}", self.posts_dir, name);
                    name.to_string_lossy().into_owned()
                }
            };
            slugs.push(slug);
        }
        Ok(slugs)
    }

    /// List route parameters for every post, with `.md` extensions stripped
    pub fn list_params(&self) -> Result<Vec<PostParams>, Error> {
        let params = self
            .list_slugs()?
            .iter()
            .map(|slug| PostParams {
                slug: strip_md_ext(slug).to_string(),
            })
            .collect();
        Ok(params)
    }

    /// Read a single post by slug
    ///
    /// Accepts the slug with or without a `.md` extension; both resolve to
    /// the same file and record. Returns [`Error::NotFound`] when the file
    /// does not exist and [`Error::Decode`] when its front-matter block is
    /// delimited but syntactically invalid.
    pub fn get_by_slug(&self, slug: &str) -> Result<Post, Error> {
        let slug = strip_md_ext(slug);
        let path = self.posts_dir.join(format!("{slug}.md"));
        tracing::debug!("reading post {:?}", path);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    slug: slug.to_string(),
                    path,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let (metadata, content) = frontmatter::parse(&raw)?;
        Ok(Post {
            slug: slug.to_string(),
            metadata,
            content: content.to_string(),
        })
    }

    /// Read every post in the directory, in listing order
    ///
    /// Fails on the first unreadable or undecodable file rather than
    /// returning a partial set.
    pub fn list_all(&self) -> Result<Vec<Post>, Error> {
        self.list_slugs()?
            .iter()
            .map(|slug| self.get_by_slug(slug))
            .collect()
    }
}
