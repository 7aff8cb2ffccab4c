//! postmatter: read a directory of Markdown posts as structured records
//!
//! Each post file is an optional YAML front-matter block delimited by `---`
//! lines, followed by body content. The crate splits the block from the
//! body, decodes it into a key-ordered metadata mapping, and exposes
//! directory-level listing and lookup for site-generation pipelines.
//!
//! ```no_run
//! use postmatter::PostRepository;
//!
//! # fn main() -> Result<(), postmatter::Error> {
//! let repo = PostRepository::new(".");
//! for post in repo.list_all()? {
//!     println!("{}: {:?}", post.slug, post.metadata.get("title"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;

pub use content::{Metadata, Post, PostParams, PostRepository, Value};
pub use error::Error;
