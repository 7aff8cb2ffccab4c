//! Content module - front-matter parsing and post reading

pub mod frontmatter;
mod post;
mod repository;
mod value;

pub use post::{Post, PostParams};
pub use repository::{PostRepository, DEFAULT_POSTS_DIR};
pub use value::{Metadata, Value};
