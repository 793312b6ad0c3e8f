pub mod store;
pub mod transform;
pub mod types;

pub use store::ArticleStore;
pub use transform::transform_article;
pub use types::{Article, Author, Category, SourceRef};
