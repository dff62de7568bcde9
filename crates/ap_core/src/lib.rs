pub mod article;
pub mod backend;
pub mod detex;
pub mod error;
pub mod language;

pub use article::Article;
pub use backend::TranslationBackend;
pub use detex::detex;
pub use error::Error;
pub use language::Language;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::{Article, Error, Language, Result, TranslationBackend};
}
