use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reasons the roxygen2 grammar could not be turned into a usable language.
#[derive(Error, Debug)]
pub enum Error {
    /// The loader returned no language, or one without any node kinds.
    #[error("Error loading roxygen2 grammar")]
    GrammarLoad,
    #[error("Error loading roxygen2 grammar: ABI version {version} is not supported by this runtime")]
    IncompatibleVersion { version: usize },
    #[error("Error loading roxygen2 grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}
