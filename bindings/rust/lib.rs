//! Rust bindings for the `tree-sitter-roxygen2` grammar.
//!
//! roxygen2 is the documentation-comment dialect of R packages. The build
//! script generates the parser from `src/grammar.json` and links it, so
//! consumers only need [`language`] (or [`LANGUAGE`]) to get a
//! `tree_sitter::Language` handle:
//!
//! ```
//! let mut parser = tree_sitter_roxygen2::parser().expect("roxygen2 grammar");
//! let tree = parser.parse("/** Compute a sum. */", None).unwrap();
//! assert_eq!(tree.root_node().kind(), "document");
//! ```

mod error;

use log::{debug, warn};
use tree_sitter::{Language, Parser};
use tree_sitter_language::LanguageFn;

pub use error::{Error, Result};

extern "C" {
    fn tree_sitter_roxygen2() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for this grammar.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_roxygen2) };

/// Name the grammar is registered under.
pub const LANGUAGE_NAME: &str = "roxygen2";

/// The grammar the parser was generated from.
pub const GRAMMAR_JSON: &str = include_str!("../../src/grammar.json");

/// The highlights query for roxygen2.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");

/// The injections query for roxygen2 (empty - no injections available).
pub const INJECTIONS_QUERY: &str = "";

/// The locals query for roxygen2 (empty - no locals available).
pub const LOCALS_QUERY: &str = "";

/// Returns the Tree-sitter [`Language`] for this grammar.
pub fn language() -> Language {
    Language::new(LANGUAGE)
}

/// Loads the linked roxygen2 grammar and checks that it is usable.
pub fn load() -> Result<Language> {
    // SAFETY: `tree_sitter_roxygen2` is the entry point of the parser linked
    // by the build script.
    unsafe { load_from(tree_sitter_roxygen2) }
}

/// Loads a grammar through a raw `tree_sitter_<name>` entry point and checks
/// that it is usable.
///
/// A null handle or one without node kinds is [`Error::GrammarLoad`]; a
/// handle whose ABI version the linked runtime does not accept is
/// [`Error::IncompatibleVersion`]. The loader may be called more than once.
///
/// # Safety
///
/// `loader` must either return null or a pointer to a valid, statically
/// allocated `TSLanguage`.
pub unsafe fn load_from(loader: unsafe extern "C" fn() -> *const ()) -> Result<Language> {
    if loader().is_null() {
        warn!("{LANGUAGE_NAME} grammar loader returned a null language");
        return Err(Error::GrammarLoad);
    }

    let language = Language::new(LanguageFn::from_raw(loader));
    if language.node_kind_count() == 0 {
        warn!("{LANGUAGE_NAME} grammar has no node kinds");
        return Err(Error::GrammarLoad);
    }

    let version = language.abi_version();
    let supported = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION..=tree_sitter::LANGUAGE_VERSION;
    if !supported.contains(&version) {
        warn!(
            "{LANGUAGE_NAME} grammar has ABI version {version}, runtime supports {}..={}",
            supported.start(),
            supported.end(),
        );
        return Err(Error::IncompatibleVersion { version });
    }

    debug!(
        "loaded {LANGUAGE_NAME} grammar: ABI {version}, {} node kinds",
        language.node_kind_count()
    );
    Ok(language)
}

/// Returns a [`Parser`] bound to the roxygen2 grammar.
pub fn parser() -> Result<Parser> {
    let language = load()?;
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    Ok(parser)
}
