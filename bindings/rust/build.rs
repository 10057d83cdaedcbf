use std::{env, fs, path::PathBuf};

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let grammar_path = manifest_dir.join("src").join("grammar.json");
    println!("cargo:rerun-if-changed={}", grammar_path.display());

    let grammar_json = fs::read_to_string(&grammar_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", grammar_path.display()));

    // parser.c is never checked in; it is always generated from grammar.json.
    // ABI 15 parsers embed a semantic version, taken from the package version.
    let version = (
        version_part("CARGO_PKG_VERSION_MAJOR"),
        version_part("CARGO_PKG_VERSION_MINOR"),
        version_part("CARGO_PKG_VERSION_PATCH"),
    );
    let (name, parser_c) =
        tree_sitter_generate::generate_parser_for_grammar(&grammar_json, Some(version))
            .unwrap_or_else(|e| {
                panic!("failed to generate parser from {}: {e}", grammar_path.display())
            });
    assert_eq!(name, "roxygen2", "unexpected grammar name in {}", grammar_path.display());

    let header_dir = out_dir.join("tree_sitter");
    fs::create_dir_all(&header_dir)
        .unwrap_or_else(|e| panic!("failed to create {}: {e}", header_dir.display()));
    fs::write(header_dir.join("parser.h"), tree_sitter::PARSER_HEADER)
        .unwrap_or_else(|e| panic!("failed to write parser.h: {e}"));

    let parser_path = out_dir.join("parser.c");
    fs::write(&parser_path, parser_c)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", parser_path.display()));

    cc::Build::new()
        .std("c11")
        .include(&out_dir)
        .warnings(false)
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs")
        .file(&parser_path)
        .compile("tree-sitter-roxygen2");
}

fn version_part(var: &str) -> u8 {
    let value = env::var(var).unwrap_or_else(|e| panic!("{var} not set: {e}"));
    value
        .parse()
        .unwrap_or_else(|e| panic!("{var}={value} does not fit a grammar version: {e}"))
}
