/// Extensions the scanner is willing to repair.
///
/// The heuristic is filename-only; file contents are never inspected. An
/// unknown extension is treated as not-text and skipped: a skipped text file
/// stays broken until someone extends this list, while appending bytes to a
/// misjudged binary corrupts it.
const TEXT_EXTENSIONS: &[&str] = &[
    "asm", "bash", "bat", "c", "cc", "cfg", "cjs", "clj", "cmake", "cmd", "conf", "cpp", "cs",
    "css", "csv", "cxx", "dart", "diff", "dockerfile", "editorconfig", "el", "elm", "env", "erb",
    "erl", "ex", "exs", "fish", "fs", "gd", "gitattributes", "gitignore", "gitmodules", "go",
    "gradle", "graphql", "groovy", "h", "haml", "hbs", "hh", "hpp", "hs", "htm", "html", "hxx",
    "ini", "java", "jl", "js", "json", "json5", "jsonc", "jsx", "kt", "kts", "less", "lisp",
    "lock", "log", "lua", "m", "markdown", "md", "mjs", "mk", "ml", "mli", "nim", "nix", "patch",
    "php", "pl", "pm", "properties", "proto", "ps1", "py", "pyi", "r", "rake", "rb", "rs", "rst",
    "sass", "scala", "scss", "sh", "sql", "svelte", "svg", "swift", "tcl", "tex", "tf", "toml",
    "ts", "tsx", "txt", "vb", "vue", "xhtml", "xml", "yaml", "yml", "zig", "zsh",
];

/// Extensionless filenames that are conventionally text.
const TEXT_FILENAMES: &[&str] = &[
    "authors",
    "changelog",
    "codeowners",
    "contributing",
    "copying",
    "dockerfile",
    "gemfile",
    "justfile",
    "license",
    "makefile",
    "notice",
    "rakefile",
    "readme",
];

/// Filename-based text classification for the change-set scanner.
///
/// Accepts a repository-relative path; only the final component matters.
pub fn is_text_filename(path: &str) -> bool {
    let name = path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path)
        .to_ascii_lowercase();

    match name.rsplit_once('.') {
        // `.gitignore` and friends: an empty stem means the whole name is
        // the "extension".
        Some(("", rest)) => TEXT_EXTENSIONS.contains(&rest),
        Some((_, ext)) => TEXT_EXTENSIONS.contains(&ext),
        None => TEXT_FILENAMES.contains(&name.as_str()),
    }
}
