//! Maps a file path to the label used to tag its fenced block.

/// Label returned when no rule matches.
pub const FALLBACK_LABEL: &str = "text";

/// Ordered `(suffix, label)` rules. The first suffix that ends the path wins,
/// so overlapping entries resolve by position, never by map iteration order.
pub const RULES: &[(&str, &str)] = &[
    (".java", "java"),
    (".properties", "properties"),
    (".xml", "xml"),
    (".json", "json"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".py", "python"),
    (".js", "javascript"),
    (".ts", "typescript"),
    (".c", "c"),
    (".cpp", "cpp"),
    (".cc", "cpp"),
    (".h", "cpp"),
    (".hpp", "cpp"),
    (".rs", "rust"),
    (".go", "go"),
    (".zig", "zig"),
    (".sql", "sql"),
    (".sh", "bash"),
    (".md", "markdown"),
    (".html", "html"),
    (".css", "css"),
    (".scss", "scss"),
    (".sass", "scss"),
    (".gradle", "gradle"),
    (".kt", "kotlin"),
    (".swift", "swift"),
    (".rb", "ruby"),
    (".php", "php"),
    (".r", "r"),
    (".m", "matlab"),
    (".lua", "lua"),
    (".vim", "vim"),
    (".dockerfile", "dockerfile"),
    ("Dockerfile", "dockerfile"),
    (".toml", "toml"),
    (".ini", "ini"),
    (".csv", "csv"),
    (".txt", "text"),
];

/// Returns the label for `path`, or [`FALLBACK_LABEL`] when nothing matches.
///
/// Matching is a case-sensitive suffix test against the whole path, so a
/// bare `Dockerfile` matches through the same rule as `build/Dockerfile`.
pub fn classify(path: &str) -> &'static str {
    RULES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map_or(FALLBACK_LABEL, |(_, label)| label)
}
