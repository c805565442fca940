use srcmerge::output::{format_merged, render};
use srcmerge::{FileEntry, classify, sort_entries};
#[test]
fn test_classify_known_suffixes() {
    assert_eq!(classify("a/b.py"), "python");
    assert_eq!(classify("Main.java"), "java");
    assert_eq!(classify("config.yml"), "yaml");
    assert_eq!(classify("config.yaml"), "yaml");
    assert_eq!(classify("src/lib.rs"), "rust");
    assert_eq!(classify("include/x.hpp"), "cpp");
    assert_eq!(classify("include/x.h"), "cpp");
    assert_eq!(classify("x.c"), "c");
    assert_eq!(classify("style.sass"), "scss");
    assert_eq!(classify("run.sh"), "bash");
    assert_eq!(classify("notes.txt"), "text");
}
#[test]
fn test_classify_fallback_and_case() {
    assert_eq!(classify("LICENSE"), "text");
    assert_eq!(classify("Main.JAVA"), "text");
    assert_eq!(classify(""), "text");
}
#[test]
fn test_classify_dockerfile_suffix() {
    assert_eq!(classify("Dockerfile"), "dockerfile");
    assert_eq!(classify("deploy/Dockerfile"), "dockerfile");
    assert_eq!(classify("app.dockerfile"), "dockerfile");
}
#[test]
fn test_classify_first_rule_wins() {
    // ".r" and ".rs" do not overlap, ".rs" must not fall to ".r".
    assert_eq!(classify("x.rs"), "rust");
    assert_eq!(classify("x.r"), "r");
    assert_eq!(classify("x.m"), "matlab");
    let first = srcmerge::classify::RULES
        .iter()
        .position(|(s, _)| *s == ".c")
        .unwrap();
    let later = srcmerge::classify::RULES
        .iter()
        .position(|(s, _)| *s == ".cc")
        .unwrap();
    assert!(first < later);
}
#[test]
fn test_classify_is_pure() {
    for path in ["a.py", "b.unknown", "Dockerfile"] {
        assert_eq!(classify(path), classify(path));
    }
}
#[test]
fn test_render_single_file() {
    let entries = vec![FileEntry::new("a/b.py", "print(1)")];
    let out = format_merged(&entries);
    assert_eq!(out, b"a/b.py:\n```python\nprint(1)\n```\n");
}
#[test]
fn test_render_two_files_blank_line_between() {
    let entries = vec![FileEntry::new("a.txt", "x"), FileEntry::new("b.txt", "y")];
    let out = String::from_utf8(format_merged(&entries)).unwrap();
    assert_eq!(out, "a.txt:\n```text\nx\n```\n\nb.txt:\n```text\ny\n```\n");
}
#[test]
fn test_render_keeps_existing_trailing_newline() {
    let entries = vec![FileEntry::new("a.rs", "fn main() {}\n")];
    let out = String::from_utf8(format_merged(&entries)).unwrap();
    assert_eq!(out, "a.rs:\n```rust\nfn main() {}\n```\n");
}
#[test]
fn test_render_empty_content_gets_line_break() {
    let entries = vec![FileEntry::new("empty.md", "")];
    let out = String::from_utf8(format_merged(&entries)).unwrap();
    assert_eq!(out, "empty.md:\n```markdown\n\n```\n");
}
#[test]
fn test_render_no_entries_is_empty() {
    assert!(format_merged(&[]).is_empty());
}
#[test]
fn test_render_widens_fence_around_backticks() {
    let entries = vec![FileEntry::new("README.md", "```rust\nlet x = 1;\n```\n")];
    let out = String::from_utf8(format_merged(&entries)).unwrap();
    assert_eq!(
        out,
        "README.md:\n````markdown\n```rust\nlet x = 1;\n```\n````\n"
    );
}
#[test]
fn test_render_short_backtick_runs_keep_default_fence() {
    let entries = vec![FileEntry::new("a.md", "use `x` and ``y``")];
    let out = String::from_utf8(format_merged(&entries)).unwrap();
    assert!(out.starts_with("a.md:\n```markdown\n"));
    assert!(out.ends_with("``y``\n```\n"));
}
#[test]
fn test_render_preserves_raw_bytes() {
    let bytes = vec![0xff, 0xfe, b'a'];
    let entries = vec![FileEntry::new("data.csv", bytes.clone())];
    let out = format_merged(&entries);
    let mut expected = b"data.csv:\n```csv\n".to_vec();
    expected.extend_from_slice(&bytes);
    expected.extend_from_slice(b"\n```\n");
    assert_eq!(out, expected);
}
#[test]
fn test_render_reports_byte_count() {
    let entries = vec![FileEntry::new("a.txt", "x"), FileEntry::new("b.txt", "y\n")];
    let mut buf = Vec::new();
    let written = render(&entries, &mut buf).unwrap();
    assert_eq!(written, buf.len() as u64);
}
#[test]
fn test_sort_is_bytewise() {
    let entries = vec![
        FileEntry::new("b.txt", "b"),
        FileEntry::new("a/z.txt", "z"),
        FileEntry::new("B.txt", "B"),
        FileEntry::new("a.txt", "a"),
    ];
    let sorted: Vec<_> = sort_entries(entries)
        .into_iter()
        .map(|e| e.relative_path)
        .collect();
    assert_eq!(sorted, vec!["B.txt", "a.txt", "a/z.txt", "b.txt"]);
}
