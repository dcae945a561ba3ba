use std::fs;

use sitemark::Error;
use sitemark::page::{generate_page, generate_pages_recursive};
use tempfile::TempDir;

const TEMPLATE: &str = "<html><title>{{ Title }}</title><body>{{ Content }}</body></html>";

fn write(dir: &TempDir, relative: &str, contents: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn generates_single_page_into_new_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "index.md", "# Home\n\nWelcome **friend**.");
    write(&dir, "template.html", TEMPLATE);
    let dest = dir.path().join("public/nested/index.html");

    generate_page(
        &dir.path().join("index.md"),
        &dir.path().join("template.html"),
        &dest,
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(dest).unwrap(),
        "<html><title>Home</title><body><div><h1>Home</h1><p>Welcome <b>friend</b>.</p></div></body></html>"
    );
}

#[test]
fn missing_title_fails_page() {
    let dir = TempDir::new().unwrap();
    write(&dir, "untitled.md", "no heading here");
    write(&dir, "template.html", TEMPLATE);

    let result = generate_page(
        &dir.path().join("untitled.md"),
        &dir.path().join("template.html"),
        &dir.path().join("out.html"),
    );

    assert!(matches!(result, Err(Error::MissingTitle)));
    assert!(!dir.path().join("out.html").exists());
}

#[test]
fn missing_source_reports_path() {
    let dir = TempDir::new().unwrap();
    write(&dir, "template.html", TEMPLATE);
    let source = dir.path().join("absent.md");

    let result = generate_page(
        &source,
        &dir.path().join("template.html"),
        &dir.path().join("out.html"),
    );

    match result {
        Err(Error::Read { path, .. }) => assert_eq!(path, source),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn mirrors_content_tree_with_html_extensions() {
    let dir = TempDir::new().unwrap();
    write(&dir, "content/index.md", "# Index");
    write(&dir, "content/blog/post.md", "# Post\n\n- a\n- b");
    write(&dir, "template.html", TEMPLATE);

    generate_pages_recursive(
        &dir.path().join("content"),
        &dir.path().join("template.html"),
        &dir.path().join("public"),
    )
    .unwrap();

    let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
    assert!(index.contains("<title>Index</title>"));

    let post = fs::read_to_string(dir.path().join("public/blog/post.html")).unwrap();
    assert!(post.contains("<ul><li>a</li><li>b</li></ul>"));
}

#[test]
fn first_failure_aborts_walk() {
    let dir = TempDir::new().unwrap();
    write(&dir, "content/a.md", "no title");
    write(&dir, "content/b.md", "# B");
    write(&dir, "template.html", TEMPLATE);

    let result = generate_pages_recursive(
        &dir.path().join("content"),
        &dir.path().join("template.html"),
        &dir.path().join("public"),
    );

    assert!(matches!(result, Err(Error::MissingTitle)));
    assert!(!dir.path().join("public/b.html").exists());
}
