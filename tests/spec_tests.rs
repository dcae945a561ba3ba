use serde::Deserialize;
use sitemark::markdown_to_html;
use std::fs;

#[derive(Debug, Deserialize)]
struct Case {
    markdown: String,
    html: String,
    example: u32,
    section: String,
}

#[test]
fn conversion_cases() {
    let data = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/cases.json"))
        .expect("Failed to read cases.json");
    let cases: Vec<Case> = serde_json::from_str(&data).expect("Failed to parse cases.json");

    let mut failures = Vec::new();
    for case in &cases {
        let result = markdown_to_html(&case.markdown);
        if result != case.html {
            eprintln!("\nCase {} failed ({})", case.example, case.section);
            eprintln!("  Input: {:?}", case.markdown);
            eprintln!("  Expected: {:?}", case.html);
            eprintln!("  Got: {:?}", result);
            failures.push(case.example);
        }
    }

    eprintln!(
        "\n{} of {} cases passed",
        cases.len() - failures.len(),
        cases.len()
    );
    assert!(failures.is_empty(), "failed cases: {:?}", failures);
}

#[test]
fn conversion_is_deterministic() {
    let md = "# A\n\n- x\n  - y\n\n> q\n>> r\n\n**b** _i_ `c`";
    assert_eq!(markdown_to_html(md), markdown_to_html(md));
}
