/// Page generation: template substitution and file tree mirroring
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::{extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitute every title and content placeholder in `template`
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Convert one markdown file into an HTML page at `dest_path`.
///
/// Parent directories of `dest_path` are created as needed.
pub fn generate_page(from_path: &Path, template_path: &Path, dest_path: &Path) -> Result<(), Error> {
    info!(
        from = %from_path.display(),
        dest = %dest_path.display(),
        template = %template_path.display(),
        "generating page"
    );

    let markdown = read(from_path)?;
    let template = read(template_path)?;

    let title = extract_title(&markdown)?;
    let content = markdown_to_html(&markdown);
    let page = render_template(&template, &title, &content);

    if let Some(parent) = dest_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(dest_path, page).map_err(|source| Error::Write {
        path: dest_path.to_path_buf(),
        source,
    })
}

/// Mirror `content_dir` into `dest_dir`, generating a `.html` page per file.
///
/// Entries are visited in name order. The first failure stops the walk.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<(), Error> {
    let read_dir_error = |source| Error::ReadDir {
        path: content_dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(content_dir)
        .map_err(read_dir_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let from_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if from_path.is_dir() {
            generate_pages_recursive(&from_path, template_path, &dest_path)?;
        } else if from_path.is_file() {
            generate_page(&from_path, template_path, &dest_path.with_extension("html"))?;
        }
    }

    Ok(())
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
