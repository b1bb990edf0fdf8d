use chrono::Datelike;

use crate::classifier::Category;

/// Destination for a file, relative to the target directory:
/// `<year>/<month>/<category>/<name>`.
///
/// `name` is used verbatim as the last component.
pub fn plan_file(name: &str, added: &impl Datelike, category: Category) -> String {
    format!(
        "{}/{:02}/{}/{}",
        added.year(),
        added.month(),
        category.as_str(),
        name
    )
}

/// Destination for a subdirectory, relative to the target directory:
/// `<year>/<month>/<name>`. Directories get no category bucket.
pub fn plan_directory(name: &str, added: &impl Datelike) -> String {
    format!("{}/{:02}/{}", added.year(), added.month(), name)
}

/// A year bucket left behind by an earlier run (`"2019"`, `"20xx"`).
///
/// These are never relocated themselves.
pub fn is_year_directory(name: &str) -> bool {
    name.len() == 4 && name.starts_with("20")
}
