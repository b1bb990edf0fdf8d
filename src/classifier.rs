use std::fmt;

/// Coarse file kind used as the innermost bucket for files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Archive,
    Audio,
    Data,
    Doc,
    Book,
    Image,
    Video,
    Web,
    Misc,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Archive,
        Category::Audio,
        Category::Data,
        Category::Doc,
        Category::Book,
        Category::Image,
        Category::Video,
        Category::Web,
        Category::Misc,
    ];

    /// Folder label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Archive => "archive",
            Category::Audio => "audio",
            Category::Data => "data",
            Category::Doc => "doc",
            Category::Book => "book",
            Category::Image => "image",
            Category::Video => "video",
            Category::Web => "web",
            Category::Misc => "misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup table, searched in order. Extension sets must stay disjoint;
/// `test_extension_sets_are_disjoint` enforces it.
const EXTENSION_TABLE: &[(Category, &[&str])] = &[
    (Category::Archive, &["bz", "dmg", "gz", "tar", "tbz2", "zip"]),
    (Category::Audio, &["aac", "m4a", "mp3", "wav"]),
    (Category::Data, &["csv", "json", "xls", "xlsx"]),
    (
        Category::Doc,
        &["doc", "docx", "pages", "pdf", "rtf", "rtfd", "txt"],
    ),
    (Category::Book, &["epub"]),
    (
        Category::Image,
        &[
            "avif", "bmp", "gif", "heic", "jpg", "jpeg", "png", "svg", "tif", "webp",
        ],
    ),
    (Category::Video, &["avi", "mp4", "mpeg"]),
    (Category::Web, &["css", "html", "ico", "js", "sass"]),
];

/// Map an extension (no leading dot) to its category.
///
/// Matching is case-insensitive. Unknown and empty extensions map to
/// [`Category::Misc`].
pub fn classify(extension: &str) -> Category {
    let extension = extension.to_ascii_lowercase();

    EXTENSION_TABLE
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension.as_str()))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Misc)
}

/// Text after the last `.` of a file name, or `""` when there is none.
///
/// A name whose only dot is the leading one (`.profile`) has no extension.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx + 1..],
    }
}

/// Classify a file by its name.
pub fn classify_name(name: &str) -> Category {
    classify(extension_of(name))
}
