use crate::api::schema::AddonFile;

/// Find first file which supports given game version.
/// 
/// Versions are compared as plain strings, files order matters
/// 
/// ```
/// use curse_addons_core::prelude::*;
/// 
/// let files = vec![
///     AddonFile {
///         file_name: String::from("a.zip"),
///         game_versions: vec![String::from("1.0")],
///         ..AddonFile::default()
///     },
///     AddonFile {
///         file_name: String::from("b.zip"),
///         game_versions: vec![String::from("2.0"), String::from("1.0")],
///         ..AddonFile::default()
///     }
/// ];
/// 
/// assert_eq!(select_file(&files, "1.0").map(|file| file.file_name.as_str()), Some("a.zip"));
/// assert_eq!(select_file(&files, "2.0").map(|file| file.file_name.as_str()), Some("b.zip"));
/// assert_eq!(select_file(&files, "1.0.1"), None);
/// ```
#[inline]
pub fn select_file<'a>(files: &'a [AddonFile], version: &str) -> Option<&'a AddonFile> {
    files.iter().find(|file| file.supports_version(version))
}
