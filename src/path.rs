//! Group label derivation from source file paths.

/// Derives a display group from the path of the file that declared an attribute.
///
/// The group is the file's base name: everything after the last `/` or `\`
/// and before the last `.` that follows it. A path without a separator starts
/// at the beginning of the string, and a path without an extension runs to
/// the end.
///
/// # Example
///
/// ```rust
/// use theme_ids::group_from_path;
///
/// assert_eq!(group_from_path("src/widgets/Button.rs"), "Button");
/// assert_eq!(group_from_path("Button.rs"), "Button");
/// assert_eq!(group_from_path("src/widgets/Button"), "Button");
/// ```
pub fn group_from_path(path: &str) -> &str {
    let start = path.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    let base = &path[start..];
    match base.rfind('.') {
        Some(end) => &base[..end],
        None => base,
    }
}
