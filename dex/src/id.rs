/// Normalize a display name into a lookup id: lowercase ASCII alphanumerics only.
///
/// `"Mr. Mime"` becomes `"mrmime"`, `"Will-O-Wisp"` becomes `"willowisp"`.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
