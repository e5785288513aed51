/// Strips leading and trailing separators so `/a/b/` and `a/b` address the same entry.
pub fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Returns true when `path` lives under `directory`.
///
/// Non-recursive listings only accept direct children.
pub fn is_listed(directory: &str, path: &str, recursive: bool) -> bool {
    let directory = directory.trim_matches('/');
    let relative = if directory.is_empty() {
        path
    } else {
        match path.strip_prefix(directory).and_then(|rest| rest.strip_prefix('/')) {
            Some(rest) => rest,
            None => return false,
        }
    };
    recursive || !relative.contains('/')
}
