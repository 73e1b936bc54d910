use std::path::Path;

/// Derive the include-guard token for a header written to `header_path`.
///
/// Only the final path component is used: it is upper-cased and every `.`
/// becomes `_`, so `include/default_font.h` yields `DEFAULT_FONT_H`. No other
/// characters are rewritten. A path without a file name (e.g. `/` or `..`)
/// yields an empty token.
pub fn include_guard(header_path: &Path) -> String {
    let base = header_path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    base.to_uppercase().replace('.', "_")
}
