//! Export file naming.

const SUFFIX: &str = "_profile.json";
/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// File name for a profile export: `<name>_profile.json`.
///
/// - Each run of whitespace becomes a single `_`
/// - NUL, `/`, `\` and control characters become `_`
/// - The stem is cut on a char boundary so the whole name fits in 255 bytes
pub fn export_file_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            stem.push('_');
        } else {
            stem.push(c);
        }
    }

    let max_stem = NAME_MAX - SUFFIX.len();
    if stem.len() > max_stem {
        let mut take = max_stem;
        while take > 0 && !stem.is_char_boundary(take) {
            take -= 1;
        }
        stem.truncate(take);
    }

    stem.push_str(SUFFIX);
    stem
}
