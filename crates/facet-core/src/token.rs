//! Name tokenization.

/// Split a file or directory base name into its ordered tokens.
///
/// The portion after the final `.` is the extension and becomes one
/// trailing token; the portion before it is split on `-`. Splitting at
/// the last dot only keeps names with dots inside them intact
/// (`app.cfg-prod.json` → `["app.cfg", "prod", "json"]`). Empty tokens
/// from adjacent separators or a missing extension are dropped, so a
/// dash-free, dot-free name yields exactly one token.
pub fn tokenize(name: &str) -> Vec<String> {
    let (stem, ext) = match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => (name, ""),
    };

    let mut tokens: Vec<String> = stem
        .split('-')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if !ext.is_empty() {
        tokens.push(ext.to_string());
    }

    tokens
}
