/// Folds a color name to the form used as a lookup key: ASCII lowercase with
/// whitespace, underscores and hyphens removed.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|&c| !(c.is_whitespace() || c == '_' || c == '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn folds_separators_and_case() {
        assert_eq!(normalize_name("Light Goldenrod"), "lightgoldenrod");
        assert_eq!(normalize_name("light_goldenrod"), "lightgoldenrod");
        assert_eq!(normalize_name(" LIGHT-goldenRod\t"), "lightgoldenrod");
        assert_eq!(normalize_name(""), "");
    }
}
