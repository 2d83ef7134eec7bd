use crate::error::ValidationError;

/// Effective (mappable) genome sizes in bp for the organism shortcuts accepted by --gsize
pub const GENOME_SIZE_SHORTCUTS: [(&str, f64); 4] = [
    ("hs", 2.7e9),
    ("mm", 1.87e9),
    ("ce", 9e7),
    ("dm", 1.2e8),
];

fn shortcut_list() -> String {
    GENOME_SIZE_SHORTCUTS
        .iter()
        .map(|(k, _)| *k)
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve the --gsize argument to an effective genome size.
///
/// Shortcuts are tried first, then the string is read as a floating point literal.
pub fn resolve_genome_size(s: &str) -> Result<f64, ValidationError> {
    if let Some((_, size)) = GENOME_SIZE_SHORTCUTS.iter().find(|(k, _)| *k == s) {
        return Ok(*size);
    }

    match s.trim().parse::<f64>() {
        Ok(x) if x.is_finite() && x > 0.0 => Ok(x),
        _ => Err(ValidationError::InvalidGenomeSize {
            value: s.to_owned(),
            shortcuts: shortcut_list(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hs", 2.7e9)]
    #[case("mm", 1.87e9)]
    #[case("ce", 9e7)]
    #[case("dm", 1.2e8)]
    fn shortcuts_resolve_to_constants(#[case] token: &str, #[case] expected: f64) {
        assert_eq!(resolve_genome_size(token).unwrap(), expected);
    }

    #[rstest]
    #[case("1e9", 1e9)]
    #[case("3000000", 3e6)]
    #[case("2.5e8", 2.5e8)]
    #[case(" 1.2e7 ", 1.2e7)]
    fn numeric_literals_are_accepted(#[case] token: &str, #[case] expected: f64) {
        assert_eq!(resolve_genome_size(token).unwrap(), expected);
    }

    #[rstest]
    #[case("human")]
    #[case("HS")]
    #[case("")]
    #[case("0")]
    #[case("-1e9")]
    #[case("nan")]
    #[case("inf")]
    fn bad_tokens_are_rejected(#[case] token: &str) {
        match resolve_genome_size(token) {
            Err(ValidationError::InvalidGenomeSize { value, shortcuts }) => {
                assert_eq!(value, token);
                assert_eq!(shortcuts, "hs,mm,ce,dm");
            }
            other => panic!("Unexpected result for '{}': {:?}", token, other),
        }
    }

    #[test]
    fn error_message_lists_shortcuts() {
        let e = resolve_genome_size("yeast").unwrap_err();
        let msg = e.to_string();
        assert!(msg.contains("'yeast'"));
        assert!(msg.contains("hs,mm,ce,dm"));
    }
}
