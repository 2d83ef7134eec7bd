use std::path::PathBuf;

use super::Config;

/// Scientific notation as printf's `%.2e` writes it (2.70e+09, 1.00e-05)
pub fn fmt_sci(x: f64) -> String {
    let s = format!("{:.2e}", x);
    match s.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((m, Ok(e))) => format!("{}e{}{:02}", m, if e < 0 { '-' } else { '+' }, e.abs()),
        _ => s,
    }
}

fn join_paths(v: &[PathBuf]) -> String {
    if v.is_empty() {
        "None".to_string()
    } else {
        v.iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Build the '# ARGUMENTS LIST' block echoed at the start of a run
pub(super) fn arg_summary(cfg: &Config) -> String {
    let lambda = if cfg.has_control() {
        format!(
            "# Range for calculating regional lambda is: {} bps and {} bps",
            cfg.small_local(),
            cfg.large_local()
        )
    } else {
        format!(
            "# Range for calculating regional lambda is: {} bps",
            cfg.large_local()
        )
    };

    let mut s = [
        "# ARGUMENTS LIST:".to_string(),
        format!("# name = {}", cfg.name()),
        format!("# format = {}", cfg.format()),
        format!("# ChIP-seq file = {}", join_paths(cfg.treatment_files())),
        format!("# control file = {}", join_paths(cfg.control_files())),
        format!("# effective genome size = {}", fmt_sci(cfg.genome_size())),
        format!("# band width = {}", cfg.band_width()),
        format!("# model fold = {}", cfg.mfold_str()),
        format!("# pvalue cutoff = {}", fmt_sci(cfg.pvalue())),
        lambda,
    ]
    .join("\n");
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.7e9, "2.70e+09")]
    #[case(1.87e9, "1.87e+09")]
    #[case(1e-5, "1.00e-05")]
    #[case(0.01, "1.00e-02")]
    #[case(0.0, "0.00e+00")]
    #[case(1.5e100, "1.50e+100")]
    fn sci_notation(#[case] x: f64, #[case] expected: &str) {
        assert_eq!(fmt_sci(x), expected);
    }

    #[test]
    fn path_lists() {
        assert_eq!(join_paths(&[]), "None");
        let v = vec![PathBuf::from("a_1.txt"), PathBuf::from("a_2.txt")];
        assert_eq!(join_paths(&v), "a_1.txt,a_2.txt");
    }
}
