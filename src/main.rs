use anyhow::Context;

#[macro_use]
extern crate log;

fn main() -> anyhow::Result<()> {
    let cfg = arem::cli::handle_cli().with_context(|| "Error processing command line arguments")?;

    for p in cfg.output_paths().iter() {
        debug!("Output file: {}", p.display());
    }
    if let Some(w) = cfg.wiggle_dirs() {
        debug!(
            "Wiggle tracks will go to {} and {}",
            w.treat().display(),
            w.control().display()
        );
    }
    info!(
        "Parser {:?}, p-value cutoff -10*log10(p) = {:.2}, model fold {:?}",
        cfg.parser(),
        cfg.log_pvalue(),
        cfg.mfold()
    );
    Ok(())
}
