use clap::{Arg, ArgAction, Command, command, value_parser};

pub(super) fn cli_model() -> Command {
    command!()
    .next_help_heading("Input/Output")
    .arg(
        Arg::new("treatment")
            .short('t')
            .long("treatment")
            .value_parser(value_parser!(String))
            .value_name("TFILE")
            .help("ChIP-seq treatment file (two files separated by a comma for ELANDMULTIPET). REQUIRED"),
    )
    .arg(
        Arg::new("control")
            .short('c')
            .long("control")
            .value_parser(value_parser!(String))
            .value_name("CFILE")
            .help("Control file (two files separated by a comma for ELANDMULTIPET)"),
    )
    .arg(
        Arg::new("name")
            .short('n')
            .long("name")
            .default_value("NA")
            .value_parser(value_parser!(String))
            .value_name("NAME")
            .help("Experiment name, used as the prefix of all output files"),
    )
    .arg(
        Arg::new("format")
            .short('f')
            .long("format")
            .default_value("AUTO")
            .value_parser(value_parser!(String))
            .value_name("FORMAT")
            .help("Format of tag file: AUTO, BED, ELAND, ELANDMULTI, ELANDEXPORT, ELANDMULTIPET, SAM, BAM or BOWTIE"),
    )
    .arg(
        Arg::new("qual_scale")
            .long("qual-scale")
            .default_value("auto")
            .value_parser(value_parser!(String))
            .value_name("SCALE")
            .help("Quality score encoding of the reads: auto, sanger+33 or illumina+64"),
    )
    .arg(
        Arg::new("store_wig")
            .short('w')
            .long("wig")
            .action(ArgAction::SetTrue)
            .help("Save extended fragment pileup at every WIGEXTEND bps into a wiggle file"),
    )
    .arg(
        Arg::new("call_subpeaks")
            .long("call-subpeaks")
            .action(ArgAction::SetTrue)
            .help("Use PeakSplitter to call sub-peaks within a peak. Requires --wig"),
    )
    .next_help_heading("Model")
    .arg(
        Arg::new("gsize")
            .short('g')
            .long("gsize")
            .default_value("hs")
            .value_parser(value_parser!(String))
            .value_name("GSIZE")
            .help("Effective genome size, either a number (e.g. 1.0e9) or a shortcut: hs, mm, ce, dm"),
    )
    .arg(
        Arg::new("tsize")
            .short('s')
            .long("tsize")
            .default_value("25")
            .value_parser(value_parser!(u32))
            .value_name("TSIZE")
            .help("Tag size"),
    )
    .arg(
        Arg::new("bw")
            .long("bw")
            .default_value("300")
            .value_parser(value_parser!(u32))
            .value_name("BW")
            .help("Band width, used for model building"),
    )
    .arg(
        Arg::new("pvalue")
            .short('p')
            .long("pvalue")
            .default_value("1e-5")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .value_name("PVALUE")
            .help("P-value cutoff for peak detection"),
    )
    .arg(
        Arg::new("mfold")
            .short('m')
            .long("mfold")
            .default_value("10,30")
            .value_parser(value_parser!(String))
            .value_name("LOW,HIGH")
            .help("Select the regions within this range of high-confidence enrichment ratio against background to build the model"),
    )
    .arg(
        Arg::new("shiftsize")
            .long("shiftsize")
            .default_value("100")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .value_name("SIZE")
            .help("Half of the expected fragment size; tags are shifted by this amount towards the 3' end"),
    )
    .arg(
        Arg::new("small_local")
            .long("slocal")
            .default_value("1000")
            .value_parser(value_parser!(u32))
            .value_name("SMALLLOCAL")
            .help("Small window (bps) for calculating the local lambda"),
    )
    .arg(
        Arg::new("large_local")
            .long("llocal")
            .value_parser(value_parser!(u32))
            .value_name("LARGELOCAL")
            .help("Large window (bps) for calculating the local lambda [default: 10000]"),
    )
    .next_help_heading("Operation")
    .arg(
        Arg::new("verbose")
            .long("verbose")
            .default_value("2")
            .value_parser(value_parser!(u8))
            .value_name("VERBOSE")
            .help("0: only errors, 1: also warnings, 2: process information, 3: debug messages"),
    )
}
