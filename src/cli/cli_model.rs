use std::path::PathBuf;

use clap::{Arg, Command, command, value_parser};

use crate::log_utils::LogLevel;

pub(super) fn cli_model() -> Command {
    command!()
    .arg(
        Arg::new("loglevel")
            .short('l')
            .long("loglevel")
            .value_name("LOGLEVEL")
            .value_parser(value_parser!(LogLevel))
            .ignore_case(true)
            .default_value("info")
            .help("Set log level"),
    )
    .next_help_heading("Input/Output")
    .arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .value_parser(value_parser!(PathBuf))
            .value_name("FILE")
            .help("Output file [default: input with extension replaced by _merged.txt]"),
    )
    .arg(
        Arg::new("input")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
            .value_name("INPUT")
            .help("File with regions in CHR:START-END format, one per line"),
    )
}
