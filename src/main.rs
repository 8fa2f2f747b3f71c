#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

mod cli;
mod log_utils;
mod merge;
mod process;
mod region;

fn main() -> anyhow::Result<()> {
    match cli::handle_cli()? {
        Some(cfg) => process::process_data(&cfg),
        None => Ok(()),
    }
}
