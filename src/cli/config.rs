use std::path::PathBuf;

mod getters;
mod mk_config;

pub struct Config {
    input: PathBuf,
    output: PathBuf,
}
