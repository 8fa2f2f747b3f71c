use std::path::{Path, PathBuf};

use clap::ArgMatches;

use super::Config;

/// Suffix replacing the last four characters of the input name
const MERGED_SUFFIX: &str = "_merged.txt";

impl Config {
    pub fn new(input: PathBuf, output: PathBuf) -> anyhow::Result<Self> {
        if input == output {
            return Err(anyhow!(
                "Output file {} would overwrite the input file",
                output.display()
            ));
        }
        Ok(Self { input, output })
    }

    /// Returns `Ok(None)` unless exactly one input file was given
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Option<Self>> {
        let inputs: Vec<&PathBuf> = m
            .get_many::<PathBuf>("input")
            .map(|v| v.collect())
            .unwrap_or_default();

        if inputs.len() != 1 {
            debug!("Expected 1 input file, found {}", inputs.len());
            return Ok(None);
        }
        let input = inputs[0].clone();

        let output = match m.get_one::<PathBuf>("output") {
            Some(p) => p.clone(),
            None => Self::derive_output_path(&input)?,
        };
        debug!(
            "Input: {}, output: {}",
            input.display(),
            output.display()
        );
        Self::new(input, output).map(Some)
    }

    /// `regions.txt` -> `regions_merged.txt`
    ///
    /// The last four characters of the path (normally a `.xxx` extension)
    /// are always dropped, whatever they are.
    pub fn derive_output_path(input: &Path) -> anyhow::Result<PathBuf> {
        let s = input
            .to_str()
            .ok_or_else(|| anyhow!("Input path {} is not valid UTF-8", input.display()))?;
        let ix = s
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .filter(|i| *i > 0)
            .ok_or_else(|| anyhow!("Input path {} too short to derive output name", s))?;
        Ok(PathBuf::from(format!("{}{}", &s[..ix], MERGED_SUFFIX)))
    }
}
