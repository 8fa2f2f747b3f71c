use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::{
    cli::Config,
    merge::RegionSet,
    region::RegionParser,
};

pub fn process_data(cfg: &Config) -> anyhow::Result<()> {
    let input = cfg.input();
    let output = cfg.output();
    info!("Input file: {}", input.display());
    info!("Output file: {}", output.display());

    let rdr = CompressIo::new()
        .path(input)
        .bufreader()
        .with_context(|| format!("Could not open input file {}", input.display()))?;

    // All input is parsed before the output file is touched
    let rset = read_regions(rdr, input)?;
    if rset.is_empty() {
        warn!("No regions found in {}", input.display());
    }
    info!(
        "Read {} regions on {} contigs",
        rset.n_regions(),
        rset.n_contigs()
    );

    let mut wrt = BufWriter::new(
        File::create(output)
            .with_context(|| format!("Could not open output file {}", output.display()))?,
    );
    let err = || format!("Error writing to output file {}", output.display());
    let n = write_merged(rset, &mut wrt).with_context(err)?;
    wrt.flush().with_context(err)?;
    info!("Wrote {} merged regions to {}", n, output.display());
    Ok(())
}

/// Read region lines from `rdr`, skipping blank lines.
/// `name` is only used for error messages.
pub fn read_regions<R: BufRead>(mut rdr: R, name: &Path) -> anyhow::Result<RegionSet> {
    let parser = RegionParser::new();
    let mut rset = RegionSet::new();
    let mut buf = String::new();
    let mut line = 0;
    debug!("Reading regions from {}", name.display());
    loop {
        buf.clear();
        line += 1;
        if rdr
            .read_line(&mut buf)
            .with_context(|| format!("Error reading line {} of {}", line, name.display()))?
            == 0
        {
            break;
        }
        let parsed = parser.parse_line(&buf).with_context(|| {
            format!(
                "Error at line {} of {}: '{}'",
                line,
                name.display(),
                buf.trim_end()
            )
        })?;
        if let Some((chrom, reg)) = parsed {
            trace!("Line {}: {}:{}", line, chrom, reg);
            rset.add(chrom, reg)
        }
    }
    Ok(rset)
}

/// Merge and write out regions contig by contig as CHR:START-END lines.
/// Returns the number of merged regions written.
pub fn write_merged<W: Write>(rset: RegionSet, wrt: &mut W) -> anyhow::Result<usize> {
    let mut n = 0;
    for (ctg, merged) in rset.into_merged() {
        for m in merged.iter() {
            let reg = m.region();
            writeln!(wrt, "{}:{}", ctg, reg)?;
            debug!(
                "Positions {}: [{}] ({} regions) merged into {}:{}",
                ctg,
                m.display_members(),
                m.members().len(),
                ctg,
                reg
            );
        }
        n += merged.len();
    }
    Ok(n)
}
