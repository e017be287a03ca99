use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{CustomError, Result};
use crate::model::{Document, Site};
use crate::split::{Split, Subset};

/// Writes one side of the split to `path`.
///
/// Header lines are copied byte for byte. Positions and frequencies use the
/// shortest decimal form that reads back to the same `f64`, so `1e-05` is
/// written as `0.00001`.
pub fn write_subset(
    document: &Document,
    split: &Split,
    subset: Subset,
    path: &impl AsRef<Path>,
) -> Result<()> {
    let to_write_error = |e| CustomError::Write {
        source: e,
        path: path.as_ref().to_path_buf(),
    };

    let f = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(f);

    let pb = ProgressBar::new(document.sites.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} sites")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    write_header(&mut writer, document, split, subset).map_err(to_write_error)?;
    for site in &document.sites {
        write_site(&mut writer, site, split.select(subset, &site.haplotype))
            .map_err(to_write_error)?;
        pb.inc(1);
    }
    writer.flush().map_err(to_write_error)?;
    pb.finish_and_clear();

    log::info!(
        "Wrote {} sites with {} haplotypes to {}",
        document.sites.len(),
        split.width(subset),
        path.as_ref().display()
    );
    Ok(())
}

fn write_header(
    writer: &mut impl Write,
    document: &Document,
    split: &Split,
    subset: Subset,
) -> std::io::Result<()> {
    writer.write_all(&document.command_line)?;
    writeln!(writer, " {}", split.annotation(subset))?;
    writer.write_all(&document.seed_line)?;
    writer.write_all(b"\n")
}

fn write_site(writer: &mut impl Write, site: &Site, haplotype: &str) -> std::io::Result<()> {
    writeln!(
        writer,
        "SITE:\t{}\t{}\t{}\t{}",
        site.id, site.pos, site.freq, haplotype
    )
}
