use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::Args;
use crate::error::Result;
use crate::output::write_subset;
use crate::reader::read_document;
use crate::split::{Split, Subset};

#[derive(Debug, Clone)]
pub struct SplitSpec {
    input: PathBuf,
    panel: PathBuf,
    query: PathBuf,
    split_count: usize,
}

impl SplitSpec {
    pub fn from_input(input: impl Into<PathBuf>, split_count: usize) -> Self {
        let input = input.into();
        Self {
            panel: with_suffix(&input, Subset::Panel),
            query: with_suffix(&input, Subset::Query),
            input,
            split_count,
        }
    }

    pub fn log_paths(&self) {
        log::info!("Input: {}", self.input.display());
        log::info!("Panel: {}", self.panel.display());
        log::info!("Query: {}", self.query.display());
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self, subset: Subset) -> &Path {
        match subset {
            Subset::Panel => &self.panel,
            Subset::Query => &self.query,
        }
    }
}

// Appends rather than replaces, so "sim.out" becomes "sim.out.panel"
fn with_suffix(input: &Path, subset: Subset) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".");
    path.push(subset.extension());
    PathBuf::from(path)
}

pub fn build_split_spec(args: &Args) -> SplitSpec {
    SplitSpec::from_input(&args.input, args.split_count as usize)
}

pub fn run(spec: &SplitSpec) -> Result<()> {
    let document = read_document(&spec.input())?;

    // Validated before either output is opened
    let split = Split::new(document.n_haplotypes, spec.split_count)?;
    log::info!(
        "Splitting {} haplotypes into {} panel and {} query haplotypes",
        split.n_haplotypes(),
        split.width(Subset::Panel),
        split.width(Subset::Query)
    );

    for subset in Subset::ALL {
        write_subset(&document, &split, subset, &spec.output(subset))?;
    }
    for subset in Subset::ALL {
        println!(
            "{subset} file created: {} ({} haplotypes)",
            spec.output(subset).display(),
            split.width(subset)
        );
    }
    Ok(())
}
