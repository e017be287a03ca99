pub mod site;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{CustomError, Result};
use crate::model::{Document, Site};
use site::{SITE_PREFIX, parse_site};

const COMMAND_PREFIX: &[u8] = b"COMMAND:";
const SEED_PREFIX: &[u8] = b"SEED:";

/// Streams the `SITE:` records following the two header lines.
///
/// Lines are read as raw bytes; only `SITE:` lines have to be valid UTF-8.
pub struct SiteReader<R> {
    lines: io::Split<R>,
    path: PathBuf,
    command_line: Vec<u8>,
    seed_line: Vec<u8>,
    // Line numbers are 1-based and count the headers
    line_num: usize,
}

impl SiteReader<BufReader<File>> {
    pub fn open(path: &impl AsRef<Path>) -> Result<Self> {
        let f = File::open(path).map_err(|e| CustomError::ReadWithPath {
            source: e,
            path: path.as_ref().to_path_buf(),
        })?;
        Self::new(BufReader::new(f), path)
    }
}

impl<R: BufRead> SiteReader<R> {
    pub fn new(reader: R, path: &impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut lines = reader.split(b'\n');

        let command_line = next_header(&mut lines, &path)?;
        if !command_line.starts_with(COMMAND_PREFIX) {
            return Err(CustomError::CommandHeader { path });
        }
        let seed_line = next_header(&mut lines, &path)?;
        if !seed_line.starts_with(SEED_PREFIX) {
            return Err(CustomError::SeedHeader { path });
        }

        Ok(Self {
            lines,
            path,
            command_line,
            seed_line,
            line_num: 2,
        })
    }

    /// Reads every remaining site and checks that all haplotypes share the
    /// width of the first one.
    pub fn into_document(mut self) -> Result<Document> {
        let mut sites = Vec::new();
        let mut n_haplotypes: Option<usize> = None;

        for site in &mut self {
            let site = site?;
            let width = site.width();
            match n_haplotypes {
                None => n_haplotypes = Some(width),
                Some(expected) if expected != width => {
                    return Err(CustomError::HaplotypeWidth {
                        site_id: site.id,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            sites.push(site);
        }

        Ok(Document {
            command_line: self.command_line,
            seed_line: self.seed_line,
            sites,
            n_haplotypes: n_haplotypes.unwrap_or(0),
        })
    }
}

impl<R: BufRead> Iterator for SiteReader<R> {
    type Item = Result<Site>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            self.line_num += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(CustomError::ReadWithPath {
                        source: e,
                        path: self.path.clone(),
                    }));
                }
            };
            if line.starts_with(SITE_PREFIX.as_bytes()) {
                let line_num = self.line_num;
                return Some(
                    std::str::from_utf8(trim_line_end(&line))
                        .map_err(|e| CustomError::SiteUtf8 {
                            source: e,
                            line_num,
                        })
                        .and_then(|line| parse_site(line, line_num)),
                );
            }
            log::debug!("skipping line {} of {}", self.line_num, self.path.display());
        }
        None
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

// A missing header line is treated as an empty one so the prefix check fails
fn next_header<R: BufRead>(lines: &mut io::Split<R>, path: &Path) -> Result<Vec<u8>> {
    match lines.next() {
        Some(line) => {
            let line = line.map_err(|e| CustomError::ReadWithPath {
                source: e,
                path: path.to_path_buf(),
            })?;
            Ok(trim_line_end(&line).to_vec())
        }
        None => Ok(Vec::new()),
    }
}

pub fn read_document(path: &impl AsRef<Path>) -> Result<Document> {
    let reader = SiteReader::open(path)?;
    let document = reader.into_document()?;
    log::info!(
        "Read {} sites with {} haplotypes from {}",
        document.sites.len(),
        document.n_haplotypes,
        path.as_ref().display()
    );
    Ok(document)
}
