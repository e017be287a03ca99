use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub const HEADER: &str = "COMMAND: sim -n 8 -s 3\nSEED: 123\n";

pub const HAPLOTYPES: [&str; 4] = ["ACGTACGT", "01101001", "TTTTAAAA", "10000001"];

pub struct Dataset {
    pub input: PathBuf,
}

impl Dataset {
    pub fn panel(&self) -> PathBuf {
        append(&self.input, ".panel")
    }

    pub fn query(&self) -> PathBuf {
        append(&self.input, ".query")
    }
}

fn append(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

/// Writes `contents` to a fresh input file under a unique temp directory.
pub fn create_dataset(label: &str, contents: &str) -> io::Result<Dataset> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base_dir = std::env::temp_dir().join("hapsplit-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    if base_dir.exists() {
        fs::remove_dir_all(&base_dir)?;
    }
    fs::create_dir_all(&base_dir)?;

    let input = base_dir.join("sim.out");
    fs::write(&input, contents)?;
    Ok(Dataset { input })
}

/// A well-formed input with a non-site line between the records.
pub fn valid_contents() -> String {
    let mut contents = HEADER.to_string();
    for (idx, haplotype) in HAPLOTYPES.iter().enumerate() {
        if idx == 2 {
            contents.push_str("//\n");
        }
        contents.push_str(&format!(
            "SITE:\t{}\t{}\t{}\t{}\n",
            idx + 1,
            0.125 * (idx + 1) as f64,
            0.25,
            haplotype
        ));
    }
    contents
}
