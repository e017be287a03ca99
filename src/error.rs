use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    ReadWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("first line must start with \"COMMAND:\" in {path}")]
    CommandHeader { path: std::path::PathBuf },

    #[error("second line must start with \"SEED:\" in {path}")]
    SeedHeader { path: std::path::PathBuf },

    #[error("missing {field} field in line {line_num}")]
    SiteFieldMissing {
        line_num: usize,
        field: &'static str,
    },

    #[error("site line {line_num} is not valid UTF-8")]
    SiteUtf8 {
        #[source]
        source: std::str::Utf8Error,
        line_num: usize,
    },

    #[error("could not parse site id {value:?} in line {line_num}")]
    SiteId {
        #[source]
        source: std::num::ParseIntError,
        line_num: usize,
        value: String,
    },

    #[error("could not parse position {value:?} in line {line_num}")]
    SitePos {
        #[source]
        source: std::num::ParseFloatError,
        line_num: usize,
        value: String,
    },

    #[error("could not parse frequency {value:?} in line {line_num}")]
    SiteFreq {
        #[source]
        source: std::num::ParseFloatError,
        line_num: usize,
        value: String,
    },

    #[error(
        "inconsistent haplotype length at site {site_id} (expected {expected}, got {found})"
    )]
    HaplotypeWidth {
        site_id: i64,
        expected: usize,
        found: usize,
    },

    #[error("split count ({split_count}) must be less than total haplotypes ({n_haplotypes})")]
    SplitCount {
        split_count: usize,
        n_haplotypes: usize,
    },
}

pub type Result<T> = std::result::Result<T, CustomError>;
