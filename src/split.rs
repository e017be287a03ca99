use std::fmt;

use crate::error::{CustomError, Result};

/// A validated boundary between the panel and query haplotype columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    n_haplotypes: usize,
    split_count: usize,
}

impl Split {
    pub fn new(n_haplotypes: usize, split_count: usize) -> Result<Self> {
        if split_count >= n_haplotypes {
            return Err(CustomError::SplitCount {
                split_count,
                n_haplotypes,
            });
        }
        Ok(Self {
            n_haplotypes,
            split_count,
        })
    }

    pub fn n_haplotypes(&self) -> usize {
        self.n_haplotypes
    }

    pub fn width(&self, subset: Subset) -> usize {
        match subset {
            Subset::Panel => self.n_haplotypes - self.split_count,
            Subset::Query => self.split_count,
        }
    }

    /// Splits a haplotype string into its panel and query parts.
    ///
    /// Columns are characters, so the boundary is always a valid `str` index.
    pub fn partition<'a>(&self, haplotype: &'a str) -> (&'a str, &'a str) {
        let boundary = haplotype
            .char_indices()
            .nth(self.width(Subset::Panel))
            .map_or(haplotype.len(), |(idx, _)| idx);
        haplotype.split_at(boundary)
    }

    pub fn select<'a>(&self, subset: Subset, haplotype: &'a str) -> &'a str {
        let (panel, query) = self.partition(haplotype);
        match subset {
            Subset::Panel => panel,
            Subset::Query => query,
        }
    }

    /// Text appended to the `COMMAND:` header of an output file.
    pub fn annotation(&self, subset: Subset) -> String {
        let position = match subset {
            Subset::Panel => "first",
            Subset::Query => "last",
        };
        format!("{position} {} haplotypes", self.width(subset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subset {
    Panel,
    Query,
}

impl Subset {
    pub const ALL: [Subset; 2] = [Subset::Panel, Subset::Query];

    pub fn extension(self) -> &'static str {
        match self {
            Subset::Panel => "panel",
            Subset::Query => "query",
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subset::Panel => f.write_str("Panel"),
            Subset::Query => f.write_str("Query"),
        }
    }
}
