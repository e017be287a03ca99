use crate::error::{CustomError, Result};
use crate::model::Site;

pub(crate) const SITE_PREFIX: &str = "SITE:";

/// Parses one `SITE:` line into a [`Site`].
///
/// Fields are whitespace-separated: tag, id, position, frequency and the
/// haplotype string. Anything after the haplotype is ignored.
pub(crate) fn parse_site(line: &str, line_num: usize) -> Result<Site> {
    let mut fields = line.split_whitespace();
    let mut next_field = |field: &'static str| {
        fields
            .next()
            .ok_or(CustomError::SiteFieldMissing { line_num, field })
    };

    next_field("tag")?;

    let raw = next_field("id")?;
    let id: i64 = raw.parse().map_err(|e| CustomError::SiteId {
        source: e,
        line_num,
        value: raw.to_string(),
    })?;

    let raw = next_field("position")?;
    let pos: f64 = raw.parse().map_err(|e| CustomError::SitePos {
        source: e,
        line_num,
        value: raw.to_string(),
    })?;

    let raw = next_field("frequency")?;
    let freq: f64 = raw.parse().map_err(|e| CustomError::SiteFreq {
        source: e,
        line_num,
        value: raw.to_string(),
    })?;

    let haplotype = next_field("haplotype")?.to_string();

    Ok(Site {
        id,
        pos,
        freq,
        haplotype,
    })
}
