#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: i64,
    pub pos: f64,
    pub freq: f64,
    pub haplotype: String,
}

impl Site {
    /// Number of haplotypes, counted in characters rather than bytes.
    pub fn width(&self) -> usize {
        self.haplotype.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    // Header lines are kept as raw bytes and written back unchanged
    pub command_line: Vec<u8>,
    pub seed_line: Vec<u8>,
    pub sites: Vec<Site>,
    // Width of the first site's haplotype, 0 if there are no sites
    pub n_haplotypes: usize,
}
