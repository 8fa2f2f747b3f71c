use std::{collections::BTreeMap, fmt};

use crate::region::Region;

/// Union of one or more overlapping input regions on a contig.
/// The contributing regions are kept for the diagnostic log.
#[derive(Debug)]
pub struct MergedRegion {
    region: Region,
    members: Vec<Region>,
}

impl MergedRegion {
    fn new(r: Region) -> Self {
        Self {
            region: r,
            members: vec![r],
        }
    }

    fn add(&mut self, r: Region) {
        self.region.extend_to(&r);
        debug_assert!(self.region.contains(&r));
        self.members.push(r)
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn members(&self) -> &[Region] {
        &self.members
    }

    pub fn display_members(&self) -> Members<'_> {
        Members(&self.members)
    }
}

/// Comma separated list of contributing positions
pub struct Members<'a>(&'a [Region]);

impl fmt::Display for Members<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, r) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}

/// Input regions grouped by contig.  Contigs iterate in plain
/// lexicographic order ("10" < "2").
#[derive(Default, Debug)]
pub struct RegionSet {
    ctgs: BTreeMap<Box<str>, Vec<Region>>,
    n_regions: usize,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, chrom: &str, r: Region) {
        if let Some(v) = self.ctgs.get_mut(chrom) {
            v.push(r)
        } else {
            self.ctgs.insert(Box::from(chrom), vec![r]);
        }
        self.n_regions += 1;
    }

    pub fn n_regions(&self) -> usize {
        self.n_regions
    }

    pub fn n_contigs(&self) -> usize {
        self.ctgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_regions == 0
    }

    /// Merge each contig in turn, consuming the set
    pub fn into_merged(self) -> impl Iterator<Item = (Box<str>, Vec<MergedRegion>)> {
        self.ctgs
            .into_iter()
            .map(|(ctg, v)| (ctg, merge_regions(v)))
    }
}

/// Sort regions by (start, end) then sweep once, extending the current
/// merged region while the next start is <= its end.  Regions that only
/// abut (end + 1 == next start) are left separate.
pub fn merge_regions(mut regions: Vec<Region>) -> Vec<MergedRegion> {
    regions.sort_unstable();
    let mut merged = Vec::new();
    let mut it = regions.into_iter();
    if let Some(r) = it.next() {
        let mut curr = MergedRegion::new(r);
        for r in it {
            if r.start() <= curr.region.end() {
                curr.add(r)
            } else {
                merged.push(std::mem::replace(&mut curr, MergedRegion::new(r)))
            }
        }
        merged.push(curr)
    }
    merged
}
