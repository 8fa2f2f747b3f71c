use std::fmt;

use anyhow::Context;
use regex::{Match, Regex};

/// Closed interval [start, end] of 1-based coordinates on a contig
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Region {
    start: usize,
    end: usize,
}

impl Region {
    pub fn new(start: usize, end: usize) -> anyhow::Result<Self> {
        if end >= start {
            Ok(Self { start, end })
        } else {
            Err(anyhow!("Invalid range - end ({}) < start ({})", end, start))
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Grow the interval so that it also covers the end of `other`.
    /// Only the end is moved: callers visit regions in start order.
    pub(crate) fn extend_to(&mut self, other: &Self) {
        self.end = self.end.max(other.end)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parser for region lines of the form CHROM:START-END.
/// Contig names may not contain `:` or whitespace.
pub struct RegionParser {
    re: Regex,
}

impl Default for RegionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionParser {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r#"^([^:\s]+):([0-9]+)-([0-9]+)$"#).unwrap(),
        }
    }

    /// Parse a single line. Blank lines give `Ok(None)`.
    pub fn parse_line<'a>(&self, line: &'a str) -> anyhow::Result<Option<(&'a str, Region)>> {
        let s = line.trim();
        if s.is_empty() {
            return Ok(None);
        }
        let cap = self
            .re
            .captures(s)
            .ok_or_else(|| anyhow!("Could not parse region string '{}' (expected CHR:START-END)", s))?;

        let parse_x = |m: Option<Match>| parse_coord(m.map(|x| x.as_str()).unwrap_or(""));
        let chrom = cap.get(1).map(|c| c.as_str()).unwrap_or("");
        let start = parse_x(cap.get(2))?;
        let end = parse_x(cap.get(3))?;
        let reg = Region::new(start, end).with_context(|| format!("Illegal region {}", s))?;
        Ok(Some((chrom, reg)))
    }
}

fn parse_coord(s: &str) -> anyhow::Result<usize> {
    s.parse::<usize>()
        .with_context(|| format!("Illegal coordinate: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn parser() -> RegionParser {
        RegionParser::new()
    }

    #[rstest]
    #[case("chr1:10-20", "chr1", 10, 20)]
    #[case("1:5-5", "1", 5, 5)]
    #[case("  X:100-250\n", "X", 100, 250)]
    #[case("HLA-A*01:1-3", "HLA-A*01", 1, 3)]
    #[case("chrUn_gl000220:0-17", "chrUn_gl000220", 0, 17)]
    fn test_parse_valid(
        parser: RegionParser,
        #[case] line: &str,
        #[case] chrom: &str,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        let (c, r) = parser.parse_line(line).unwrap().unwrap();
        assert_eq!(c, chrom);
        assert_eq!(r.start(), start);
        assert_eq!(r.end(), end);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\r\n")]
    fn test_parse_blank(parser: RegionParser, #[case] line: &str) {
        assert!(parser.parse_line(line).unwrap().is_none());
    }

    #[rstest]
    #[case("chr1")]
    #[case("chr1 10 20")]
    #[case("chr1:10")]
    #[case("chr1:10-")]
    #[case(":10-20")]
    #[case("chr1:a-20")]
    #[case("chr1:10-2b")]
    #[case("chr1:-10-20")]
    #[case("chr1:10-20-30")]
    #[case("HLA-A*01:01:1-3")]
    #[case("chr1\t:1-2")]
    #[case("chr 1:1-2")]
    #[case("chr1 :1-2")]
    #[case("chr1:1,000-2,000")]
    #[case("chr1:10-99999999999999999999999999")]
    fn test_parse_malformed(parser: RegionParser, #[case] line: &str) {
        assert!(parser.parse_line(line).is_err());
    }

    #[rstest]
    fn test_parse_reversed_rejected(parser: RegionParser) {
        let e = parser.parse_line("chr1:30-20").unwrap_err();
        assert!(format!("{:#}", e).contains("end (20) < start (30)"));
    }

    #[test]
    fn test_display_and_contains() {
        let a = Region::new(10, 30).unwrap();
        let b = Region::new(15, 30).unwrap();
        assert_eq!(a.to_string(), "10-30");
        assert!(a.contains(&b));
        assert!(!b.contains(&a));
    }

    #[test]
    fn test_ordering_by_start_then_end() {
        let mut v = vec![
            Region::new(5, 9).unwrap(),
            Region::new(1, 7).unwrap(),
            Region::new(5, 6).unwrap(),
        ];
        v.sort();
        let s: Vec<_> = v.iter().map(|r| r.to_string()).collect();
        assert_eq!(s, vec!["1-7", "5-6", "5-9"]);
    }
}
