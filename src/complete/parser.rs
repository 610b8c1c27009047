use once_cell::sync::Lazy;
use regex::Regex;

/// One parsed table row: a stable key and a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub key: String,
    pub name: String,
    /// Third column of the richer tables (flag descriptions). Captured but
    /// not surfaced yet.
    pub detail: Option<String>,
}

/// Which columns the rendered table carries. Projects and environments list
/// as Key | Name; flags list as Key | Name | Description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    KeyName,
    KeyNameDetail,
}

/// Result of scanning one command's output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableScan {
    pub records: Vec<CandidateRecord>,
    /// Border, header, and otherwise malformed lines dropped along the way.
    pub skipped: usize,
}

static KEY_NAME_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\| (?P<key>\S+) +\| (?P<name>.*\S) *\|$").unwrap());

static KEY_NAME_DETAIL_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\| (?P<key>\S+) +\| (?P<name>.*?\S) +\| (?P<detail>.*?) *\|$").unwrap());

/// Scan raw command output line by line, keeping data rows and dropping
/// everything else. The drop is deliberate: borders, centered headers, and
/// stray diagnostics must not become suggestions, and one bad line must not
/// sink the whole fetch. Output order follows input order.
pub fn scan(raw: &str, shape: RowShape) -> TableScan {
    let pattern: &Regex = match shape {
        RowShape::KeyName => &KEY_NAME_ROW,
        RowShape::KeyNameDetail => &KEY_NAME_DETAIL_ROW,
    };

    let mut result = TableScan::default();
    for line in raw.lines() {
        match pattern.captures(line) {
            Some(captures) => result.records.push(CandidateRecord {
                key: captures["key"].to_string(),
                name: captures["name"].to_string(),
                detail: captures.name("detail").map(|m| m.as_str().to_string()),
            }),
            // not a data row: table border, header, or noise
            None => result.skipped += 1,
        }
    }
    result
}
