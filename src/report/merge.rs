//! Marker-delimited region merging
//!
//! A report file may hold several generated regions, each fenced by its own
//! pair of literal marker strings. Merging a region touches only the span
//! between its own markers; everything else is kept byte for byte.

use std::ops::Range;

/// A start/end sentinel pair fencing one generated region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: &'static str,
    pub end: &'static str,
}

pub const HEALTH_MARKERS: Markers = Markers {
    start: "<!-- BEGIN_DOCS_HEALTH_REPORT -->",
    end: "<!-- END_DOCS_HEALTH_REPORT -->",
};

pub const VERSION_MARKERS: Markers = Markers {
    start: "<!-- BEGIN_VERSION_REPORT -->",
    end: "<!-- END_VERSION_REPORT -->",
};

impl Markers {
    /// Fence `content` with this pair. The start marker gets its own line.
    pub fn wrap(self, content: &str) -> Region {
        Region {
            markers: self,
            text: format!("{}\n{}{}", self.start, content, self.end),
        }
    }

    /// Locate the first start marker and the nearest end marker after it.
    ///
    /// The returned range covers both markers.
    pub fn find_span(&self, text: &str) -> Option<Range<usize>> {
        let start = text.find(self.start)?;
        let after_start = start + self.start.len();
        let end = after_start + text[after_start..].find(self.end)?;
        Some(start..end + self.end.len())
    }
}

/// A rendered region, markers included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    markers: Markers,
    text: String,
}

impl Region {
    pub fn markers(&self) -> Markers {
        self.markers
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Merge `region` into `existing`.
///
/// - A marked span already present is replaced in full, markers included.
/// - Otherwise the region is appended after a blank line, or returned alone
///   when `existing` is empty.
///
/// A start marker with no end marker after it counts as "no span".
pub fn merge(existing: &str, region: &Region) -> String {
    match region.markers.find_span(existing) {
        Some(span) => {
            let mut merged =
                String::with_capacity(existing.len() - span.len() + region.text.len());
            merged.push_str(&existing[..span.start]);
            merged.push_str(&region.text);
            merged.push_str(&existing[span.end..]);
            merged
        }
        None if existing.is_empty() => region.text.clone(),
        None => format!("{}\n\n{}", existing, region.text),
    }
}
