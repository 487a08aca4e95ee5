//! Page list generation for pagination controls
//!
//! Pure functions that decide which page numbers a pagination bar displays.
//! Pages at both ends and a window around the current page are always shown;
//! every other run of pages collapses into a [`PageMarker::Gap`].
//!
//! ```text
//! current = 12, total = 20
//! 1 2 ... 10 11 12 13 14 ... 19 20
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ConfigError;

/// Glyph used when a gap is rendered as text
pub const GAP_GLYPH: &str = "...";

/// Default number of pages always shown at the start
pub const DEFAULT_FIRST: u32 = 2;
/// Default number of pages always shown at the end
pub const DEFAULT_LAST: u32 = 2;
/// Default number of pages shown on each side of the current page
pub const DEFAULT_AROUND: u32 = 2;
/// Default page count under which nothing is collapsed
pub const DEFAULT_MAX_VISIBLE: u32 = 10;

/// Display policy for the page list
///
/// Fields are only reachable through [`PaginationConfig::new`] or
/// deserialization, both of which reject negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPaginationConfig")]
pub struct PaginationConfig {
    first: u32,
    last: u32,
    around: u32,
    max_visible: u32,
}

/// Unvalidated shape of a config file section
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawPaginationConfig {
    first: i64,
    last: i64,
    around: i64,
    max_visible: i64,
}

impl Default for RawPaginationConfig {
    fn default() -> Self {
        Self {
            first: i64::from(DEFAULT_FIRST),
            last: i64::from(DEFAULT_LAST),
            around: i64::from(DEFAULT_AROUND),
            max_visible: i64::from(DEFAULT_MAX_VISIBLE),
        }
    }
}

impl TryFrom<RawPaginationConfig> for PaginationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPaginationConfig) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.last, raw.around, raw.max_visible)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST,
            last: DEFAULT_LAST,
            around: DEFAULT_AROUND,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl PaginationConfig {
    /// Validate and build a configuration
    pub fn new(first: i64, last: i64, around: i64, max_visible: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            first: check_field("first", first)?,
            last: check_field("last", last)?,
            around: check_field("around", around)?,
            max_visible: check_field("max_visible", max_visible)?,
        })
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn around(&self) -> u32 {
        self.around
    }

    pub fn max_visible(&self) -> u32 {
        self.max_visible
    }
}

fn check_field(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::Negative { field, value });
    }

    u32::try_from(value).map_err(|_| ConfigError::TooLarge { field, value })
}

/// One element of the page list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A concrete, 1-based page number
    Page(u64),
    /// One or more consecutive hidden pages
    Gap,
}

impl PageMarker {
    pub fn is_gap(&self) -> bool {
        matches!(self, PageMarker::Gap)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Gap => f.write_str(GAP_GLYPH),
        }
    }
}

// Pages serialize as bare numbers and gaps as the glyph: [1, 2, "...", 20]
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_u64(*n),
            PageMarker::Gap => serializer.serialize_str(GAP_GLYPH),
        }
    }
}

/// Accumulates markers while keeping the output well-formed
///
/// Pages at or below the highest page already emitted are dropped, and a
/// requested gap is only materialized when it hides at least one page.
#[derive(Debug, Default)]
struct MarkerList {
    markers: Vec<PageMarker>,
    highest: u64,
    pending_gap: bool,
}

impl MarkerList {
    fn page(&mut self, page: u64) {
        if page <= self.highest {
            return;
        }

        if self.pending_gap && page > self.highest + 1 {
            self.markers.push(PageMarker::Gap);
        }

        self.pending_gap = false;
        self.markers.push(PageMarker::Page(page));
        self.highest = page;
    }

    fn gap(&mut self) {
        self.pending_gap = true;
    }

    fn finish(mut self, total: u64) -> Vec<PageMarker> {
        if self.pending_gap && self.highest < total {
            self.markers.push(PageMarker::Gap);
        }

        self.markers
    }
}

/// Compute the page list for `current` out of `total` pages
///
/// Returns an empty list when `total <= 0` or `current` lies outside
/// `[1, total]`. Out-of-range pages are not clamped; callers that want
/// clamping must do it before calling.
pub fn compute(current: i64, total: i64, config: &PaginationConfig) -> Vec<PageMarker> {
    if total <= 0 || current < 1 || current > total {
        return Vec::new();
    }

    // Both are positive past the guard above
    let current = current as u64;
    let total = total as u64;

    if total <= u64::from(config.max_visible) {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let first = u64::from(config.first).min(total);
    let last = u64::from(config.last).min(total);
    let around = u64::from(config.around);
    let tail_start = total - last;

    let mut list = MarkerList::default();

    for page in 1..=first {
        list.page(page);
    }

    let window_start = (first + 1).max(current.saturating_sub(around));
    let window_end = tail_start.min(current.saturating_add(around));

    if window_start > first + 1 {
        list.gap();
    }

    for page in window_start..=window_end {
        if page > first && page <= tail_start {
            list.page(page);
        }
    }

    if window_end < tail_start {
        list.gap();
    }

    for page in (first + 1).max(tail_start + 1)..=total {
        list.page(page);
    }

    list.finish(total)
}

/// Compute the page list with the default configuration
pub fn page_numbers(current: i64, total: i64) -> Vec<PageMarker> {
    compute(current, total, &PaginationConfig::default())
}

/// Render markers as a single space-separated line
pub fn render_line(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
