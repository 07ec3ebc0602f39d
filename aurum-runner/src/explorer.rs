//! Year explorer — per-year record tables with an externally owned cursor.
//!
//! The explorer holds the immutable year groups. Which year is on screen is
//! the consumer's state, kept in a `YearCursor` that only ever indexes into
//! the explorer's ascending year list.

use std::collections::BTreeMap;

use aurum_core::domain::PriceRecord;
use aurum_core::stats::group_by_year;

/// Records grouped by year, years ascending, records in file order.
#[derive(Debug, Clone, Default)]
pub struct YearExplorer {
    groups: BTreeMap<i32, Vec<PriceRecord>>,
    years: Vec<i32>,
}

impl YearExplorer {
    pub fn new(records: &[PriceRecord]) -> Self {
        let groups: BTreeMap<i32, Vec<PriceRecord>> = group_by_year(records)
            .into_iter()
            .map(|(year, recs)| (year, recs.into_iter().cloned().collect()))
            .collect();
        let years = groups.keys().copied().collect();
        Self { groups, years }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// A cursor on the first year.
    pub fn cursor(&self) -> YearCursor {
        YearCursor::new(self.years.len())
    }

    pub fn year_at(&self, cursor: &YearCursor) -> Option<i32> {
        self.years.get(cursor.index()).copied()
    }

    /// All records of a year; empty for a year with no data.
    pub fn records_for(&self, year: i32) -> &[PriceRecord] {
        self.groups.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First `n` records of the selected year.
    pub fn opening_records(&self, cursor: &YearCursor, n: usize) -> &[PriceRecord] {
        let recs = self.selected(cursor);
        &recs[..n.min(recs.len())]
    }

    /// Last `n` records of the selected year.
    pub fn closing_records(&self, cursor: &YearCursor, n: usize) -> &[PriceRecord] {
        let recs = self.selected(cursor);
        &recs[recs.len().saturating_sub(n)..]
    }

    fn selected(&self, cursor: &YearCursor) -> &[PriceRecord] {
        self.year_at(cursor)
            .map(|y| self.records_for(y))
            .unwrap_or(&[])
    }
}

/// Position in a year list, clamped to both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearCursor {
    index: usize,
    len: usize,
}

impl YearCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Step back one year. Returns false (and stays put) at the first year.
    pub fn step_back(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one year. Returns false (and stays put) at the last year.
    pub fn step_forward(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }
}
