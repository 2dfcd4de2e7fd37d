use std::collections::HashMap;

use crate::model::Section;

/// Visibility ratios at which a region re-reports its state.
pub const THRESHOLDS: [f64; 3] = [0.20, 0.35, 0.55];

/// Fraction of the viewport ignored at the top when measuring visibility.
pub const MARGIN_TOP: f64 = 0.20;
/// Fraction of the viewport ignored at the bottom. Together with the top
/// margin this biases the active section toward the upper screen area.
pub const MARGIN_BOTTOM: f64 = 0.55;

/// The row range a section occupies in the rendered page (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpan {
    pub section: Section,
    pub start: usize,
    pub end: usize,
}

impl RegionSpan {
    pub fn rows(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// The visible row window of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row.
    pub top: usize,
    /// Number of visible rows.
    pub height: usize,
}

impl Viewport {
    /// Row window after applying the top/bottom margins, as fractional
    /// row positions (start inclusive, end exclusive).
    fn effective(&self) -> (f64, f64) {
        let top = self.top as f64 + self.height as f64 * MARGIN_TOP;
        let bottom = (self.top + self.height) as f64 - self.height as f64 * MARGIN_BOTTOM;
        (top, bottom.max(top))
    }
}

/// One region's report: its visibility ratio and whether any part of it
/// overlaps the effective viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub section: Section,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Fraction of the region's rows inside the effective viewport.
pub fn visibility_ratio(span: &RegionSpan, viewport: &Viewport) -> f64 {
    let rows = span.rows();
    if rows == 0 {
        return 0.0;
    }
    let (view_top, view_bottom) = viewport.effective();
    let overlap_top = (span.start as f64).max(view_top);
    let overlap_bottom = (span.end as f64).min(view_bottom);
    let overlap = (overlap_bottom - overlap_top).max(0.0);
    (overlap / rows as f64).clamp(0.0, 1.0)
}

/// Which threshold band a ratio falls in (count of thresholds at or
/// below it). Used to suppress reports that stay within one band.
fn threshold_band(ratio: f64) -> u8 {
    THRESHOLDS.iter().filter(|t| ratio >= **t).count() as u8
}

/// Watches a set of region spans and emits a batch of events whenever a
/// region crosses a visibility threshold or enters/leaves the viewport.
///
/// One observation per attached region; `detach` drops them all, after
/// which `observe` reports nothing.
#[derive(Debug, Default)]
pub struct SectionObserver {
    /// Last reported (band, intersecting) per attached region.
    observed: HashMap<Section, (u8, bool)>,
    attached: Vec<Section>,
}

impl SectionObserver {
    /// Attach one observation per region. Zero-height regions are
    /// skipped; they do not exist yet as far as tracking is concerned.
    pub fn attach(spans: &[RegionSpan]) -> Self {
        let attached: Vec<Section> = spans
            .iter()
            .filter(|s| s.rows() > 0)
            .map(|s| s.section)
            .collect();
        SectionObserver {
            observed: HashMap::new(),
            attached,
        }
    }

    /// Measure all attached regions against the viewport and return the
    /// batch of regions whose report changed. The first observation of a
    /// region always reports.
    pub fn observe(&mut self, spans: &[RegionSpan], viewport: &Viewport) -> Vec<VisibilityEvent> {
        let mut batch = Vec::new();
        for span in spans {
            if !self.attached.contains(&span.section) {
                continue;
            }
            let ratio = visibility_ratio(span, viewport);
            let intersecting = ratio > 0.0;
            let report = (threshold_band(ratio), intersecting);
            if self.observed.get(&span.section) != Some(&report) {
                self.observed.insert(span.section, report);
                batch.push(VisibilityEvent {
                    section: span.section,
                    ratio,
                    intersecting,
                });
            }
        }
        batch
    }

    /// Drop all observations.
    pub fn detach(&mut self) {
        self.attached.clear();
        self.observed.clear();
    }

    pub fn is_attached(&self, section: Section) -> bool {
        self.attached.contains(&section)
    }
}

/// Reduces visibility batches to the single most-visible section.
#[derive(Debug)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    pub fn new(initial: Section) -> Self {
        SectionTracker { active: initial }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Apply one event batch: the intersecting region with the highest
    /// ratio becomes active, ties going to the earliest event in the
    /// batch. A batch with no intersecting region leaves the previous
    /// active section in place.
    pub fn apply_batch(&mut self, batch: &[VisibilityEvent]) {
        let mut best: Option<&VisibilityEvent> = None;
        for event in batch.iter().filter(|e| e.intersecting) {
            // Strict comparison keeps the first event on equal ratios.
            if best.is_none_or(|b| event.ratio > b.ratio) {
                best = Some(event);
            }
        }
        if let Some(event) = best {
            self.active = event.section;
        }
    }
}
