//! Interactive path recorder
//!
//! Captures a pointer-drawn future price path and values every recorded
//! sample against the selected option contract. The recorder is an explicit
//! state machine with two modes:
//!
//! - **Idle**: waiting for a pointer-down inside the drawable future region
//!   (to the right of the current-price line). Pointer-downs anywhere else
//!   are ignored.
//! - **Drawing**: pointer held down. Each move that travels at least the
//!   configured minimum distance in either screen axis records one
//!   [`PricePoint`] and pushes exactly one valued [`GridCell`] onto the decay
//!   trail. Pointer-up or pointer-leave ends the draw and reports the
//!   completed path upward.
//!
//! All methods run synchronously on the caller's thread; valuation is a
//! closed-form O(1) call per sample, so nothing here blocks or suspends.
//! The decay animation is driven separately through [`PathRecorder::tick`],
//! which may interleave freely with pointer events.

use anyhow::Result;

use crate::chart::config::ChartConfig;
use crate::chart::geometry::ChartGeometry;
use crate::chart::trail::DecayTrail;
use crate::chart::types::{GridCell, PricePoint, RecorderMode};
use crate::engine::pnl::{value_point, PointValuation, ValuationParams};
use crate::market::chain::OptionContract;

/// State machine recording drawn price paths and their valuations.
#[derive(Debug, Clone)]
pub struct PathRecorder {
    mode: RecorderMode,
    path: Vec<PricePoint>,
    trail: DecayTrail,
    geometry: ChartGeometry,
    min_sample_px: f64,
    contract: Option<OptionContract>,
    params: ValuationParams,
}

impl PathRecorder {
    /// Build a recorder for a chart centered on the given spot price.
    pub fn new(config: &ChartConfig, spot: f64) -> Result<Self> {
        let geometry = ChartGeometry::from_config(config, spot)?;
        Ok(Self {
            mode: RecorderMode::Idle,
            path: Vec::new(),
            trail: DecayTrail::new(config.fade_decrement),
            geometry,
            min_sample_px: config.min_sample_px,
            contract: None,
            params: ValuationParams::default(),
        })
    }

    /// Override the valuation parameters held constant across paths.
    pub fn set_valuation_params(&mut self, params: ValuationParams) {
        self.params = params;
    }

    /// Select the contract drawn paths are valued against.
    ///
    /// Recorded points and cells are functions of the contract at creation
    /// time and are never revalued; changing the selection clears both
    /// collections instead.
    pub fn select_contract(&mut self, contract: Option<OptionContract>) {
        self.contract = contract;
        self.path.clear();
        self.trail.clear();
        self.mode = RecorderMode::Idle;
    }

    /// Pointer-down. Starts a draw only inside the chart's future region;
    /// returns whether the transition happened. Starting a draw discards the
    /// previous path and trail.
    pub fn begin(&mut self, x: f64, y: f64) -> bool {
        if self.mode != RecorderMode::Idle {
            return false;
        }
        if !self.geometry.contains(x, y) || !self.geometry.in_future_region(x) {
            return false;
        }

        self.path.clear();
        self.trail.clear();
        self.mode = RecorderMode::Drawing;
        self.record(x, y);
        true
    }

    /// Pointer-move. Records a sample when drawing, inside the chart, and at
    /// least `min_sample_px` away from the last recorded point in either
    /// axis; returns whether a sample was recorded.
    pub fn extend(&mut self, x: f64, y: f64) -> bool {
        if self.mode != RecorderMode::Drawing {
            return false;
        }
        if !self.geometry.contains(x, y) {
            return false;
        }
        if let Some(last) = self.path.last() {
            let dx = (x - last.x).abs();
            let dy = (y - last.y).abs();
            if dx < self.min_sample_px && dy < self.min_sample_px {
                return false;
            }
        }

        self.record(x, y);
        true
    }

    /// Pointer-up or pointer-leave. Ends the draw and returns the completed
    /// ordered path. A no-op returning the current path when already idle.
    pub fn end(&mut self) -> Vec<PricePoint> {
        self.mode = RecorderMode::Idle;
        self.path.clone()
    }

    /// Explicit clear. Atomically empties the path and the decay trail from
    /// any state and returns the (empty) path for upward notification.
    pub fn clear(&mut self) -> Vec<PricePoint> {
        self.path.clear();
        self.trail.clear();
        self.mode = RecorderMode::Idle;
        self.path.clone()
    }

    /// One decay step for the trail. Independent of pointer state; call from
    /// the frame clock while the chart is mounted.
    pub fn tick(&mut self) {
        self.trail.tick();
    }

    /// Pure valuation query at an arbitrary `(price, day)` point using the
    /// currently selected contract. Zero-valued with no selection.
    pub fn value_at(&self, price: f64, days_from_now: f64) -> PointValuation {
        value_point(self.contract.as_ref(), price, days_from_now, &self.params)
    }

    pub fn mode(&self) -> RecorderMode {
        self.mode
    }

    pub fn path(&self) -> &[PricePoint] {
        &self.path
    }

    pub fn cells(&self) -> &[GridCell] {
        self.trail.cells()
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn contract(&self) -> Option<&OptionContract> {
        self.contract.as_ref()
    }

    // Append one point and its valued grid cell. Exactly one valuation call
    // per recorded sample.
    fn record(&mut self, x: f64, y: f64) {
        let price = self.geometry.price_at_y(y);
        let day_offset = self.geometry.day_at_x(x);

        self.path.push(PricePoint {
            x,
            y,
            price,
            day_offset,
        });

        let valuation = self.value_at(price, day_offset);
        self.trail.push(GridCell {
            x,
            y,
            price,
            day_offset,
            value: valuation.value,
            pnl: valuation.pnl,
            opacity: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_recorder() -> PathRecorder {
        // 800x400 chart on a $200 underlying; future region starts at x=320.
        PathRecorder::new(&ChartConfig::default(), 200.0).unwrap()
    }

    #[test]
    fn test_begin_only_in_future_region() {
        let mut recorder = test_recorder();

        assert!(!recorder.begin(100.0, 200.0)); // history region
        assert_eq!(recorder.mode(), RecorderMode::Idle);
        assert!(recorder.path().is_empty());

        assert!(recorder.begin(400.0, 200.0));
        assert_eq!(recorder.mode(), RecorderMode::Drawing);
        assert_eq!(recorder.path().len(), 1);
        assert_eq!(recorder.cells().len(), 1);
    }

    #[test]
    fn test_begin_rejected_outside_chart() {
        let mut recorder = test_recorder();
        assert!(!recorder.begin(400.0, 500.0)); // below the chart box
        assert!(!recorder.begin(900.0, 200.0));
        assert_eq!(recorder.mode(), RecorderMode::Idle);
    }

    #[test]
    fn test_extend_throttles_small_moves() {
        let mut recorder = test_recorder();
        recorder.begin(400.0, 200.0);

        // Under 5px in both axes: throttled.
        assert!(!recorder.extend(404.0, 203.9));
        assert_eq!(recorder.path().len(), 1);

        // 5px in one axis is enough.
        assert!(recorder.extend(405.0, 201.0));
        assert_eq!(recorder.path().len(), 2);

        assert!(recorder.extend(406.0, 206.0));
        assert_eq!(recorder.path().len(), 3);
    }

    #[test]
    fn test_end_reports_ordered_path() {
        let mut recorder = test_recorder();
        recorder.begin(400.0, 200.0);
        recorder.extend(410.0, 190.0);
        recorder.extend(420.0, 180.0);

        let path = recorder.end();
        assert_eq!(recorder.mode(), RecorderMode::Idle);
        assert_eq!(path.len(), 3);
        assert!(path.windows(2).all(|w| w[0].x < w[1].x));

        // Moves after pointer-up are ignored.
        assert!(!recorder.extend(440.0, 170.0));
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut recorder = test_recorder();
        recorder.begin(400.0, 200.0);
        recorder.extend(420.0, 180.0);

        let reported = recorder.clear();
        assert!(reported.is_empty());
        assert!(recorder.path().is_empty());
        assert!(recorder.cells().is_empty());
        assert_eq!(recorder.mode(), RecorderMode::Idle);
    }

    #[test]
    fn test_contract_change_clears_state() {
        let mut recorder = test_recorder();
        recorder.begin(400.0, 200.0);
        recorder.extend(420.0, 180.0);

        recorder.select_contract(None);
        assert!(recorder.path().is_empty());
        assert!(recorder.cells().is_empty());
        assert_eq!(recorder.mode(), RecorderMode::Idle);
    }

    #[test]
    fn test_tick_interleaves_with_drawing() {
        let mut recorder = test_recorder();
        recorder.begin(400.0, 200.0);
        let full = recorder.cells()[0].opacity;

        recorder.tick();
        assert!(recorder.cells()[0].opacity < full);

        // A decay tick between two moves does not disturb recording.
        assert!(recorder.extend(420.0, 180.0));
        assert_eq!(recorder.cells().len(), 2);
        assert!((recorder.cells()[1].opacity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_contract_yields_zero_valuation() {
        let recorder = test_recorder();
        let v = recorder.value_at(215.0, 10.0);
        assert_eq!(v.value, 0.0);
        assert_eq!(v.pnl, 0.0);
    }
}
