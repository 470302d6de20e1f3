/// A single sample recorded while drawing a predicted price path.
///
/// Screen coordinates are kept alongside the implied price and date so the
/// overlay can be redrawn without re-running the geometry mapping. A point is
/// a pure function of the chart geometry at the moment it was recorded; it is
/// never revalued when the selected contract changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Screen x coordinate in chart pixels
    pub x: f64,
    /// Screen y coordinate in chart pixels
    pub y: f64,
    /// Underlying price implied by the y coordinate
    pub price: f64,
    /// Implied date, expressed as days ahead of today
    pub day_offset: f64,
}

/// A valued cell on the prediction grid, fading out over time.
///
/// Cells are immutable after creation except for the opacity decay applied
/// by [`DecayTrail::tick`](crate::chart::trail::DecayTrail::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Screen x coordinate in chart pixels
    pub x: f64,
    /// Screen y coordinate in chart pixels
    pub y: f64,
    /// Underlying price implied by the y coordinate
    pub price: f64,
    /// Implied date, expressed as days ahead of today
    pub day_offset: f64,
    /// Hypothetical contract value at this cell
    pub value: f64,
    /// Profit/loss versus the premium paid
    pub pnl: f64,
    /// Render opacity in [0, 1]; strictly decreasing each tick
    pub opacity: f64,
}

/// Pointer-interaction state of the path recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecorderMode {
    /// No active draw; pointer-down in the future region starts one
    #[default]
    Idle,
    /// Pointer held down, samples being recorded
    Drawing,
}
