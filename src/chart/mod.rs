//! Prediction chart state
//!
//! Everything the interactive prediction chart owns outside of rendering:
//! screen/market geometry, the pointer-driven path recorder state machine,
//! and the fading grid of valued cells. No UI framework types appear here;
//! an application feeds pointer coordinates and frame ticks in and reads
//! points and cells back out.

pub mod config;
pub mod geometry;
pub mod recorder;
pub mod trail;
pub mod types;

pub use config::ChartConfig;
pub use geometry::ChartGeometry;
pub use recorder::PathRecorder;
pub use trail::DecayTrail;
pub use types::{GridCell, PricePoint, RecorderMode};
