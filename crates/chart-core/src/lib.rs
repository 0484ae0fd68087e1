// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; glucose chart composition and rendering.

pub mod annotations;
pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod grid;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod series;
pub mod store;
pub mod text;
pub mod theme;
pub mod treatment;
pub mod types;
pub mod units;
pub mod view;

pub use chart::{ChartPainter, ComposedChart, RenderedChart};
pub use config::{ChartConfig, ValueBounds};
pub use error::ChartError;
pub use raster::ChartImage;
pub use scale::CoordinateMapper;
pub use scene::{Layer, Primitive, Scene};
pub use store::TreatmentStore;
pub use theme::Theme;
pub use treatment::{Treatment, TreatmentKind};
pub use types::{DaySeries, Reading};
pub use units::DisplayUnits;
pub use view::ViewState;
