//! linechart: render-agnostic line chart core.
//!
//! This crate turns raw numeric series data into normalized,
//! pixel-positioned geometry for an external drawing backend: it derives a
//! nice axis scale and tick layout from raw value ranges, converts series
//! values into percent-of-scale and pixel coordinates, and composes both
//! with a label axis into a renderable chart definition.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{AxisSource, ChartDefinition, LineChart};
pub use error::{ChartError, ChartResult};
