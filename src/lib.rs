pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod imagery;
pub mod pipeline;
pub mod text;
pub mod utils;

pub use crate::api::FloodKit;

pub use catalog::{GeometryRef, RegionRecord, RegionTable};
pub use config::FloodkitConfig;
pub use imagery::{ImageCollection, ImageryService, MetricEngine, SarFilter, WaterMetric};
pub use pipeline::{Comparison, FloodError, FloodResult, QueryReport, QueryRequest, Trend, YearlyArea};
