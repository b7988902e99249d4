//! Imagery querying and water metrics
//!
//! The service contract, its hosted HTTP implementation, the metric
//! engine that orchestrates it, and map layer descriptions.

pub mod client;
pub mod filter;
pub mod layers;
pub mod metric;
pub mod service;

pub use client::HostedImageryClient;
pub use filter::{CollectionQuery, SarFilter};
pub use layers::{LayerSource, MapLayerSpec, VisParams};
pub use metric::{MetricEngine, WaterMetric, DEFAULT_SCALE_M, DEFAULT_THRESHOLD_DB};
pub use service::{ImageCollection, ImageryService};
