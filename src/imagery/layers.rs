//! Map layer descriptions
//!
//! Renderable layer specs handed to an external map surface. Drawing
//! is out of scope here; these are pure data describing what to put on
//! the map and how to style it.

use serde::Serialize;

use crate::catalog::{GeometryRef, RegionRecord};

/// Historical surface-water occurrence asset
pub const SURFACE_WATER_ASSET: &str = "JRC/GSW1_4/GlobalSurfaceWater";

/// Band of the occurrence asset showing water frequency
pub const SURFACE_WATER_BAND: &str = "occurrence";

/// Visualization parameters for a layer
#[derive(Debug, Clone, Default, Serialize)]
pub struct VisParams {
    /// Bands to render, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<Vec<String>>,
    /// Display range minimum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Display range maximum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Gamma correction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    /// Color palette
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}

/// What a layer is rendered from
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerSource {
    /// The region boundary itself
    RegionBoundary { geometry: GeometryRef },
    /// Mean composite of a filtered collection, clipped server-side
    MeanComposite { collection_id: String },
    /// A static asset image clipped to the region
    AssetImage {
        asset: String,
        band: String,
        clip_to: GeometryRef,
    },
}

/// One renderable map layer
#[derive(Debug, Clone, Serialize)]
pub struct MapLayerSpec {
    /// Display name shown in the layer control
    pub name: String,
    /// What to render
    pub source: LayerSource,
    /// How to style it
    pub vis: VisParams,
}

impl MapLayerSpec {
    /// Outline layer for the selected region
    pub fn region_boundary(region: &RegionRecord) -> Self {
        MapLayerSpec {
            name: format!("{} boundary", region.name),
            source: LayerSource::RegionBoundary {
                geometry: region.geometry.clone(),
            },
            vis: VisParams::default(),
        }
    }

    /// SAR mean composite styled for backscatter display
    pub fn sar_mean(collection_id: &str) -> Self {
        MapLayerSpec {
            name: "SAR mean composite".to_string(),
            source: LayerSource::MeanComposite {
                collection_id: collection_id.to_string(),
            },
            vis: VisParams {
                bands: Some(vec!["VV".to_string()]),
                min: Some(-20.0),
                max: Some(0.0),
                gamma: Some(1.4),
                palette: None,
            },
        }
    }

    /// Historical surface-water occurrence, clipped to the region
    pub fn surface_water_occurrence(region: &RegionRecord) -> Self {
        MapLayerSpec {
            name: "Historical surface water".to_string(),
            source: LayerSource::AssetImage {
                asset: SURFACE_WATER_ASSET.to_string(),
                band: SURFACE_WATER_BAND.to_string(),
                clip_to: region.geometry.clone(),
            },
            vis: VisParams {
                bands: None,
                min: None,
                max: None,
                gamma: None,
                palette: Some(vec!["blue".to_string()]),
            },
        }
    }
}
