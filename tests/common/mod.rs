#![allow(dead_code)]

//! Shared test fixtures
//!
//! An in-memory imagery service over synthetic per-pixel scene grids,
//! plus a small region table. The service follows the same contract as
//! the hosted client: half-open date windows, mean composites, and a
//! no-data aggregate for empty collections.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::NaiveDate;
use floodkit::catalog::{GeometryRef, RegionTable};
use floodkit::imagery::{CollectionQuery, ImageCollection, ImageryService};
use floodkit::pipeline::{FloodError, FloodResult};

/// One synthetic SAR scene: acquisition date plus a backscatter grid
pub struct Scene {
    pub date: NaiveDate,
    pub pixels: Vec<f64>,
}

struct Handle {
    geometry: String,
    indices: Vec<usize>,
}

/// In-memory imagery service over synthetic scenes
pub struct SyntheticImagery {
    scenes: HashMap<String, Vec<Scene>>,
    handles: RefCell<HashMap<String, Handle>>,
    counter: RefCell<u32>,
}

impl SyntheticImagery {
    pub fn new() -> Self {
        SyntheticImagery {
            scenes: HashMap::new(),
            handles: RefCell::new(HashMap::new()),
            counter: RefCell::new(0),
        }
    }

    /// Register a scene for a geometry reference
    pub fn with_scene(mut self, geometry: &str, date: NaiveDate, pixels: Vec<f64>) -> Self {
        self.scenes
            .entry(geometry.to_string())
            .or_default()
            .push(Scene { date, pixels });
        self
    }

    fn issue_handle(&self, geometry: &str, indices: Vec<usize>) -> ImageCollection {
        let mut counter = self.counter.borrow_mut();
        *counter += 1;
        let id = format!("coll-{}", counter);

        let image_count = indices.len() as u32;
        self.handles.borrow_mut().insert(
            id.clone(),
            Handle {
                geometry: geometry.to_string(),
                indices,
            },
        );

        ImageCollection { id, image_count }
    }

    fn handle_scenes(&self, id: &str) -> FloodResult<(String, Vec<usize>)> {
        let handles = self.handles.borrow();
        let handle = handles
            .get(id)
            .ok_or_else(|| FloodError::ServiceError(format!("unknown collection '{}'", id)))?;
        Ok((handle.geometry.clone(), handle.indices.clone()))
    }
}

impl ImageryService for SyntheticImagery {
    fn filter_collection(&self, query: &CollectionQuery) -> FloodResult<ImageCollection> {
        let scenes = self.scenes.get(query.geometry.as_str());
        let indices: Vec<usize> = scenes
            .map(|scenes| {
                scenes
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.date >= query.start && s.date < query.end)
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default();

        Ok(self.issue_handle(query.geometry.as_str(), indices))
    }

    fn refine_dates(
        &self,
        collection: &ImageCollection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FloodResult<ImageCollection> {
        let (geometry, indices) = self.handle_scenes(&collection.id)?;
        let scenes = self.scenes.get(&geometry);

        let refined: Vec<usize> = indices
            .into_iter()
            .filter(|&i| {
                scenes
                    .and_then(|s| s.get(i))
                    .map(|s| s.date >= start && s.date < end)
                    .unwrap_or(false)
            })
            .collect();

        Ok(self.issue_handle(&geometry, refined))
    }

    fn mean_water_area(
        &self,
        collection: &ImageCollection,
        _geometry: &GeometryRef,
        threshold_db: f64,
        scale_m: f64,
    ) -> FloodResult<Option<f64>> {
        let (geometry, indices) = self.handle_scenes(&collection.id)?;
        if indices.is_empty() {
            return Ok(None);
        }

        let scenes = match self.scenes.get(&geometry) {
            Some(s) => s,
            None => return Ok(None),
        };

        let width = scenes[indices[0]].pixels.len();
        let mut water_pixels = 0usize;

        for pixel in 0..width {
            let mut sum = 0.0;
            for &i in &indices {
                sum += scenes[i].pixels[pixel];
            }
            let mean = sum / indices.len() as f64;
            if mean < threshold_db {
                water_pixels += 1;
            }
        }

        Ok(Some(water_pixels as f64 * scale_m * scale_m))
    }
}

/// Convenience date constructor
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Small fixed region table used across tests
pub fn test_table() -> RegionTable {
    let csv = "ROI_Name,ROI_path\n\
               Osmansagar,assets/osmansagar\n\
               Hussansagar,assets/hussansagar\n\
               Karanja,assets/karanja\n";
    RegionTable::from_reader(csv.as_bytes(), "test").unwrap()
}

/// A grid made of a run of wet pixels followed by a run of dry pixels
pub fn grid(wet: usize, dry: usize, wet_db: f64, dry_db: f64) -> Vec<f64> {
    let mut pixels = vec![wet_db; wet];
    pixels.extend(vec![dry_db; dry]);
    pixels
}
