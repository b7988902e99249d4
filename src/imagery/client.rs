//! Hosted imagery service client
//!
//! Blocking HTTP implementation of the service contract against a
//! configured analytics endpoint. The bearer token comes from a
//! credential file referenced in the configuration; requests carry
//! JSON bodies and failures surface to the caller untouched, with no
//! retry or backoff.

use chrono::NaiveDate;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::catalog::GeometryRef;
use crate::config::ServiceConfig;
use crate::imagery::filter::CollectionQuery;
use crate::imagery::service::{ImageCollection, ImageryService};
use crate::pipeline::errors::{FloodError, FloodResult};

/// Client for the hosted imagery/analytics endpoint
pub struct HostedImageryClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    token: String,
}

#[derive(Serialize)]
struct FilterRequest<'a> {
    collection: &'a str,
    geometry: &'a str,
    start: NaiveDate,
    end: NaiveDate,
    polarization: &'a str,
    instrument_mode: &'a str,
}

#[derive(Serialize)]
struct RefineRequest<'a> {
    id: &'a str,
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Serialize)]
struct AreaRequest<'a> {
    id: &'a str,
    geometry: &'a str,
    threshold_db: f64,
    scale_m: f64,
}

#[derive(Deserialize)]
struct CollectionReply {
    id: String,
    image_count: u32,
}

#[derive(Deserialize)]
struct AreaReply {
    /// Classified area in square meters; null when nothing aggregated
    area_m2: Option<f64>,
}

impl HostedImageryClient {
    /// Build a client from the service configuration
    ///
    /// Reads the bearer token from the configured credential file.
    ///
    /// # Arguments
    /// * `config` - Service connection settings
    ///
    /// # Returns
    /// A ready client, or a configuration error when the endpoint or
    /// credential reference is missing
    pub fn from_config(config: &ServiceConfig) -> FloodResult<Self> {
        let endpoint = config.endpoint.trim().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(FloodError::ConfigError(
                "service.endpoint is not set".to_string(),
            ));
        }

        if config.credential_file.trim().is_empty() {
            return Err(FloodError::ConfigError(
                "service.credential_file is not set".to_string(),
            ));
        }

        let token = std::fs::read_to_string(config.credential_file.trim())?
            .trim()
            .to_string();
        if token.is_empty() {
            return Err(FloodError::ConfigError(format!(
                "credential file '{}' is empty",
                config.credential_file.trim()
            )));
        }

        info!("Imagery service client ready for {}", endpoint);
        Ok(HostedImageryClient {
            http: reqwest::blocking::Client::new(),
            endpoint,
            token,
        })
    }

    /// POST a JSON body and decode a JSON reply
    fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> FloodResult<R> {
        let url = format!("{}/{}", self.endpoint, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FloodError::ServiceError(format!(
                "{} failed with status {}",
                path, status
            )));
        }

        Ok(response.json()?)
    }
}

impl ImageryService for HostedImageryClient {
    fn filter_collection(&self, query: &CollectionQuery) -> FloodResult<ImageCollection> {
        let reply: CollectionReply = self.post(
            "collections/filter",
            &FilterRequest {
                collection: &query.collection,
                geometry: query.geometry.as_str(),
                start: query.start,
                end: query.end,
                polarization: &query.filter.polarization,
                instrument_mode: &query.filter.instrument_mode,
            },
        )?;

        debug!(
            "Collection {} holds {} scenes for {}",
            reply.id, reply.image_count, query.geometry
        );
        Ok(ImageCollection {
            id: reply.id,
            image_count: reply.image_count,
        })
    }

    fn refine_dates(
        &self,
        collection: &ImageCollection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FloodResult<ImageCollection> {
        let reply: CollectionReply = self.post(
            "collections/refine",
            &RefineRequest {
                id: &collection.id,
                start,
                end,
            },
        )?;

        Ok(ImageCollection {
            id: reply.id,
            image_count: reply.image_count,
        })
    }

    fn mean_water_area(
        &self,
        collection: &ImageCollection,
        geometry: &GeometryRef,
        threshold_db: f64,
        scale_m: f64,
    ) -> FloodResult<Option<f64>> {
        // Nothing to composite; skip the round trip
        if collection.is_empty() {
            return Ok(None);
        }

        let reply: AreaReply = self.post(
            "collections/water-area",
            &AreaRequest {
                id: &collection.id,
                geometry: geometry.as_str(),
                threshold_db,
                scale_m,
            },
        )?;

        Ok(reply.area_m2)
    }
}
