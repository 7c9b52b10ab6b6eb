//! Access to the pre-built JSON datasets.
//!
//! The offline build pipeline (a separate repository) scrapes OpenStreetMap,
//! Wikidata and friends into flat JSON arrays. This module reads them,
//! tolerates malformed individual records, and hands out immutable `Arc`
//! snapshots through a moka TTL cache so concurrent requests never touch
//! the filesystem twice in a row.

use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::trip::HubMode;
use crate::models::{Hub, Place};
use async_trait::async_trait;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Seam for dataset access. The engine never reads files itself; handlers
/// fetch a snapshot here and pass it down. Tests swap in a temp directory.
#[async_trait]
pub trait PlaceSource: Send + Sync {
    async fn places(&self) -> Result<Arc<Vec<Place>>>;
    async fn hubs(&self, mode: HubMode) -> Result<Arc<Vec<Hub>>>;
}

/// Dataset file backing each hub mode.
pub fn hub_dataset_file(mode: HubMode) -> &'static str {
    match mode {
        HubMode::Plane => AIRPORTS_DATASET,
        HubMode::Train => TRAIN_STATIONS_DATASET,
        HubMode::Bus => BUS_TERMINALS_DATASET,
    }
}

/// File-backed dataset store with per-file snapshot caching.
pub struct FileDatasetStore {
    data_dir: PathBuf,
    places_cache: Cache<String, Arc<Vec<Place>>>,
    hubs_cache: Cache<String, Arc<Vec<Hub>>>,
}

impl FileDatasetStore {
    pub fn new(data_dir: PathBuf, ttl_seconds: u64) -> Self {
        let places_cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(DATASET_CACHE_MAX_ENTRIES)
            .build();
        let hubs_cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(DATASET_CACHE_MAX_ENTRIES)
            .build();

        FileDatasetStore {
            data_dir,
            places_cache,
            hubs_cache,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Read one dataset file as a JSON array, deserializing record by
    /// record. A malformed record is dropped with a log line; only a
    /// missing required file or a non-array payload fails the call.
    async fn read_records<T: DeserializeOwned>(
        &self,
        file: &str,
        required: bool,
    ) -> Result<Option<Vec<T>>> {
        let path = self.data_dir.join(file);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!(file = file, "Optional dataset absent, skipping");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::Dataset {
                    message: format!("cannot read dataset '{}': {}", file, e),
                    hint: format!("expected dataset file at {}", path.display()),
                });
            }
        };

        let values: Vec<serde_json::Value> =
            serde_json::from_slice(&raw).map_err(|e| AppError::Dataset {
                message: format!("dataset '{}' is not a JSON array: {}", file, e),
                hint: format!("regenerate the dataset at {}", path.display()),
            })?;

        let total = values.len();
        let records: Vec<T> = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(file = file, error = %e, "Skipping malformed dataset record");
                    None
                }
            })
            .collect();

        if records.len() < total {
            tracing::warn!(
                file = file,
                dropped = total - records.len(),
                kept = records.len(),
                "Dropped malformed dataset records"
            );
        }

        Ok(Some(records))
    }
}

#[async_trait]
impl PlaceSource for FileDatasetStore {
    async fn places(&self) -> Result<Arc<Vec<Place>>> {
        if let Some(cached) = self.places_cache.get(PLACES_DATASET).await {
            return Ok(cached);
        }

        let mut records: Vec<Place> = self
            .read_records(PLACES_DATASET, true)
            .await?
            .unwrap_or_default();
        for extra in EXTRA_PLACE_DATASETS {
            if let Some(more) = self.read_records::<Place>(extra, false).await? {
                tracing::debug!(file = extra, count = more.len(), "Merged supplementary dataset");
                records.extend(more);
            }
        }

        tracing::info!(count = records.len(), "Loaded place pool");
        let snapshot = Arc::new(records);
        self.places_cache
            .insert(PLACES_DATASET.to_string(), snapshot.clone())
            .await;
        Ok(snapshot)
    }

    async fn hubs(&self, mode: HubMode) -> Result<Arc<Vec<Hub>>> {
        let file = hub_dataset_file(mode);
        if let Some(cached) = self.hubs_cache.get(file).await {
            return Ok(cached);
        }

        let records: Vec<Hub> = self.read_records(file, true).await?.unwrap_or_default();
        tracing::info!(file = file, count = records.len(), "Loaded hub pool");
        let snapshot = Arc::new(records);
        self.hubs_cache
            .insert(file.to_string(), snapshot.clone())
            .await;
        Ok(snapshot)
    }
}
