use gridwise::advisory::scoring::ScoringEngine;
use gridwise::config::DataConfig;
use gridwise::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Applies command-line overrides on top of the configured data sources.
pub(crate) fn data_config(
    mut data: DataConfig,
    catalog: Option<PathBuf>,
    grid_areas: Option<PathBuf>,
) -> DataConfig {
    if catalog.is_some() {
        data.catalog_path = catalog;
    }
    if grid_areas.is_some() {
        data.grid_areas_path = grid_areas;
    }
    data
}

/// Loads and validates reference data, failing fast on configuration errors.
pub(crate) fn build_engine(data: &DataConfig) -> Result<ScoringEngine, AppError> {
    let catalog = data.load_catalog()?;
    let grid_areas = data.load_grid_areas()?;

    info!(
        actions = catalog.len(),
        grid_constrained_areas = grid_areas.len(),
        catalog_source = %source_label(data.catalog_path.as_ref()),
        grid_source = %source_label(data.grid_areas_path.as_ref()),
        "reference data loaded"
    );

    Ok(ScoringEngine::new(catalog, grid_areas))
}

fn source_label(path: Option<&PathBuf>) -> String {
    path.map(|path| path.display().to_string())
        .unwrap_or_else(|| "bundled".to_string())
}
