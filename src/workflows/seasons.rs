use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::seasons::{group_seasons, LabelMode, SeasonGrouping};
use crate::infra::stapi::StapiClient;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SeasonReport {
    pub series_fetched: usize,
    pub seasons_fetched: usize,
    pub grouping: SeasonGrouping,
}

pub async fn run(client: &StapiClient, label_mode: LabelMode) -> Result<SeasonReport> {
    let (series, seasons) = tokio::try_join!(
        async { client.fetch_series().await.context("fetch series") },
        async { client.fetch_seasons().await.context("fetch seasons") },
    )?;
    tracing::info!(series = series.len(), seasons = seasons.len(), "season data loaded");

    let mut grouping = group_seasons(&seasons, &series, label_mode);
    grouping.sort_by_start_date();

    Ok(SeasonReport {
        series_fetched: series.len(),
        seasons_fetched: seasons.len(),
        grouping,
    })
}
