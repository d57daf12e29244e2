use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::weapons::{aggregate_weapons, WeaponAggregate};
use crate::infra::stapi::StapiClient;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WeaponReport {
    pub aggregate: WeaponAggregate,
}

pub async fn run(client: &StapiClient) -> Result<WeaponReport> {
    let weapons = client.fetch_weapons().await.context("fetch weapons")?;
    let aggregate = aggregate_weapons(&weapons);
    tracing::info!(
        weapons = aggregate.total,
        multiple_technology = aggregate.multiple_technology,
        "weapon data aggregated"
    );
    Ok(WeaponReport { aggregate })
}
