use anyhow::Result;

use crate::domain::seasons::LabelMode;
use crate::infra::stapi::StapiClient;

pub mod seasons;
pub mod weapons;

/// Outcome of one run; each pipeline fails on its own.
#[derive(Debug)]
pub struct Outcome {
    pub seasons: Result<seasons::SeasonReport>,
    pub weapons: Result<weapons::WeaponReport>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.seasons.is_ok() && self.weapons.is_ok()
    }
}

pub async fn run_all(client: &StapiClient, label_mode: LabelMode) -> Outcome {
    let (seasons, weapons) = tokio::join!(
        seasons::run(client, label_mode),
        weapons::run(client)
    );
    Outcome { seasons, weapons }
}
