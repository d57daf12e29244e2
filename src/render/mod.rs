use anyhow::Result;
use std::fmt;

use crate::workflows::seasons::SeasonReport;
use crate::workflows::weapons::WeaponReport;
use crate::workflows::Outcome;

pub mod chart;
pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Seasons,
    Weapons,
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pipeline::Seasons => f.write_str("seasons"),
            Pipeline::Weapons => f.write_str("weapons"),
        }
    }
}

/// Owns the output handle the charts and table are written to.
pub trait Renderer {
    fn render_seasons(&mut self, report: &SeasonReport) -> Result<()>;

    fn render_weapons(&mut self, report: &WeaponReport) -> Result<()>;

    fn render_failure(&mut self, pipeline: Pipeline, error: &anyhow::Error) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

pub fn render(renderer: &mut dyn Renderer, outcome: &Outcome) -> Result<()> {
    match &outcome.seasons {
        Ok(report) => renderer.render_seasons(report)?,
        Err(e) => renderer.render_failure(Pipeline::Seasons, e)?,
    }
    match &outcome.weapons {
        Ok(report) => renderer.render_weapons(report)?,
        Err(e) => renderer.render_failure(Pipeline::Weapons, e)?,
    }
    renderer.finish()
}
