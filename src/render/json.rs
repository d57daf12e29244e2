use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use std::io::Write;

use super::chart::{season_chart, series_table, timeline_chart, weapon_chart};
use super::{Pipeline, Renderer};
use crate::workflows::seasons::SeasonReport;
use crate::workflows::weapons::WeaponReport;

/// Collects both pipelines into one JSON document, written on `finish`.
pub struct JsonRenderer<W: Write> {
    out: W,
    today: NaiveDate,
    document: Map<String, Value>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W, today: NaiveDate) -> Self {
        Self {
            out,
            today,
            document: Map::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render_seasons(&mut self, report: &SeasonReport) -> Result<()> {
        let grouping = &report.grouping;
        self.document.insert(
            "seasons".to_string(),
            json!({
                "seriesFetched": report.series_fetched,
                "seasonsFetched": report.seasons_fetched,
                "maxSeasons": grouping.max_seasons,
                "chart": season_chart(grouping),
                "timeline": timeline_chart(grouping, self.today),
                "table": series_table(grouping),
                "orphaned": grouping.orphaned,
            }),
        );
        Ok(())
    }

    fn render_weapons(&mut self, report: &WeaponReport) -> Result<()> {
        self.document.insert(
            "weapons".to_string(),
            json!({
                "aggregate": report.aggregate,
                "chart": weapon_chart(&report.aggregate),
            }),
        );
        Ok(())
    }

    fn render_failure(&mut self, pipeline: Pipeline, error: &anyhow::Error) -> Result<()> {
        self.document
            .insert(pipeline.to_string(), json!({ "error": format!("{error:#}") }));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = Value::Object(std::mem::take(&mut self.document));
        serde_json::to_writer_pretty(&mut self.out, &document).context("write json report")?;
        writeln!(self.out).context("write json report")?;
        self.out.flush().context("flush json report")
    }
}
