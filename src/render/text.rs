use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;

use super::chart::series_table;
use super::{Pipeline, Renderer};
use crate::workflows::seasons::SeasonReport;
use crate::workflows::weapons::WeaponReport;

/// Plain terminal report: series table, episodes per season, weapon tallies.
pub struct TextRenderer<W: Write> {
    out: W,
    today: NaiveDate,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, today: NaiveDate) -> Self {
        Self { out, today }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn cell(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_seasons(&mut self, report: &SeasonReport) -> Result<()> {
        let grouping = &report.grouping;
        let rows = series_table(grouping);
        let width = rows.iter().map(|r| r.title.len()).max().unwrap_or(0).max(5);

        writeln!(
            self.out,
            "Series ({} series, {} seasons)",
            report.series_fetched, report.seasons_fetched
        )?;
        writeln!(self.out, "{:<width$}  {:<6}  {:<10}  {}", "Title", "Abbr", "Start", "Run")?;
        for (row, group) in rows.iter().zip(&grouping.groups) {
            let run = match group.timeline() {
                Some((_, Some(end))) => format!("until {end}"),
                Some((start, None)) => {
                    format!("ongoing ({} days)", (self.today - start).num_days())
                }
                None => "-".to_string(),
            };
            writeln!(
                self.out,
                "{:<width$}  {:<6}  {:<10}  {}",
                row.title,
                cell(row.abbreviation.as_deref()),
                cell(row.start),
                run
            )?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "Episodes per season (max {} seasons)", grouping.max_seasons)?;
        for group in &grouping.groups {
            let counts: Vec<String> = group.episodes.iter().map(|n| cell(*n)).collect();
            writeln!(self.out, "{:<width$}  {}", group.label, counts.join(" "))?;
        }
        for orphan in &grouping.orphaned {
            writeln!(
                self.out,
                "skipped season {} of {}: {}",
                cell(orphan.season_number),
                orphan.series_uid,
                orphan.reason
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn render_weapons(&mut self, report: &WeaponReport) -> Result<()> {
        let aggregate = &report.aggregate;
        writeln!(self.out, "Weapons ({} total)", aggregate.total)?;
        for (tech, count) in aggregate.technologies() {
            writeln!(self.out, "  {:<20} {count}", tech.key())?;
        }
        writeln!(self.out, "  {:<20} {}", "multipleTech", aggregate.multiple_technology)?;
        writeln!(self.out, "  {:<20} {}", "noTech", aggregate.no_technology)?;
        writeln!(self.out, "  {:<20} {}", "handHeld", aggregate.hand_held)?;
        writeln!(self.out, "  {:<20} {}", "notHandHeld", aggregate.not_hand_held)?;
        writeln!(self.out, "  {:<20} {}", "alternateReality", aggregate.alternate_reality)?;
        writeln!(self.out, "  {:<20} {}", "mirror", aggregate.mirror)?;
        Ok(())
    }

    fn render_failure(&mut self, pipeline: Pipeline, error: &anyhow::Error) -> Result<()> {
        writeln!(self.out, "{pipeline} unavailable: {error:#}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
