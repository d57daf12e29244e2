use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::models::{Season, Series};

/// Highest season number given a slot; anything above is treated as bad data.
pub const MAX_SEASON_NUMBER: u32 = 100;

/// Which series field names a season group.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum LabelMode {
    #[default]
    Title,
    Abbreviation,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SeriesSeasonGroup {
    pub label: String,
    pub series_uid: String,
    pub title: String,
    pub abbreviation: Option<String>,
    /// Episode count per season, slot `n - 1` for season `n`. Unseen seasons stay `None`.
    pub episodes: Vec<Option<u32>>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SeriesSeasonGroup {
    fn new(series: &Series, label_mode: LabelMode) -> Self {
        let label = match label_mode {
            LabelMode::Title => series.title.clone(),
            LabelMode::Abbreviation => series
                .abbreviation
                .clone()
                .unwrap_or_else(|| series.title.clone()),
        };
        Self {
            label,
            series_uid: series.uid.clone(),
            title: series.title.clone(),
            abbreviation: series.abbreviation.clone(),
            episodes: Vec::new(),
            start: series.original_run_start_date,
            end: series.original_run_end_date,
        }
    }

    fn place(&mut self, season_number: u32, episodes: Option<u32>) {
        let slot = (season_number - 1) as usize;
        if self.episodes.len() <= slot {
            self.episodes.resize(slot + 1, None);
        }
        self.episodes[slot] = episodes;
    }

    pub fn season_count(&self) -> usize {
        self.episodes.len()
    }

    /// Run span; an ongoing series keeps `end == None`.
    pub fn timeline(&self) -> Option<(NaiveDate, Option<NaiveDate>)> {
        self.start.map(|start| (start, self.end))
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

/// A season that could not be placed into any group.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OrphanedSeason {
    pub series_uid: String,
    pub season_number: Option<u32>,
    pub reason: &'static str,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct SeasonGrouping {
    pub groups: Vec<SeriesSeasonGroup>,
    pub max_seasons: u32,
    pub orphaned: Vec<OrphanedSeason>,
}

impl SeasonGrouping {
    /// Stable ascending sort on run start date, unknown dates last.
    pub fn sort_by_start_date(&mut self) {
        self.groups
            .sort_by_key(|group| (group.start.is_none(), group.start));
    }

    pub fn season_labels(&self) -> Vec<String> {
        (1..=self.max_seasons).map(|n| format!("Season {n}")).collect()
    }

    pub fn get(&self, label: &str) -> Option<&SeriesSeasonGroup> {
        self.groups.iter().find(|group| group.label == label)
    }
}

pub fn group_seasons(
    seasons: &[Season],
    series: &[Series],
    label_mode: LabelMode,
) -> SeasonGrouping {
    let series_by_uid: HashMap<&str, &Series> =
        series.iter().map(|s| (s.uid.as_str(), s)).collect();

    let mut grouping = SeasonGrouping::default();
    // series_uid -> index into grouping.groups
    let mut index: HashMap<&str, usize> = HashMap::new();

    for season in seasons {
        let season_number = match season.season_number {
            Some(n @ 1..=MAX_SEASON_NUMBER) => n,
            other => {
                tracing::warn!(
                    series = season.series_uid(),
                    season = ?other,
                    "dropping season with unusable season number"
                );
                grouping.orphaned.push(OrphanedSeason {
                    series_uid: season.series_uid().to_string(),
                    season_number: other,
                    reason: "season number missing or out of range",
                });
                continue;
            }
        };

        let Some(&series) = series_by_uid.get(season.series_uid()) else {
            tracing::warn!(
                series = season.series_uid(),
                season = season_number,
                "dropping season without a matching series"
            );
            grouping.orphaned.push(OrphanedSeason {
                series_uid: season.series_uid().to_string(),
                season_number: Some(season_number),
                reason: "no matching series",
            });
            continue;
        };

        let slot = *index.entry(series.uid.as_str()).or_insert_with(|| {
            grouping.groups.push(SeriesSeasonGroup::new(series, label_mode));
            grouping.groups.len() - 1
        });
        grouping.groups[slot].place(season_number, season.number_of_episodes);

        grouping.max_seasons = grouping.max_seasons.max(season_number);
    }

    grouping
}
