//! Chart.js-shaped configuration objects built from the pipeline reports.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::domain::seasons::SeasonGrouping;
use crate::domain::weapons::WeaponAggregate;

const FILL_COLORS: [&str; 9] = [
    "#933", "#963", "#033", "#c66", "#c96", "#366", "#f99", "#fc9", "#699",
];

pub fn fill_color(index: usize) -> &'static str {
    FILL_COLORS[index % FILL_COLORS.len()]
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChartConfig<D> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData<D>,
    pub options: serde_json::Value,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChartData<D> {
    pub labels: Vec<String>,
    pub datasets: Vec<D>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<Option<u32>>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset<T> {
    pub label: String,
    pub data: Vec<T>,
    pub background_color: Vec<&'static str>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TableRow {
    pub title: String,
    pub abbreviation: Option<String>,
    pub start: Option<NaiveDate>,
}

pub fn season_chart(grouping: &SeasonGrouping) -> ChartConfig<LineDataset> {
    let datasets = grouping
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| LineDataset {
            label: group.label.clone(),
            data: group.episodes.clone(),
            border_color: fill_color(i),
            background_color: fill_color(i),
            fill: false,
        })
        .collect();

    ChartConfig {
        kind: "line",
        data: ChartData {
            labels: grouping.season_labels(),
            datasets,
        },
        options: json!({
            "aspectRatio": 1,
            "tooltips": { "mode": "nearest", "intersect": false },
            "scales": {
                "yAxes": [{
                    "ticks": { "beginAtZero": true },
                    "scaleLabel": { "display": true, "labelString": "Episodes" }
                }],
                "xAxes": [{
                    "scaleLabel": { "display": true, "labelString": "Season of Series" }
                }]
            }
        }),
    }
}

/// Floating bars spanning each run. Ongoing series end at `today`.
pub fn timeline_chart(
    grouping: &SeasonGrouping,
    today: NaiveDate,
) -> ChartConfig<BarDataset<Option<[NaiveDate; 2]>>> {
    let (labels, data): (Vec<String>, Vec<Option<[NaiveDate; 2]>>) = grouping
        .groups
        .iter()
        .map(|group| {
            let span = group
                .timeline()
                .map(|(start, end)| [start, end.unwrap_or(today)]);
            (group.label.clone(), span)
        })
        .unzip();
    let background_color = (0..labels.len()).map(fill_color).collect();

    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels,
            datasets: vec![BarDataset {
                label: "Original Run".to_string(),
                data,
                background_color,
            }],
        },
        options: json!({
            "indexAxis": "y",
            "legend": { "display": false },
            "scales": { "x": { "type": "time" } }
        }),
    }
}

pub fn series_table(grouping: &SeasonGrouping) -> Vec<TableRow> {
    grouping
        .groups
        .iter()
        .map(|group| TableRow {
            title: group.title.clone(),
            abbreviation: group.abbreviation.clone(),
            start: group.start,
        })
        .collect()
}

pub fn weapon_chart(aggregate: &WeaponAggregate) -> ChartConfig<BarDataset<u64>> {
    let technologies = aggregate.technologies();

    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: technologies
                .iter()
                .map(|(tech, _)| tech.key().to_string())
                .collect(),
            datasets: vec![BarDataset {
                label: "Weapon Types".to_string(),
                data: technologies.iter().map(|(_, count)| *count).collect(),
                background_color: (0..technologies.len()).map(fill_color).collect(),
            }],
        },
        options: json!({ "legend": { "position": "bottom" } }),
    }
}
