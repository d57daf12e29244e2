use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub original_run_start_date: Option<NaiveDate>,
    /// `None` while the series is still running.
    #[serde(default)]
    pub original_run_end_date: Option<NaiveDate>,
}

/// The series header STAPI embeds in every season record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SeriesRef {
    pub uid: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub series: SeriesRef,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
}

impl Season {
    pub fn series_uid(&self) -> &str {
        &self.series.uid
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub uid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub alternate_reality: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub hand_held_weapon: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub mirror: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub laser_technology: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub phaser_technology: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub photonic_technology: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub plasma_technology: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub first_page: bool,
    #[serde(default)]
    pub last_page: bool,
}

/// A `*/search` response: one page of items plus optional paging metadata.
pub trait SearchResponse {
    type Item;

    /// `None` means the endpoint returned everything in one go.
    fn page(&self) -> Option<&PageInfo>;

    fn into_items(self) -> Vec<Self::Item>;
}

#[derive(Debug, Deserialize)]
pub struct SeasonsResponse {
    #[serde(default)]
    pub seasons: Vec<Season>,
    pub page: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesResponse {
    #[serde(default)]
    pub series: Vec<Series>,
    pub page: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
pub struct WeaponsResponse {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    pub page: Option<PageInfo>,
}

macro_rules! search_response {
    ($response:ty, $field:ident, $item:ty) => {
        impl SearchResponse for $response {
            type Item = $item;

            fn page(&self) -> Option<&PageInfo> {
                self.page.as_ref()
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}

search_response!(SeasonsResponse, seasons, Season);
search_response!(SeriesResponse, series, Series);
search_response!(WeaponsResponse, weapons, Weapon);
