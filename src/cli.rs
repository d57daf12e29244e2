use clap::{Parser, ValueEnum};

use crate::domain::seasons::LabelMode;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "stapi-charts")]
#[command(about = "Fetch Star Trek seasons, series and weapons from STAPI and shape them into chart data")]
pub struct Cli {
    /// STAPI REST base URL (defaults to STAPI_BASE_URL, the config file, then stapi.co)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Records per page requested from STAPI
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Series field used to label season groups
    #[arg(long, value_enum, default_value = "title")]
    pub label: LabelMode,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
