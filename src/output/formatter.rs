use super::color::ColorWriter;
use super::summary_formatter::format_summary;
use crate::models::user::User;
use crate::report::ChannelReport;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text summary
    #[default]
    Human,
    Json,
    Yaml,
}

/// Machine-readable shape of a report.
#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    user: &'a User,
    direct_message_channels: u32,
    total_channels: u32,
}

impl<'a> From<&'a ChannelReport> for ReportDocument<'a> {
    fn from(report: &'a ChannelReport) -> Self {
        Self {
            user: &report.user,
            direct_message_channels: report.direct_messages,
            total_channels: report.total_channels(),
        }
    }
}

pub fn render(report: &ChannelReport, format: OutputFormat, no_color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ReportDocument::from(report))? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&ReportDocument::from(report))?),
        OutputFormat::Human => {
            let mut writer = ColorWriter::new(no_color);
            format_summary(report, &mut writer)?;
            Ok(writer.into_string()?)
        }
    }
}
