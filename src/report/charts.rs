use anyhow::{Context, Result};
use chrono::NaiveDate;
use plotly::common::{Mode, Title};
use plotly::layout::Layout;
use plotly::{Pie, Plot, Scatter};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DISTRIBUTION_FILE: &str = "sentiment_pie.html";
pub const TREND_FILE: &str = "sentiment_trend.html";

/// Renders report charts as standalone HTML files under a fixed output
/// directory. Every render replaces the previous file of the same name.
pub struct ChartRenderer {
    output_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(output_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!(
                "Failed to create chart output directory {}",
                output_dir.display()
            )
        })?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Pie chart of the overall share of each sentiment label.
    pub fn render_distribution(&self, counts: &BTreeMap<String, u64>) -> Result<PathBuf> {
        let labels: Vec<&str> = counts.keys().map(String::as_str).collect();
        let values: Vec<u64> = counts.values().copied().collect();

        let mut plot = Plot::new();
        plot.add_trace(Pie::new(values).labels(labels));
        plot.set_layout(Layout::new().title(Title::with_text("Sentiment Distribution")));

        self.write(DISTRIBUTION_FILE, &plot)
    }

    /// Line chart of daily record counts, one line per sentiment label.
    pub fn render_trend(
        &self,
        trend: &BTreeMap<String, BTreeMap<NaiveDate, u64>>,
    ) -> Result<PathBuf> {
        let mut plot = Plot::new();
        for (label, days) in trend {
            let dates: Vec<String> = days.keys().map(NaiveDate::to_string).collect();
            let counts: Vec<u64> = days.values().copied().collect();
            plot.add_trace(
                Scatter::new(dates, counts)
                    .mode(Mode::LinesMarkers)
                    .name(label.as_str()),
            );
        }
        plot.set_layout(Layout::new().title(Title::with_text("Sentiment Trend Over Time")));

        self.write(TREND_FILE, &plot)
    }

    fn write(&self, file_name: &str, plot: &Plot) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        std::fs::write(&path, plot.to_html())
            .with_context(|| format!("Failed to write chart {}", path.display()))?;
        info!("Rendered chart {}", path.display());
        Ok(path)
    }
}
