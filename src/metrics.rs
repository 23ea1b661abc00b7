//! Metric definitions and value formatting.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The numeric columns a benchmark CSV may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Ipc,
    CycleCount,
    FrequencyMhz,
    AreaMm2,
    PowerMw,
}

impl MetricKey {
    pub const ALL: [MetricKey; 5] = [
        MetricKey::Ipc,
        MetricKey::CycleCount,
        MetricKey::FrequencyMhz,
        MetricKey::AreaMm2,
        MetricKey::PowerMw,
    ];

    /// Column name in the CSV header.
    pub fn column(self) -> &'static str {
        match self {
            MetricKey::Ipc => "ipc",
            MetricKey::CycleCount => "cycle_count",
            MetricKey::FrequencyMhz => "frequency_mhz",
            MetricKey::AreaMm2 => "area_mm2",
            MetricKey::PowerMw => "power_mw",
        }
    }

    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.column() == name)
    }

    /// Reads this metric off a record.
    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            MetricKey::Ipc => record.ipc,
            MetricKey::CycleCount => record.cycle_count,
            MetricKey::FrequencyMhz => record.frequency_mhz,
            MetricKey::AreaMm2 => record.area_mm2,
            MetricKey::PowerMw => record.power_mw,
        }
    }

    pub(crate) fn slot(self, record: &mut Record) -> &mut Option<f64> {
        match self {
            MetricKey::Ipc => &mut record.ipc,
            MetricKey::CycleCount => &mut record.cycle_count,
            MetricKey::FrequencyMhz => &mut record.frequency_mhz,
            MetricKey::AreaMm2 => &mut record.area_mm2,
            MetricKey::PowerMw => &mut record.power_mw,
        }
    }
}

/// A ranked column of the leaderboard.
///
/// `label` and `description` only feed the metrics-description table at the
/// top of the document; tables are headed by `display_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub key: MetricKey,
    pub display_name: String,
    pub higher_is_better: bool,
    pub label: String,
    pub description: String,
}

impl MetricDescriptor {
    pub fn new(
        key: MetricKey,
        display_name: &str,
        higher_is_better: bool,
        label: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            display_name: display_name.to_string(),
            higher_is_better,
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// The five standard metrics, in table order.
pub fn default_metrics() -> Vec<MetricDescriptor> {
    vec![
        MetricDescriptor::new(MetricKey::Ipc, "IPC", true, "IPC", "Instructions Per Cycle"),
        MetricDescriptor::new(
            MetricKey::CycleCount,
            "Cycle Count",
            false,
            "Cycle Count",
            "End-to-end program execution cycles",
        ),
        MetricDescriptor::new(
            MetricKey::FrequencyMhz,
            "Frequency (MHz)",
            true,
            "Frequency",
            "Hardware synthesis frequency (MHz)",
        ),
        MetricDescriptor::new(
            MetricKey::AreaMm2,
            "Area (mm²)",
            false,
            "Area",
            "Chip area (mm²)",
        ),
        MetricDescriptor::new(
            MetricKey::PowerMw,
            "Power (mW)",
            false,
            "Power",
            "Power consumption (mW)",
        ),
    ]
}

/// Formats a metric value for a table cell. Absent values render as `-`.
///
/// | Metric                 | Format            |
/// |------------------------|-------------------|
/// | cycle_count            | `1,234,567`       |
/// | ipc, area_mm2          | two decimals      |
/// | frequency_mhz, power_mw| rounded, no decimals |
pub fn format_value(value: Option<f64>, key: MetricKey) -> String {
    let Some(v) = value else {
        return "-".into();
    };
    match key {
        MetricKey::CycleCount => group_thousands(v.trunc() as i64),
        MetricKey::Ipc | MetricKey::AreaMm2 => format!("{v:.2}"),
        MetricKey::FrequencyMhz | MetricKey::PowerMw => format!("{v:.0}"),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
