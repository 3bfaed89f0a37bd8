use crate::shared::classification::ChangeType;
use crate::shared::validation::{is_signed_percent, DataError};
use serde::{Deserialize, Serialize};

/// KPI card with a signed percentage change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    /// Signed percentage, e.g. "+12.5%"
    pub change: String,
    pub change_type: ChangeType,
    pub icon: String,
}

impl MetricCard {
    pub fn change_icon(&self) -> &'static str {
        self.change_type.icon()
    }

    pub fn change_color(&self) -> &'static str {
        self.change_type.color().as_str()
    }
}

/// One share of a pie/bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub analytics_cards: Vec<MetricCard>,
    pub traffic_sources: Vec<ChartSlice>,
}

fn metric(title: &str, value: &str, change: &str, icon: &str) -> MetricCard {
    MetricCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        // Every seeded card is positive, Bounce Rate included.
        change_type: ChangeType::Positive,
        icon: icon.to_string(),
    }
}

fn slice(name: &str, value: f64) -> ChartSlice {
    ChartSlice {
        name: name.to_string(),
        value,
    }
}

/// Allowed drift of the slice sum from 100 caused by float addition.
const SLICE_SUM_TOLERANCE: f64 = 1e-9;

impl AnalyticsSnapshot {
    pub fn seeded() -> Self {
        Self {
            analytics_cards: vec![
                metric("Page Views", "45,678", "+12.5%", "visibility"),
                metric("Unique Visitors", "12,340", "+8.2%", "people"),
                metric("Bounce Rate", "2.4%", "-1.1%", "trending_down"),
                metric("Conversion Rate", "3.8%", "+0.5%", "trending_up"),
            ],
            traffic_sources: vec![
                slice("Organic Search", 45.0),
                slice("Direct", 25.0),
                slice("Social Media", 20.0),
                slice("Email", 10.0),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), DataError> {
        for card in &self.analytics_cards {
            if !is_signed_percent(&card.change) {
                return Err(DataError::BadChangeFormat {
                    title: card.title.clone(),
                    change: card.change.clone(),
                });
            }
        }
        if let Some(s) = self.traffic_sources.iter().find(|s| s.value < 0.0) {
            return Err(DataError::NegativeSlice(s.name.clone()));
        }
        let total = self.traffic_sources_total();
        if (total - 100.0).abs() > SLICE_SUM_TOLERANCE {
            return Err(DataError::SlicesNotHundred(total));
        }
        Ok(())
    }

    pub fn traffic_sources_total(&self) -> f64 {
        self.traffic_sources.iter().map(|s| s.value).sum()
    }
}
