use serde::Deserialize;

/// Numeric boundaries used by the processors, fixed for the length of a run
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Amounts strictly above this are high priority
    #[serde(default = "default_priority_threshold")]
    pub priority_threshold: f64,
    /// Exported records above this amount carry a note
    #[serde(default = "default_high_value_threshold")]
    pub high_value_threshold: f64,
    #[serde(default = "default_api_data_threshold")]
    pub api_data_threshold: f64,
    #[serde(default = "default_api_amount_threshold")]
    pub api_amount_threshold: f64,
}

fn default_priority_threshold() -> f64 { 200.0 }
fn default_high_value_threshold() -> f64 { 150.0 }
fn default_api_data_threshold() -> f64 { 50.0 }
fn default_api_amount_threshold() -> f64 { 100.0 }

impl Thresholds {
    /// Single amount threshold for priority and API rules; the export note
    /// boundary keeps its default.
    pub fn uniform(threshold: f64) -> Self {
        Self {
            priority_threshold: threshold,
            api_data_threshold: threshold,
            api_amount_threshold: threshold,
            ..Self::default()
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            priority_threshold: default_priority_threshold(),
            high_value_threshold: default_high_value_threshold(),
            api_data_threshold: default_api_data_threshold(),
            api_amount_threshold: default_api_amount_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let thresholds: Thresholds =
            serde_json::from_str(r#"{"priority_threshold": 500}"#).unwrap();
        assert_eq!(thresholds.priority_threshold, 500.0);
        assert_eq!(thresholds.high_value_threshold, 150.0);
        assert_eq!(thresholds.api_data_threshold, 50.0);
    }

    #[test]
    fn test_uniform() {
        let thresholds = Thresholds::uniform(50.0);
        assert_eq!(thresholds.priority_threshold, 50.0);
        assert_eq!(thresholds.api_amount_threshold, 50.0);
        assert_eq!(thresholds.high_value_threshold, 150.0);
    }
}
