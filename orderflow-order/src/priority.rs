use orderflow_shared::{Priority, Thresholds};

/// Maps an order amount to its priority
#[derive(Debug, Clone, Copy)]
pub struct PriorityCalculator {
    threshold: f64,
}

impl PriorityCalculator {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            threshold: thresholds.priority_threshold,
        }
    }

    /// High only when strictly above the threshold; a tie stays low
    pub fn determine_priority(&self, amount: f64) -> Priority {
        if amount > self.threshold {
            Priority::High
        } else {
            Priority::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(threshold: f64) -> PriorityCalculator {
        PriorityCalculator::new(&Thresholds::uniform(threshold))
    }

    #[test]
    fn test_above_threshold_is_high() {
        let calc = calculator(200.0);
        assert_eq!(calc.determine_priority(200.01), Priority::High);
        assert_eq!(calc.determine_priority(10_000.0), Priority::High);
    }

    #[test]
    fn test_threshold_itself_is_low() {
        assert_eq!(calculator(200.0).determine_priority(200.0), Priority::Low);
    }

    #[test]
    fn test_below_threshold_is_low() {
        let calc = calculator(50.0);
        assert_eq!(calc.determine_priority(49.99), Priority::Low);
        assert_eq!(calc.determine_priority(0.0), Priority::Low);
        assert_eq!(calc.determine_priority(-5.0), Priority::Low);
    }

    #[test]
    fn test_nan_amount_is_low() {
        assert_eq!(calculator(50.0).determine_priority(f64::NAN), Priority::Low);
    }
}
