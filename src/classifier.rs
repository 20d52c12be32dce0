// 🏷️ Classifier - Maps customer spend totals to value tiers
//
// Pure, stateless, total over non-negative spend. Boundary policy:
// exactly 100 is Medium-Value, anything above is High-Value.

use serde::{Deserialize, Serialize};

// ============================================================================
// TIER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// total > 100
    #[serde(rename = "High-Value")]
    HighValue,

    /// 50 <= total <= 100
    #[serde(rename = "Medium-Value")]
    MediumValue,

    /// total < 50
    #[serde(rename = "Low-Value")]
    LowValue,
}

impl Tier {
    /// Classify a customer's total spend.
    pub fn classify(total: f64) -> Tier {
        if total > 100.0 {
            Tier::HighValue
        } else if total >= 50.0 {
            Tier::MediumValue
        } else {
            Tier::LowValue
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::HighValue => "High-Value",
            Tier::MediumValue => "Medium-Value",
            Tier::LowValue => "Low-Value",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Tier::classify(0.0), Tier::LowValue);
        assert_eq!(Tier::classify(49.99), Tier::LowValue);
        assert_eq!(Tier::classify(50.0), Tier::MediumValue);
        assert_eq!(Tier::classify(100.0), Tier::MediumValue);
        assert_eq!(Tier::classify(100.01), Tier::HighValue);
        assert_eq!(Tier::classify(2400.0), Tier::HighValue);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Tier::HighValue.to_string(), "High-Value");
        assert_eq!(Tier::MediumValue.to_string(), "Medium-Value");
        assert_eq!(Tier::LowValue.to_string(), "Low-Value");
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Tier::HighValue).unwrap();
        assert_eq!(json, "\"High-Value\"");
    }
}
