// src/analysis/classify.rs
use crate::types::Classification;

/// Labels a reference distance against the critical threshold.
///
/// Critical iff the distance strictly exceeds the threshold; a site exactly
/// at the threshold is Standard. The threshold is supplied by the caller so
/// the policy stays testable across deployments.
#[must_use]
pub fn classify(distance_km: f64, critical_threshold_km: f64) -> Classification {
    if distance_km > critical_threshold_km {
        Classification::Critical
    } else {
        Classification::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_threshold_is_critical() {
        assert_eq!(classify(300.001, 300.0), Classification::Critical);
        assert_eq!(classify(450.0, 300.0), Classification::Critical);
    }

    #[test]
    fn test_below_threshold_is_standard() {
        assert_eq!(classify(170.2, 300.0), Classification::Standard);
        assert_eq!(classify(0.0, 300.0), Classification::Standard);
    }

    #[test]
    fn test_exact_threshold_is_standard() {
        assert_eq!(classify(300.0, 300.0), Classification::Standard);
    }

    #[test]
    fn test_threshold_is_not_hardcoded() {
        assert_eq!(classify(10.0, 5.0), Classification::Critical);
        assert_eq!(classify(10.0, 15.0), Classification::Standard);
    }
}
