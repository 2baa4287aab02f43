//! Distance → similarity transform.

/// Map a combined distance to a bounded similarity.
///
/// An infinite distance (no candidate pair connected) maps to exactly 0.0;
/// otherwise the similarity is `exp(-distance / 4)`, monotonically decreasing
/// in distance, with distance 0 mapping to 1.0.
pub fn similarity_from_distance(distance: f64) -> f64 {
    if distance.is_infinite() {
        0.0
    } else {
        (-distance / 4.0).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_is_full_similarity() {
        assert_eq!(similarity_from_distance(0.0), 1.0);
    }

    #[test]
    fn infinite_distance_is_exactly_zero() {
        assert_eq!(similarity_from_distance(f64::INFINITY), 0.0);
    }

    #[test]
    fn similarity_decreases_with_distance() {
        let near = similarity_from_distance(1.0);
        let far = similarity_from_distance(5.0);
        assert!(near > far);
        assert!(near < 1.0 && near > 0.0);
    }

    #[test]
    fn known_value() {
        assert!((similarity_from_distance(4.0) - (-1.0f64).exp()).abs() < 1e-12);
    }
}
