//! Feature-maximum strategy.

use crate::catalog::Feature;

/// Newest `introduced_in` among `features`, or `floor` when there are none.
pub fn required_release<'a>(features: impl IntoIterator<Item = &'a Feature>, floor: i32) -> i32 {
    features
        .into_iter()
        .map(|f| f.introduced_in())
        .max()
        .unwrap_or(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_yields_floor() {
        let none: [Feature; 0] = [];
        assert_eq!(required_release(&none, 1), 1);
        assert_eq!(required_release(&none, 8), 8);
    }

    #[test]
    fn test_newest_feature_wins() {
        let features = [Feature::ForEach, Feature::Lambdas, Feature::Generics];
        assert_eq!(required_release(&features, 1), 8);
    }

    #[test]
    fn test_floor_does_not_raise_a_non_empty_set() {
        assert_eq!(required_release(&[Feature::Assert], 11), 4);
    }
}
