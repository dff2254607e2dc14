//! DetectionResult: the per-file feature inventory.

use std::path::{Path, PathBuf};

use langver_core::errors::InvariantError;
use langver_core::types::collections::{BTreeMap, FxHashSet};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::catalog::Feature;
use crate::resolver::feature_max;

/// Detected features of one file and the release they require.
///
/// The only constructor checks that `required_release` is exactly the newest
/// detected feature's release (or the floor when nothing was detected), so a
/// value of this type is always consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    file_path: PathBuf,
    detected_features: FxHashSet<Feature>,
    required_release: i32,
    min_release_floor: i32,
}

impl DetectionResult {
    pub fn new(
        file_path: impl Into<PathBuf>,
        detected_features: FxHashSet<Feature>,
        required_release: i32,
        min_release_floor: i32,
    ) -> Result<Self, InvariantError> {
        let expected = feature_max::required_release(&detected_features, min_release_floor);
        if required_release != expected {
            return Err(InvariantError::ReleaseMismatch {
                required: required_release,
                expected,
            });
        }
        Ok(Self {
            file_path: file_path.into(),
            detected_features,
            required_release,
            min_release_floor,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn detected_features(&self) -> &FxHashSet<Feature> {
        &self.detected_features
    }

    pub fn required_release(&self) -> i32 {
        self.required_release
    }

    pub fn min_release_floor(&self) -> i32 {
        self.min_release_floor
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.detected_features.contains(&feature)
    }

    /// Features ordered by release, then name.
    pub fn sorted_features(&self) -> Vec<Feature> {
        let mut features: Vec<Feature> = self.detected_features.iter().copied().collect();
        features.sort_by_key(|f| (f.introduced_in(), f.name()));
        features
    }

    /// Features grouped under the release that introduced them.
    pub fn features_by_release(&self) -> BTreeMap<i32, Vec<Feature>> {
        let mut grouped: BTreeMap<i32, Vec<Feature>> = BTreeMap::new();
        for feature in self.sorted_features() {
            grouped.entry(feature.introduced_in()).or_default().push(feature);
        }
        grouped
    }

    pub fn syntax_features(&self) -> Vec<Feature> {
        self.sorted_features().into_iter().filter(|f| !f.is_library()).collect()
    }

    /// Newest release among the language features alone, or `None` when
    /// every detected feature is a library API. Library use can push
    /// `required_release` past it without any new syntax.
    pub fn required_syntax_release(&self) -> Option<i32> {
        self.detected_features
            .iter()
            .filter(|f| !f.is_library())
            .map(|f| f.introduced_in())
            .max()
    }

    pub fn library_features(&self) -> Vec<Feature> {
        self.sorted_features().into_iter().filter(|f| f.is_library()).collect()
    }

    /// Features at or above the configured floor. The detected set and the
    /// required release are unaffected by the floor.
    pub fn reported_features(&self) -> Vec<Feature> {
        self.sorted_features()
            .into_iter()
            .filter(|f| f.introduced_in() >= self.min_release_floor)
            .collect()
    }
}

impl Serialize for DetectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DetectionResult", 5)?;
        state.serialize_field("file_path", &self.file_path)?;
        state.serialize_field("required_release", &self.required_release)?;
        state.serialize_field("required_syntax_release", &self.required_syntax_release())?;
        state.serialize_field("min_release_floor", &self.min_release_floor)?;
        state.serialize_field("detected_features", &self.sorted_features())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(features: &[Feature]) -> FxHashSet<Feature> {
        features.iter().copied().collect()
    }

    #[test]
    fn test_accepts_matching_release() {
        let result =
            DetectionResult::new("A.java", set(&[Feature::ForEach, Feature::Lambdas]), 8, 1).unwrap();
        assert_eq!(result.required_release(), 8);
        assert!(result.contains(Feature::ForEach));
        assert_eq!(result.sorted_features(), vec![Feature::ForEach, Feature::Lambdas]);
    }

    #[test]
    fn test_rejects_mismatched_release() {
        let err = DetectionResult::new("A.java", set(&[Feature::Lambdas]), 11, 1).unwrap_err();
        assert_eq!(
            err,
            InvariantError::ReleaseMismatch {
                required: 11,
                expected: 8
            }
        );
    }

    #[test]
    fn test_empty_set_requires_the_floor() {
        assert!(DetectionResult::new("A.java", FxHashSet::default(), 1, 1).is_ok());
        assert!(DetectionResult::new("A.java", FxHashSet::default(), 5, 1).is_err());
    }

    #[test]
    fn test_floor_filters_reported_features_only() {
        let result = DetectionResult::new(
            "A.java",
            set(&[Feature::Generics, Feature::Records]),
            16,
            9,
        )
        .unwrap();
        assert_eq!(result.reported_features(), vec![Feature::Records]);
        assert_eq!(result.detected_features().len(), 2);
    }

    #[test]
    fn test_partitions_and_groups() {
        let result = DetectionResult::new(
            "A.java",
            set(&[Feature::StreamApi, Feature::Lambdas, Feature::ForEach]),
            8,
            1,
        )
        .unwrap();
        assert_eq!(result.library_features(), vec![Feature::StreamApi]);
        assert_eq!(result.syntax_features(), vec![Feature::ForEach, Feature::Lambdas]);
        let grouped = result.features_by_release();
        assert_eq!(grouped[&5], vec![Feature::ForEach]);
        assert_eq!(grouped[&8], vec![Feature::Lambdas, Feature::StreamApi]);
    }

    #[test]
    fn test_syntax_release_ignores_library_features() {
        let result = DetectionResult::new(
            "A.java",
            set(&[Feature::HttpClient, Feature::ForEach, Feature::Generics]),
            11,
            1,
        )
        .unwrap();
        assert_eq!(result.required_release(), 11);
        assert_eq!(result.required_syntax_release(), Some(5));

        let library_only =
            DetectionResult::new("B.java", set(&[Feature::StreamApi]), 8, 1).unwrap();
        assert_eq!(library_only.required_syntax_release(), None);
        let empty = DetectionResult::new("C.java", FxHashSet::default(), 1, 1).unwrap();
        assert_eq!(empty.required_syntax_release(), None);
    }

    #[test]
    fn test_serializes_sorted_feature_names() {
        let result =
            DetectionResult::new("A.java", set(&[Feature::Records, Feature::Enums]), 16, 1).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["required_release"], 16);
        assert_eq!(json["required_syntax_release"], 16);
        assert_eq!(json["detected_features"][0], "ENUMS");
        assert_eq!(json["detected_features"][1], "RECORDS");
    }
}
