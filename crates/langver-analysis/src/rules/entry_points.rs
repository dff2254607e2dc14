//! Well-known static entry points whose call alone implies a library feature.
//!
//! `List.of(..)` never names a Java 9 type, so the type rules cannot see it.

use crate::catalog::Feature;

#[derive(Debug, Clone, Copy)]
pub struct StaticEntryPoint {
    pub package: &'static str,
    pub receivers: &'static [&'static str],
    pub methods: &'static [&'static str],
    pub feature: Feature,
}

impl StaticEntryPoint {
    /// `receiver` may be the simple type name or its fully qualified form.
    pub fn matches(&self, receiver: &str, method: &str) -> bool {
        if !self.methods.contains(&method) {
            return false;
        }
        let simple = match receiver.strip_prefix(self.package) {
            Some(rest) => match rest.strip_prefix('.') {
                Some(simple) => simple,
                None => return false,
            },
            None => receiver,
        };
        self.receivers.contains(&simple)
    }
}

pub const STATIC_ENTRY_POINTS: &[StaticEntryPoint] = &[
    StaticEntryPoint {
        package: "java.util",
        receivers: &["List", "Set", "Map"],
        methods: &["of", "ofEntries", "entry"],
        feature: Feature::CollectionFactoryMethods,
    },
    StaticEntryPoint {
        package: "java.util",
        receivers: &["List", "Set", "Map"],
        methods: &["copyOf"],
        feature: Feature::CollectionCopyOf,
    },
    StaticEntryPoint {
        package: "java.util.stream",
        receivers: &["Collectors"],
        methods: &["teeing"],
        feature: Feature::CollectorsTeeing,
    },
    StaticEntryPoint {
        package: "java.lang",
        receivers: &["Thread"],
        methods: &["ofVirtual", "startVirtualThread"],
        feature: Feature::VirtualThreads,
    },
    StaticEntryPoint {
        package: "java.util.concurrent",
        receivers: &["Executors"],
        methods: &["newVirtualThreadPerTaskExecutor"],
        feature: Feature::VirtualThreads,
    },
];

/// Feature implied by calling `receiver.method(..)`, if any.
pub fn entry_point_feature(receiver: &str, method: &str) -> Option<Feature> {
    STATIC_ENTRY_POINTS
        .iter()
        .find(|entry| entry.matches(receiver, method))
        .map(|entry| entry.feature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_and_qualified_receivers() {
        assert_eq!(
            entry_point_feature("List", "of"),
            Some(Feature::CollectionFactoryMethods)
        );
        assert_eq!(
            entry_point_feature("java.util.Map", "ofEntries"),
            Some(Feature::CollectionFactoryMethods)
        );
        assert_eq!(entry_point_feature("Set", "copyOf"), Some(Feature::CollectionCopyOf));
        assert_eq!(
            entry_point_feature("Collectors", "teeing"),
            Some(Feature::CollectorsTeeing)
        );
        assert_eq!(entry_point_feature("Thread", "ofVirtual"), Some(Feature::VirtualThreads));
    }

    #[test]
    fn test_unrelated_calls_do_not_match() {
        assert_eq!(entry_point_feature("List", "add"), None);
        assert_eq!(entry_point_feature("Thread", "sleep"), None);
        assert_eq!(entry_point_feature("com.acme.List", "of"), None);
        assert_eq!(entry_point_feature("java.utilList", "of"), None);
    }
}
