//! `define_features!` macro: one table row per catalog entry.

/// Defines the `Feature` enum together with its per-variant metadata.
///
/// Usage:
/// ```ignore
/// define_features! {
///     Lambdas => ("LAMBDAS", 8, Syntax, "Lambda expressions"),
///     StreamApi => ("STREAM_API", 8, Library, "java.util.stream"),
/// }
/// ```
#[macro_export]
macro_rules! define_features {
    ($( $variant:ident => ($name:literal, $release:expr, $category:ident, $label:literal) ),+ $(,)?) => {
        /// A named language or library capability.
        ///
        /// Variants are declared in ascending release order, so the derived
        /// `Ord` sorts by release first.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Feature {
            $($variant),+
        }

        impl Feature {
            /// Every catalog entry, in declaration order.
            pub const ALL: &'static [Feature] = &[$(Feature::$variant),+];

            /// Stable SCREAMING_SNAKE identifier.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Feature::$variant => $name),+
                }
            }

            /// Release that introduced the feature.
            pub const fn introduced_in(self) -> i32 {
                match self {
                    $(Feature::$variant => $release),+
                }
            }

            pub const fn category(self) -> $crate::catalog::FeatureCategory {
                match self {
                    $(Feature::$variant => $crate::catalog::FeatureCategory::$category),+
                }
            }

            /// One-line label for reports.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Feature::$variant => $label),+
                }
            }
        }
    };
}
