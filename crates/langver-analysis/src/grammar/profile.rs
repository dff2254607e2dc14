//! Grammar profiles and the ordered, self-checked profile list.

use std::ops::ControlFlow;

use langver_core::constants::BASELINE_GRAMMAR_RELEASE;
use langver_core::errors::GrammarProfileError;

use super::construct::GrammarConstruct;
use crate::parsers::SyntaxTree;
use crate::syntax::walk_nodes;

/// What one release's grammar rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarProfile {
    release: i32,
    rejections: Vec<GrammarConstruct>,
}

impl GrammarProfile {
    pub fn new(release: i32, mut rejections: Vec<GrammarConstruct>) -> Self {
        rejections.sort_unstable();
        rejections.dedup();
        Self {
            release,
            rejections,
        }
    }

    /// A profile that rejects nothing.
    pub fn permissive(release: i32) -> Self {
        Self::new(release, Vec::new())
    }

    pub fn release(&self) -> i32 {
        self.release
    }

    pub fn rejections(&self) -> &[GrammarConstruct] {
        &self.rejections
    }

    pub fn rejects(&self, construct: GrammarConstruct) -> bool {
        self.rejections.binary_search(&construct).is_ok()
    }

    /// The next profile: same rejections minus every construct `allow` accepts.
    pub fn relaxed(&self, release: i32, allow: impl Fn(GrammarConstruct) -> bool) -> Self {
        Self {
            release,
            rejections: self.rejections.iter().copied().filter(|c| !allow(*c)).collect(),
        }
    }

    /// First construct in document order that this profile rejects.
    pub fn first_rejection(&self, tree: &SyntaxTree) -> Option<GrammarConstruct> {
        if self.rejections.is_empty() {
            return None;
        }
        let source = tree.source_bytes();
        let mut found = None;
        // Depth was bounded when the tree was built.
        let _ = walk_nodes(tree.root(), usize::MAX, |node| {
            match self.rejections.iter().find(|c| c.matches(node, source)) {
                Some(construct) => {
                    found = Some(*construct);
                    ControlFlow::Break(())
                }
                None => ControlFlow::Continue(()),
            }
        });
        found
    }

    pub fn accepts(&self, tree: &SyntaxTree) -> bool {
        self.first_rejection(tree).is_none()
    }
}

/// Profiles in strictly ascending release order, each accepting everything
/// its predecessor accepts.
#[derive(Debug, Clone)]
pub struct GrammarProfiles {
    profiles: Vec<GrammarProfile>,
}

impl GrammarProfiles {
    /// Checks ordering and monotonic relaxation before accepting the list.
    pub fn new(profiles: Vec<GrammarProfile>) -> Result<Self, GrammarProfileError> {
        if profiles.is_empty() {
            return Err(GrammarProfileError::Empty);
        }
        for pair in profiles.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            if next.release <= previous.release {
                return Err(GrammarProfileError::NotAscending {
                    previous: previous.release,
                    release: next.release,
                });
            }
            if let Some(construct) = next.rejections.iter().find(|c| !previous.rejects(**c)) {
                return Err(GrammarProfileError::NotMonotonic {
                    previous: previous.release,
                    release: next.release,
                    construct: construct.name(),
                });
            }
        }
        Ok(Self { profiles })
    }

    /// Built-in Java profiles.
    ///
    /// The baseline profile rejects every known construct; each later profile
    /// relaxes the constructs its release introduced. Releases that introduce
    /// no construct get no profile.
    pub fn builtin() -> Result<Self, GrammarProfileError> {
        let mut releases: Vec<i32> = GrammarConstruct::ALL
            .iter()
            .map(|c| c.allowed_since())
            .collect();
        releases.sort_unstable();
        releases.dedup();

        let mut current = GrammarProfile::new(
            BASELINE_GRAMMAR_RELEASE,
            GrammarConstruct::ALL
                .iter()
                .copied()
                .filter(|c| c.allowed_since() > BASELINE_GRAMMAR_RELEASE)
                .collect(),
        );
        let mut profiles = vec![current.clone()];
        for release in releases.into_iter().filter(|r| *r > BASELINE_GRAMMAR_RELEASE) {
            current = current.relaxed(release, |c| c.allowed_since() <= release);
            profiles.push(current.clone());
        }
        Self::new(profiles)
    }

    pub fn profiles(&self) -> &[GrammarProfile] {
        &self.profiles
    }

    pub fn releases(&self) -> Vec<i32> {
        self.profiles.iter().map(|p| p.release).collect()
    }

    pub fn most_permissive(&self) -> &GrammarProfile {
        // `new` guarantees at least one profile.
        &self.profiles[self.profiles.len() - 1]
    }

    /// Strictest profile a parser for `release` should use: the newest
    /// profile at or below `release`, or the oldest one.
    pub fn upper_bound(&self, release: i32) -> &GrammarProfile {
        self.profiles
            .iter()
            .rev()
            .find(|p| p.release <= release)
            .unwrap_or(&self.profiles[0])
    }
}
