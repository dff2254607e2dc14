//! Grammar profiles: what each release's grammar rejects.
//!
//! A profile is a set of rejection constructs. Profiles are ordered by
//! release and each one only drops constructs from its predecessor's set, so
//! acceptance grows monotonically with the release.

pub mod construct;
pub mod profile;

pub use construct::GrammarConstruct;
pub use profile::{GrammarProfile, GrammarProfiles};
