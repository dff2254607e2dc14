//! SyntaxParser trait: the contract between the engine and its parser.

use langver_core::errors::ParseError;

use super::tree::SyntaxTree;
use crate::grammar::GrammarProfile;

pub trait SyntaxParser: Send + Sync {
    /// Parse with the full grammar. Error nodes, a missing tree, or a tree
    /// deeper than the configured limit are failures.
    fn parse_tree(&self, source: &str) -> Result<SyntaxTree, ParseError>;

    /// Parse as a parser limited to `profile`'s grammar would: a tree
    /// containing a construct the profile rejects is a failure too.
    fn parse(&self, source: &str, profile: &GrammarProfile) -> Result<SyntaxTree, ParseError> {
        let tree = self.parse_tree(source)?;
        match profile.first_rejection(&tree) {
            Some(construct) => Err(ParseError::Rejected {
                construct: construct.name(),
                parser_release: profile.release(),
            }),
            None => Ok(tree),
        }
    }
}
