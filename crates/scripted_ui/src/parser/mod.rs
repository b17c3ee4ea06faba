//! Declarative UI source.
//!
//! ```text
//! # options screen
//! Margins(20) {
//!     Vertical {
//!         Using(title) { Text(size = 30, color = YELLOW, font = TITLE) }
//!         Stretch
//!         Scrollable(Scroller(Fill(GRAY))) {
//!             List(VERTICAL) { FocusableKeys { Using(label) { Text } } }
//!         }
//!         Using(EXIT) { Button }
//!     }
//! }
//! ```
//!
//! Source is tokenized, parsed into untyped terms, then each tagged term is
//! handed to the builder registered for its tag. Tags without a builder are
//! logged and become a [`Chain`](crate::node::Chain) of their block.

mod lexer;
mod registry;
mod term;

use crate::error::ParseResult;
use crate::node::Node;

use self::term::TermParser;

/// Builds a node tree from declarative source.
///
/// Several top-level terms build a chain of them.
///
/// # Errors
///
/// Returns a [`ParseError`](crate::ParseError) for malformed tokens or
/// syntax, and for node literals of a known kind whose fields are missing,
/// unknown or of the wrong shape.
pub fn build_tree(source: &str) -> ParseResult<Node> {
    let tokens = lexer::tokenize(source)?;
    let terms = TermParser::new(tokens).terms()?;
    let node = match terms.as_slice() {
        [single] => registry::build_node(single)?,
        many => registry::chain(many)?,
    };
    tracing::debug!(nodes = node.count(), tag = node.tag(), "built UI tree");
    Ok(node)
}
