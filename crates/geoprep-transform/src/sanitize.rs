//! Document null sanitization.

use geoprep_model::Node;

/// Replaces every null in the tree with the sentinel `-1`, in place.
///
/// Depth-first: mapping values and sequence elements that are null become
/// the sentinel; containers are recursed into; other scalars are left
/// untouched. Returns the number of nulls replaced.
///
/// Mutation is explicit: callers who need the original tree keep a
/// `clone()` before sanitizing.
pub fn sanitize(node: &mut Node) -> usize {
    match node {
        Node::Null => {
            *node = Node::sentinel();
            1
        }
        Node::Bool(_) | Node::Number(_) | Node::Text(_) => 0,
        Node::Sequence(items) => items.iter_mut().map(sanitize).sum(),
        Node::Mapping(entries) => entries.values_mut().map(sanitize).sum(),
    }
}
