// Node-lookup helpers wrapping the scene tree's path resolution.
//
// Free functions rather than methods: the handle is the first argument.
// Two failure styles coexist on purpose: `try_get_node` reports an
// absent or wrong-typed target as a normal `None` miss, while the
// owner-relative getters panic on every failure, including a merely
// absent path. Callers pick the style they want; the asymmetry is
// documented, not unified.
//
// Blank names and paths panic in both styles — invalid input is a usage
// error, distinct from a lookup miss. A null handle is unrepresentable
// (`&Gd<Node>` is non-null by construction); a handle to a freed node
// fails inside the engine call, which keeps dead input on the
// hard-error side of that line. Inside a Godot callback, gdext turns
// these panics into engine errors that abort the callback.

use godot::classes::{Node, Node2D};
use godot::obj::{Gd, Inherits};
use scenekit_core::lookup;

/// Look up a child or descendant of `root` by name and cast it to `T`.
///
/// Returns `None` when nothing lives at `name` or when the node there
/// is not a `T` — both are normal misses for callers to branch on.
/// Panics if `name` is empty or whitespace-only.
pub fn try_get_node<T>(root: &Gd<Node>, name: &str) -> Option<Gd<T>>
where
    T: Inherits<Node>,
{
    lookup::find("try_get_node", name, |name| {
        root.try_get_node_as::<T>(name)
    })
}

/// Resolve `path` relative to `node`'s owner and cast the result to `T`.
///
/// The owner is the ancestor the scene file designates as the node's
/// root, not necessarily its direct parent. Panics if `path` is blank,
/// `node` has no owner, or nothing of class `T` lives at `path` under
/// the owner — unlike [`try_get_node`], absence here is a usage error
/// rather than a miss.
pub fn get_node_child_by_owner<T>(node: &Gd<Node>, path: &str) -> Gd<T>
where
    T: Inherits<Node>,
{
    lookup::find_under_owner(
        "get_node_child_by_owner",
        path,
        node.get_owner(),
        |owner, path| owner.try_get_node_as::<T>(path),
    )
}

/// [`get_node_child_by_owner`] constrained to 2-D nodes on both sides.
pub fn get_node_child_by_owner_2d<T>(node: &Gd<Node2D>, path: &str) -> Gd<T>
where
    T: Inherits<Node> + Inherits<Node2D>,
{
    lookup::find_under_owner(
        "get_node_child_by_owner_2d",
        path,
        node.get_owner(),
        |owner, path| owner.try_get_node_as::<T>(path),
    )
}
