// Scene-tree lookup contract, independent of the engine.
//
// The gdext crate instantiates these functions with godot handle types;
// the tests here instantiate them with plain values, so the contract is
// checked without a running engine.
//
// Two failure styles coexist on purpose: `find` reports an absent or
// wrong-typed target as a normal `None` miss, while `find_under_owner`
// panics on every failure, including a merely absent path. Blank
// arguments are usage errors in both styles and always panic — invalid
// input is never a miss.

use crate::text;

/// Validate a node name or path argument, panicking if it is empty or
/// whitespace-only. Returns the path unchanged so call sites can
/// validate inline.
pub fn require_path<'a>(func: &str, path: &'a str) -> &'a str {
    assert!(
        !text::is_blank(path),
        "{func}: node name/path must not be empty or whitespace"
    );
    path
}

/// Resolve `path` with `resolve`, treating absence as a normal miss.
///
/// A resolver that finds a node of the wrong type reports it the same
/// way as an absent node: `None`. Panics if `path` is blank.
pub fn find<T>(func: &str, path: &str, resolve: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    resolve(require_path(func, path))
}

/// Resolve `path` under `owner`, panicking on every failure.
///
/// Checks run in order: blank `path` first, then the missing owner,
/// then the unresolvable target. There is no miss branch in this style.
pub fn find_under_owner<N, T>(
    func: &str,
    path: &str,
    owner: Option<N>,
    resolve: impl FnOnce(&N, &str) -> Option<T>,
) -> T {
    let path = require_path(func, path);
    let owner = match owner {
        Some(owner) => owner,
        None => panic!("{func}: owner not found"),
    };
    match resolve(&owner, path) {
        Some(target) => target,
        None => panic!("{func}: node by path '{path}' not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A stand-in scene: one child named "Timer" that is a Timer. The
    /// resolver casts by returning `None` for any other requested kind,
    /// the same shape the engine-side typed lookup has.
    #[derive(Debug, PartialEq)]
    enum Kind {
        Timer,
        Sprite,
    }

    fn resolve_as(requested: Kind) -> impl FnOnce(&str) -> Option<Kind> {
        move |path| {
            if path == "Timer" && requested == Kind::Timer {
                Some(Kind::Timer)
            } else {
                None
            }
        }
    }

    #[test]
    fn find_returns_match() {
        let got = find("try_get_node", "Timer", resolve_as(Kind::Timer));
        assert_eq!(got, Some(Kind::Timer));
    }

    #[test]
    fn find_misses_on_wrong_type() {
        // Same name, different requested kind: a normal miss, not a panic.
        let got = find("try_get_node", "Timer", resolve_as(Kind::Sprite));
        assert_eq!(got, None);
    }

    #[test]
    fn find_misses_on_absent_name() {
        let got = find("try_get_node", "Ghost", resolve_as(Kind::Timer));
        assert_eq!(got, None);
    }

    #[test]
    #[should_panic(expected = "try_get_node: node name/path must not be empty")]
    fn find_panics_on_empty_name() {
        find("try_get_node", "", resolve_as(Kind::Timer));
    }

    #[test]
    #[should_panic(expected = "try_get_node: node name/path must not be empty")]
    fn find_panics_on_whitespace_name() {
        find("try_get_node", " \t ", resolve_as(Kind::Timer));
    }

    #[test]
    fn find_under_owner_returns_target() {
        let got = find_under_owner(
            "get_node_child_by_owner",
            "WorldLayer/Timer",
            Some("Game"),
            |owner, path| (*owner == "Game" && path == "WorldLayer/Timer").then_some(Kind::Timer),
        );
        assert_eq!(got, Kind::Timer);
    }

    #[test]
    #[should_panic(expected = "get_node_child_by_owner: owner not found")]
    fn find_under_owner_panics_without_owner() {
        let owner: Option<&str> = None;
        find_under_owner("get_node_child_by_owner", "WorldLayer/Timer", owner, |_, _| {
            Some(Kind::Timer)
        });
    }

    #[test]
    #[should_panic(expected = "node by path 'WorldLayer/Ghost' not found")]
    fn find_under_owner_panics_on_unresolved_path() {
        // An absent target is a hard error here, never a None result.
        find_under_owner(
            "get_node_child_by_owner",
            "WorldLayer/Ghost",
            Some("Game"),
            |_, _| None::<Kind>,
        );
    }

    #[test]
    #[should_panic(expected = "must not be empty or whitespace")]
    fn blank_path_is_checked_before_owner() {
        // Argument validation wins even when the owner is also missing.
        let owner: Option<&str> = None;
        find_under_owner("get_node_child_by_owner", "  ", owner, |_, _| {
            Some(Kind::Timer)
        });
    }
}
