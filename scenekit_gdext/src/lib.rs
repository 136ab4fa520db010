// scenekit_gdext — Godot-facing helper functions for gdext scene code.
//
// A small set of conveniences for game crates built on gdext
// (godot-rust): a logging facade over the engine's print/warning/error
// channels and node-lookup helpers that wrap scene-tree resolution with
// argument validation and typed casting. Every function is a thin
// delegation to the engine; the failure semantics live in
// `scenekit_core`, where they are unit-tested without an engine.
//
// This is a library crate, not an extension binary: the consuming game
// crate registers its own `ExtensionLibrary` entry point and links these
// helpers like any other dependency.
//
// Module overview:
// - `debug.rs`:    `log` / `log_warning` / `log_error`, plus the
//                  variadic `scene_log!` macro.
// - `node_ext.rs`: `try_get_node`, `get_node_child_by_owner`,
//                  `get_node_child_by_owner_2d`.

pub mod debug;
pub mod node_ext;

pub use debug::{log, log_error, log_warning};
pub use node_ext::{get_node_child_by_owner, get_node_child_by_owner_2d, try_get_node};
