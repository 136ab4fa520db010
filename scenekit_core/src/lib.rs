// scenekit_core — engine-independent contracts for the scenekit helpers.
//
// The gdext crate (`scenekit_gdext`) is a thin translation layer over the
// Godot API; everything about the helpers that can be decided without a
// running engine lives here so it can be tested with plain `cargo test`.
//
// Module overview:
// - `text.rs`:   Blank-argument detection and the print sink's
//                separator-free concatenation convention.
// - `lookup.rs`: The lookup contract — which failures are normal misses
//                and which are panics — written over resolution callbacks
//                instead of engine handle types.

pub mod lookup;
pub mod text;

pub use lookup::{find, find_under_owner, require_path};
pub use text::{concat, is_blank};
