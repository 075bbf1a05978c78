// extensions/mod.rs
//
// Small helpers games opt into. No dependency on game state.

pub mod approach;

pub use approach::approach;
