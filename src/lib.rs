// Reusable library API, visible to both CLI and WASM builds
pub mod builder;
pub mod errors;
pub mod grid;
pub mod log;
pub mod numbering;
pub mod placement;
pub mod puzzle;
pub mod render;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
