//! Platform abstraction layer
//!
//! Browser/native implementations of the capabilities the game calls into:
//! - Drawing surface
//! - Sound playback
//! - High score storage
//! - Theme lookup (CSS custom properties on web)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;
