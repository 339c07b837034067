mod auth;
pub mod client;
mod dashboard;
pub mod resources;
pub mod types;

pub use client::*;
pub use resources::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
