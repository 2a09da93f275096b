//! Built-in decoration providers for the overtext overlay engine, plus
//! TOML-backed configuration for wiring them into an
//! [`OverlayManager`](overtext_engine::OverlayManager).
//!
//! Each provider is an ordinary [`DecorationProvider`]
//! implementation; hosts can register them directly, mix them with their
//! own, or build the whole set from an [`OverlayConfig`].
//!
//! [`DecorationProvider`]: overtext_engine::DecorationProvider

pub mod banner;
pub mod blockstyle;
pub mod config;
pub mod search;

pub use banner::{BannerConfig, PageBanner};
pub use blockstyle::{BlockStyle, BlockStyleConfig};
pub use config::{ConfigError, OverlayConfig};
pub use search::{SearchConfig, SearchHighlight};
