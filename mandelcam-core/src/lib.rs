pub mod complex;
pub mod config;
pub mod error;
pub mod presets;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use config::ViewportConfig;
pub use error::CoreError;
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
