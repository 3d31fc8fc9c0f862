// All analysis functionality is in wordscope-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod config_path;
pub mod model_manager;

// Re-export core types for convenience
pub use wordscope_core::*;

// Re-export CLI utilities
pub use config_path::resolve_config_path;
pub use model_manager::ModelManager;
