pub mod data;
pub mod plot_configs;
pub mod primitives;
pub mod series;
pub mod state;

// Re-export everything for convenience
pub use data::*;
pub use plot_configs::*;
pub use primitives::*;
pub use series::*;
pub use state::*;
