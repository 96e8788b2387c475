//! Response post-processing stage applied by the routing layer.

/// Route-level options
mod options;
/// The stage itself
mod stage;

pub use options::{
    LocalizeMode,
    LocalizeOptions,
};
pub use stage::LocalizeResponse;
