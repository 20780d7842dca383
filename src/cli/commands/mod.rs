//! Command implementations

mod analyze;
mod distribute;
mod init;
#[cfg(feature = "server")]
mod serve;

pub use analyze::analyze;
pub use distribute::distribute;
pub use init::init;
#[cfg(feature = "server")]
pub use serve::serve;
