pub mod core_network;
pub mod logging;

pub use core_network::{CoreNetwork, NetworkCore};
