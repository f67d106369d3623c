pub mod phase;
pub mod serialization;
pub mod state;
