//! State Management
//!
//! Global application state and browser storage.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
