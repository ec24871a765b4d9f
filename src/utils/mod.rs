// Shared utils

pub mod chart_ffi;
pub mod constants;
pub mod storage;
pub mod time;

pub use constants::*;
pub use storage::*;
