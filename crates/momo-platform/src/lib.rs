//! Browser adapters for the momo-core ports.

pub mod http;
pub mod storage;
