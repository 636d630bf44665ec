//! Small browser-adjacent utilities.

pub mod storage;
