//! Query parameter container tests.

pub mod encoding;
