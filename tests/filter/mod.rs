//! `$filter` builder tests through the public API.

pub mod composition;
pub mod legacy;
