//! Domain-level frontend features. Routes import these modules so view code
//! stays focused while API handling lives in dedicated feature areas.

pub(crate) mod auth;
