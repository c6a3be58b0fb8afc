//! Fixtures and helpers shared by the workspace test suites

pub mod asserts;
pub mod cms;
pub mod der;
pub mod logging;
