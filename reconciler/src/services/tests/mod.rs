//! Service-specific tests

mod broadcaster;
