//! Account screen and customer registration for the storefront client.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod session;
pub mod ui;
pub mod validation;
pub mod worker;
