#![allow(dead_code)]

use std::sync::Once;

pub mod cli;

pub use cli::{RunWorkspace, vd_command};

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        verdict::logging::init_test_logging();
    });
}
