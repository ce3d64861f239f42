//! Browser console logging

use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .is_err()
    {
        wasm_logger::init(wasm_logger::Config::default());
    }
}
