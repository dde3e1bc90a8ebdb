use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUIZ_TURNS: CounterVec = register_counter_vec!(
        "quiz_turns_total",
        "Number of quiz turns by outcome",
        &["outcome"]
    )
    .unwrap();
    pub static ref QUESTIONS_CREATED: Counter =
        register_counter!("questions_created_total", "Number of created questions").unwrap();
    pub static ref QUESTIONS_DELETED: Counter =
        register_counter!("questions_deleted_total", "Number of deleted questions").unwrap();
}

pub fn init_tracing() {
    let mut fmt_layer = fmt::layer();
    if std::env::var("INCLUDE_SPAN_EVENTS").is_ok_and(|value| value.eq_ignore_ascii_case("true")) {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }
    let filter_layer = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
