pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // module names add nothing for a single service
        .with_target(false)
        // plain output for log collectors
        .with_ansi(false)
        // the collector stamps ingestion time
        .without_time()
        .json()
        .init();
}
