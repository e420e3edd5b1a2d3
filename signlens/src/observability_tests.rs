mod observability_tests {
    use metrics::{counter, histogram};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    #[test]
    fn test_prometheus_render_includes_recorded_metrics() {
        // The only test in this binary that installs the global recorder.
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install recorder");

        counter!("signlens_predictions_total", 1, "outcome" => "ok");
        histogram!("signlens_inference_seconds", 0.25);

        let output = handle.render();
        assert!(output.contains("signlens_predictions_total"));
        assert!(output.contains("outcome=\"ok\""));
        assert!(output.contains("signlens_inference_seconds"));
    }

    #[test]
    fn test_tracing_setup() {
        let result = tracing_subscriber::registry()
            .with(EnvFilter::try_new("info").unwrap_or_else(|_| EnvFilter::new("error")))
            .try_init();

        // Another test may have installed a global subscriber first.
        if result.is_ok() {
            info!("Tracing initialized successfully for test");
        }
    }
}
