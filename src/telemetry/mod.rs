use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing::warn;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Keeps the OTLP providers alive; flushes pending spans and logs on shutdown.
#[derive(Default)]
pub struct TelemetryGuard {
    providers: Option<(SdkLoggerProvider, SdkTracerProvider)>,
}

impl TelemetryGuard {
    pub fn shutdown(self) {
        let Some((logger_provider, tracer_provider)) = self.providers else {
            return;
        };

        if let Err(err) = tracer_provider.shutdown() {
            warn!(error = %err, "Failed to shut down tracer provider");
        }
        if let Err(err) = logger_provider.shutdown() {
            warn!(error = %err, "Failed to shut down logger provider");
        }
    }
}

pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard> {
    let env_filter = build_env_filter(&config.log_level, &config.excluded_modules)?;
    let fmt_layer = tracing_subscriber::fmt::layer().with_thread_names(true);

    if !config.enabled {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Installing tracing subscriber")?;
        return Ok(TelemetryGuard::default());
    }

    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .build();

    let logger_provider = build_logger_provider(config, resource.clone())?;
    let tracer_provider = build_tracer_provider(config, resource)?;
    let tracer = tracer_provider.tracer(config.service_name.clone());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(OpenTelemetryTracingBridge::new(&logger_provider))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()
        .context("Installing tracing subscriber")?;

    Ok(TelemetryGuard {
        providers: Some((logger_provider, tracer_provider)),
    })
}

fn build_env_filter(log_level: &str, excluded_modules: &[String]) -> Result<EnvFilter> {
    let mut filter = EnvFilter::new(log_level);

    for module in excluded_modules {
        let directive = format!("{}=off", module);
        filter = filter.add_directive(
            directive
                .parse()
                .with_context(|| format!("Invalid log directive '{}'", directive))?,
        );
    }

    Ok(filter)
}

fn build_tracer_provider(
    config: &TelemetryConfig,
    resource: Resource,
) -> Result<SdkTracerProvider> {
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&config.otlp_endpoint)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create span exporter: {}", e))?;

    Ok(SdkTracerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}

fn build_logger_provider(
    config: &TelemetryConfig,
    resource: Resource,
) -> Result<SdkLoggerProvider> {
    let exporter = LogExporter::builder()
        .with_tonic()
        .with_endpoint(&config.otlp_endpoint)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create log exporter: {}", e))?;

    Ok(SdkLoggerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}
