use opentelemetry::trace::TracerProvider;
use opentelemetry::{KeyValue, global};
use opentelemetry_otlp::{ExporterBuildError, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::metrics::{PeriodicReader, SdkMeterProvider, Temporality};
use opentelemetry_sdk::trace::{RandomIdGenerator, Sampler, SdkTracerProvider};
use opentelemetry_semantic_conventions::SCHEMA_URL;
use opentelemetry_semantic_conventions::resource::{DEPLOYMENT_ENVIRONMENT_NAME, SERVICE_NAME, SERVICE_VERSION};
use sentry::ClientInitGuard;
use sentry_tracing::EventFilter;
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;
use tracing_core::{Level, LevelFilter};
use tracing_opentelemetry::{MetricsLayer, OpenTelemetryLayer};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use typed_builder::TypedBuilder;

const METRIC_EXPORT_INTERVAL: Duration = Duration::from_secs(30);

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    // Must be filled in by the binary, otherwise the sentry release names this crate
    pub package: &'static str,
    pub version: &'static str,
    #[builder(default)]
    pub sentry_dsn: Option<String>,
    #[builder(setter(into), default = String::from("dev"))]
    pub env: String,
    #[builder(default)]
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Exporter(#[from] ExporterBuildError),
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps sentry and the OpenTelemetry exporters alive. Flushes both on drop.
pub struct TracingGuard {
    _sentry: ClientInitGuard,
    providers: Option<(SdkTracerProvider, SdkMeterProvider)>,
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        if let Some((tracer_provider, meter_provider)) = &self.providers {
            if let Err(err) = tracer_provider.shutdown() {
                eprintln!("Error during tracer provider shutdown:\n{err:?}");
            }
            if let Err(err) = meter_provider.shutdown() {
                eprintln!("Error during meter provider shutdown:\n{err:?}");
            }
        }
    }
}

fn init_sentry(config: &TracingConfig) -> ClientInitGuard {
    sentry::init((
        config.sentry_dsn.clone(),
        sentry::ClientOptions {
            release: Some(Cow::Owned(format!("{}@{}", config.package, config.version))),
            environment: Some(Cow::Owned(config.env.clone())),
            ..Default::default()
        },
    ))
}

fn init_meter_provider(resource: Resource, endpoint: String) -> Result<SdkMeterProvider, ExporterBuildError> {
    let exporter = MetricExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .with_temporality(Temporality::default())
        .build()?;

    let reader = PeriodicReader::builder(exporter)
        .with_interval(METRIC_EXPORT_INTERVAL)
        .build();

    let meter_provider = SdkMeterProvider::builder()
        .with_resource(resource)
        .with_reader(reader)
        .build();
    global::set_meter_provider(meter_provider.clone());

    Ok(meter_provider)
}

fn init_tracer_provider(resource: Resource, endpoint: String) -> Result<SdkTracerProvider, ExporterBuildError> {
    let exporter = SpanExporter::builder().with_tonic().with_endpoint(endpoint).build()?;

    let tracer_provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource)
        .build();
    global::set_tracer_provider(tracer_provider.clone());

    Ok(tracer_provider)
}

fn init_otel(
    config: &TracingConfig,
    endpoint: &str,
) -> Result<(SdkTracerProvider, SdkMeterProvider), ExporterBuildError> {
    global::set_text_map_propagator(opentelemetry_sdk::propagation::TraceContextPropagator::new());
    let keys = [
        KeyValue::new(SERVICE_NAME, config.package),
        KeyValue::new(SERVICE_VERSION, config.version),
        KeyValue::new(DEPLOYMENT_ENVIRONMENT_NAME, config.env.clone()),
    ];
    let resource = Resource::builder().with_schema_url(keys, SCHEMA_URL).build();

    let meter_provider = init_meter_provider(resource.clone(), endpoint.to_owned())?;
    let tracer_provider = init_tracer_provider(resource, endpoint.to_owned())?;
    Ok((tracer_provider, meter_provider))
}

/// Installs the global subscriber: fmt output filtered by `RUST_LOG` (default `info`), sentry events for errors,
/// breadcrumbs for everything above trace and, if an OTLP endpoint is configured, traces and metrics.
pub fn setup(config: TracingConfig) -> Result<TracingGuard, Error> {
    let guard = init_sentry(&config);

    let sentry_layer = sentry_tracing::layer().event_filter(|md| match *md.level() {
        Level::ERROR => EventFilter::Event,
        Level::TRACE => EventFilter::Ignore,
        _ => EventFilter::Breadcrumb,
    });

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(sentry_layer);

    let providers = config
        .otlp_endpoint
        .as_deref()
        .map(|endpoint| init_otel(&config, endpoint))
        .transpose()?;

    let (metrics_layer, otel_layer) = match &providers {
        Some((tracer_provider, meter_provider)) => (
            Some(MetricsLayer::new(meter_provider.clone())),
            Some(OpenTelemetryLayer::new(TracerProvider::tracer(tracer_provider, config.package))),
        ),
        None => (None, None),
    };
    subscriber.with(metrics_layer).with(otel_layer).try_init()?;

    Ok(TracingGuard {
        _sentry: guard,
        providers,
    })
}
