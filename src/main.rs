use anyhow::Context;
use studio_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load studio settings")?;
    studio_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        seed = settings.seed.enabled,
        "studio-app bootstrap starting"
    );

    studio_app::run(settings).await
}
