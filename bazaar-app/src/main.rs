use bazaar_app::{app_config::Config, run_abstract_factory, run_fruit_stand, run_prototype};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bazaar_app=debug,bazaar_order=info,bazaar_catalog=info,bazaar_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Running creational shop scenarios");

    let fruit_stand = run_fruit_stand(&config)?;
    tracing::info!("Factory method: {}", fruit_stand.summary());

    let abstract_factory = run_abstract_factory(&config)?;
    tracing::info!("Abstract factory: {}", abstract_factory.summary());

    let prototype = run_prototype(&config)?;
    tracing::info!("Prototype: {}", prototype.original.summary());
    tracing::info!(
        shared_catalog = prototype.shared_catalog,
        "Prototype clone: {}",
        prototype.cloned.summary()
    );

    Ok(())
}
