mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ledgerd={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let ledger = settings.ledger.build()?;
    tracing::info!(
        amount_policy = ledger.amount_policy().as_str(),
        timezone = ledger.timezone().name(),
        "ledger ready"
    );

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    server::run_with_listener(ledger, listener).await?;

    Ok(())
}
