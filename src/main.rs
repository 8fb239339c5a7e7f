use brewnit::utils::{logger, validation::Validate};
use brewnit::{Catalog, CatalogView, CliConfig};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting brewnit catalog");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // Each collection is printed as soon as its own fetch settles.
    let format = cli.format;
    let mut catalog = Catalog::from_config(&config)?;
    let state = catalog
        .load_with(|settled| match CatalogView::render_settled(settled, format) {
            Ok(rendered) => println!("{}", rendered.trim_end()),
            Err(e) => tracing::error!("Failed to render {}: {}", settled.collection(), e),
        })
        .await;

    let failures = state.failures();
    for (collection, error) in &failures {
        eprintln!("⚠️  {} could not be loaded: {}", collection, error.message);
    }
    if !failures.is_empty() {
        std::process::exit(2);
    }

    Ok(())
}
