use clap::Parser;
use stem_leaf_plot::core::render::{render_text, RenderOptions};
use stem_leaf_plot::utils::{logger, validation::Validate};
use stem_leaf_plot::{CliConfig, LocalStorage, PlotEngine, PlotError, PlotPipeline, PlotSession};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting stem-leaf-plot");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Plot generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), PlotError> {
    let mut session = PlotSession::new(config.limit, config.alternate_limit);
    let options = RenderOptions::default();
    let passes = if config.toggle { 2 } else { 1 };

    for pass in 0..passes {
        let pass_config = if pass == 0 {
            config.clone()
        } else {
            config.toggled()
        };

        let snapshot = session.snapshot()?;
        println!("{}", render_text(snapshot, &options));

        if !config.no_bundle {
            // One directory per limit when both plots are written.
            let base = if config.toggle {
                format!("{}/limit_{}", config.output_path, pass_config.limit)
            } else {
                config.output_path.clone()
            };
            let storage = LocalStorage::new(base.clone());
            let pipeline = PlotPipeline::new(
                storage,
                CliConfig {
                    output_path: base,
                    ..pass_config
                },
            );

            // The session already holds this limit's snapshot; only the write remains.
            let output_path = PlotEngine::new(pipeline).write(snapshot)?;
            println!("📁 Output saved to: {}", output_path);
        }

        println!("[ {} ]", session.button_label());
        println!();
        session.toggle();
    }

    Ok(())
}
