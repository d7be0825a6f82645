use anyhow::Context;
use clap::Parser;
use stem_leaf_plot::core::render::render_text;
use stem_leaf_plot::core::ConfigProvider;
use stem_leaf_plot::utils::{logger, validation::Validate};
use stem_leaf_plot::{LocalStorage, PlotEngine, PlotPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-plot")]
#[command(about = "Stem and leaf plot driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "plot-config.toml")]
    config: String,

    /// Override plot.limit from config
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Dry run - show what would be produced without writing the bundle
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based plot generator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Some(limit) = args.limit {
        config.plot.limit = limit;
        tracing::info!("🔧 Limit overridden to: {}", limit);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    let options = config.render_options();
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = PlotEngine::new(PlotPipeline::new(storage, config));

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No bundle will be written");
        let snapshot = engine.compute()?;
        println!("{}", render_text(&snapshot, &options));
        println!(
            "Would write {} to {}",
            engine.pipeline().config().output_formats().join(", "),
            engine.pipeline().config().bundle_filename()
        );
        return Ok(());
    }

    match engine.run() {
        Ok(run) => {
            println!("{}", render_text(&run.snapshot, &options));
            tracing::info!("✅ Plot generated successfully!");
            println!("📁 Output saved to: {}", run.output_path);
        }
        Err(e) => {
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
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Limit: {}", config.limit());
    tracing::info!("  Alternate limit: {}", config.alternate_limit());
    tracing::info!("  Output: {}/{}", config.output_path(), config.bundle_filename());
    tracing::info!("  Formats: {}", config.output_formats().join(", "));
}
