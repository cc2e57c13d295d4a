//! Replay Test Generator - session recording to Playwright test converter

use replay_testgen::app::cli::{test_name_from_path, Cli, Commands, ConfigAction};
use replay_testgen::app::config::Config;
use replay_testgen::events::stream::load_events;
use replay_testgen::pipeline::converter::{ConverterOptions, SessionConverter};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Convert {
            input,
            output,
            name,
        } => run_convert(&input, output, name, &config)?,
        Commands::Inspect { input } => run_inspect(&input, &config)?,
        Commands::Init { force } => run_init(force, &config)?,
        Commands::Config { action } => run_config(action, &config)?,
    }

    Ok(())
}

fn run_convert(
    input: &Path,
    output: Option<PathBuf>,
    name: Option<String>,
    config: &Config,
) -> anyhow::Result<()> {
    info!("Converting recording {:?}", input);

    if !input.exists() {
        anyhow::bail!("Recording file not found: {:?}", input);
    }

    let events = load_events(input)?;
    info!("Loaded {} events", events.len());

    let test_name = name.unwrap_or_else(|| test_name_from_path(input));

    let converter = SessionConverter::with_options(ConverterOptions {
        emitter: config.emitter_options(),
    });
    let conversion = converter.convert(&events, &test_name);

    let output_dir = output.unwrap_or_else(|| config.output.dir.clone());
    std::fs::create_dir_all(&output_dir)?;

    let script_path = output_dir.join(format!("{}.spec.ts", test_name));
    std::fs::write(&script_path, &conversion.script)?;

    let summary_path = output_dir.join(format!("{}.summary.json", test_name));
    std::fs::write(&summary_path, conversion.summary.to_json()?)?;

    info!("Generated test at {:?}", script_path);

    println!("{}", conversion.summary.render_text());
    println!("Output:");
    println!("  Test:    {}", script_path.display());
    println!("  Summary: {}", summary_path.display());

    Ok(())
}

fn run_inspect(input: &Path, config: &Config) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("Recording file not found: {:?}", input);
    }

    let events = load_events(input)?;
    let test_name = test_name_from_path(input);

    let converter = SessionConverter::with_options(ConverterOptions {
        emitter: config.emitter_options(),
    });
    let conversion = converter.convert(&events, &test_name);

    println!("{}", conversion.summary.render_text());

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    std::fs::create_dir_all(&config.output.dir)?;
    println!("Created output directory: {}", config.output.dir.display());

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}
