// src/main.rs

use anyhow::Result;
use bitmath_recipe::{
    discover_version_file, parse_recipe_file, validate_recipe, BuildDefinitions, Kitchen,
    KitchenConfig,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "bitmath-recipe")]
#[command(author, version, about = "Builds and packages the Bit::math C++ library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full packaging sequence: configure, install, bundle license
    Package {
        /// Recipe file
        #[arg(short, long, default_value = "bitmath.toml")]
        recipe: PathBuf,
        /// Library source tree
        #[arg(short, long, default_value = ".")]
        source_dir: PathBuf,
        /// Package output tree
        #[arg(short, long, default_value = "package")]
        output_dir: PathBuf,
        /// Build and install the generated documentation
        /// (overrides the recipe default; `--install-docs=false` disables)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        install_docs: Option<bool>,
        /// Request a shared build (accepted, currently without effect)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        shared: Option<bool>,
        /// Use a fixed build directory and keep it afterwards
        #[arg(long)]
        build_dir: Option<PathBuf>,
    },
    /// Show the version discovered from the build configuration
    Version {
        /// Recipe file
        #[arg(short, long, default_value = "bitmath.toml")]
        recipe: PathBuf,
        /// Library source tree
        #[arg(short, long, default_value = ".")]
        source_dir: PathBuf,
    },
    /// Show the build definitions derived from the options
    Definitions {
        /// Recipe file
        #[arg(short, long, default_value = "bitmath.toml")]
        recipe: PathBuf,
        /// Build and install the generated documentation
        /// (overrides the recipe default; `--install-docs=false` disables)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        install_docs: Option<bool>,
        /// Request a shared build (accepted, currently without effect)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        shared: Option<bool>,
    },
    /// Validate a recipe file
    Validate {
        /// Recipe file
        #[arg(short, long, default_value = "bitmath.toml")]
        recipe: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Package {
            recipe,
            source_dir,
            output_dir,
            install_docs,
            shared,
            build_dir,
        } => {
            let mut recipe = parse_recipe_file(&recipe)?;
            recipe.options = recipe.options.merge_cli(install_docs, shared);

            info!("Packaging {} from {}", recipe.package.name, source_dir.display());

            let config = KitchenConfig {
                source_dir,
                output_dir,
                build_dir,
                ..KitchenConfig::default()
            };
            let kitchen = Kitchen::new(config, &recipe);
            let result = kitchen.package_cmake(&recipe)?;

            println!(
                "Packaged {} {}",
                recipe.package_id(),
                result
                    .version
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "(unknown version)".to_string())
            );
            println!("  Output: {}", result.package_dir.display());
            for warning in result.warnings {
                println!("  warning: {}", warning);
            }
            Ok(())
        }
        Commands::Version { recipe, source_dir } => {
            let recipe = parse_recipe_file(&recipe)?;
            let source = source_dir.join(&recipe.package.version_source);
            match discover_version_file(&source) {
                Some(version) => println!("{}", version),
                None => println!("unknown"),
            }
            Ok(())
        }
        Commands::Definitions {
            recipe,
            install_docs,
            shared,
        } => {
            let mut recipe = parse_recipe_file(&recipe)?;
            recipe.options = recipe.options.merge_cli(install_docs, shared);

            for (flag, value) in BuildDefinitions::derive(&recipe.options).iter() {
                println!("{}={}", flag, value);
            }
            Ok(())
        }
        Commands::Validate { recipe } => {
            let path = recipe;
            let recipe = parse_recipe_file(&path)?;
            let warnings = validate_recipe(&recipe)?;
            if warnings.is_empty() {
                println!("{}: OK", path.display());
            } else {
                println!("{}: OK with warnings", path.display());
                for warning in warnings {
                    println!("  warning: {}", warning);
                }
            }
            Ok(())
        }
    }
}
