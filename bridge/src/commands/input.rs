use std::path::PathBuf;

use clap::Args;
use viewbridge_core::{GeneratorTarget, Platform};
use viewbridge_manifest::{BridgeOptions, Manifest, Result, parse_override};

/// Arguments shared by every command that runs the declaration pipeline.
#[derive(Args)]
pub struct InputArgs {
    /// Path to bridge.toml (defaults to ./bridge.toml)
    #[arg(short, long, default_value = "bridge.toml")]
    pub config: PathBuf,

    /// Platform of the current compilation (repeatable, replaces the manifest list)
    #[arg(long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<Platform>,

    /// Override an option from bridge.toml (repeatable)
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub options: Vec<(String, String)>,
}

/// A parsed manifest with command-line overrides applied.
pub struct Input {
    pub manifest: Manifest,
    pub options: BridgeOptions,
    pub target: GeneratorTarget,
}

impl InputArgs {
    pub fn load(&self) -> Result<Input> {
        let manifest = Manifest::from_file(&self.config)?;

        let mut options = manifest.bridge_options();
        options.merge(self.options.iter().cloned());

        let platforms = if self.platforms.is_empty() {
            manifest.platforms.as_slice()
        } else {
            self.platforms.as_slice()
        };
        let target = options.classify_target(platforms)?;

        tracing::info!(
            config = %self.config.display(),
            declarations = manifest.declaration_count(),
            %target,
            "loaded manifest"
        );

        Ok(Input {
            manifest,
            options,
            target,
        })
    }
}
