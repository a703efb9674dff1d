use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use viewbridge_core::GeneratorTarget;

use super::{UnwrapOrExit, input::InputArgs};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory for Kotlin sources (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let input = self.input.load().unwrap_or_exit();
        let swift_dir = match input.target {
            GeneratorTarget::Primary => Some(input.options.swift_output_path().unwrap_or_exit()),
            _ => None,
        };

        let ctx = ops::finish(&input.manifest, &input.options, input.target);
        let report = ops::generate(
            &ctx,
            GenerateOptions {
                kotlin_dir: &self.output,
                swift_dir: swift_dir.as_deref(),
                framework_module: input.options.swift_framework_module(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }
}
