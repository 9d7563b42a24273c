use anyhow::Context;
use clap::Parser;
use ttgen::{compile_file_to_program, init_logging, CliArgs, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    // Wrong argument counts print usage and exit with status 2 here
    let args = CliArgs::parse();
    init_logging(&args.logging_config())?;

    let config = GeneratorConfig::from_args(&args);
    compile_file_to_program(&args.template, &args.output, &config)
        .with_context(|| format!("Failed to compile template '{}'", args.template.display()))?;

    println!(
        "Successfully compiled template '{}' to '{}'",
        args.template.display(),
        args.output.display()
    );
    Ok(())
}
