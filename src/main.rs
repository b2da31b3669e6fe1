use anyhow::{Context, Result};
use clap::Parser;
use paramgen::{
    cli::{render_manifest, ParamgenArgs},
    Converter, Source,
};
use std::io::{self, IsTerminal};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let args = ParamgenArgs::parse();

    // ─── 1) init logging (stderr; stdout carries the manifest) ──────
    let env =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) resolve source ───────────────────────────────────────────
    let source = Source::resolve(args.input.clone(), io::stdin().is_terminal())?;
    info!(source = %source.name(), out_dir = %args.out_dir.display(), "startup");

    // ─── 3) convert ──────────────────────────────────────────────────
    let converter = Converter::new(args.converter_options());
    let manifest = converter
        .convert_source(&source, &args.source_options())
        .with_context(|| format!("converting {}", source.name()))?;

    // ─── 4) report ───────────────────────────────────────────────────
    let rendered =
        render_manifest(&manifest, args.manifest_format).context("rendering manifest")?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    info!(files = manifest.len(), "all done");
    Ok(())
}
