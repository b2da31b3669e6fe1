//! Command line arguments for the `paramgen` binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::{
    convert::{ConverterOptions, DEFAULT_PREFIX},
    source::SourceOptions,
};

/// Generate one deployment-parameters JSON file per CSV row.
#[derive(Parser, Debug, Clone)]
#[command(name = "paramgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ParamgenArgs {
    /// CSV file to read; `-` or nothing reads piped stdin
    pub input: Option<PathBuf>,

    /// Output file name prefix
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Directory the documents are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Trim whitespace around headers and fields
    #[arg(long)]
    pub trim: bool,

    /// Pretty-print the documents
    #[arg(long)]
    pub pretty: bool,

    /// Succeed with no output when the input has headers but no rows
    #[arg(long)]
    pub allow_empty: bool,

    /// How the list of written files is printed
    #[arg(long, value_enum, default_value_t = ManifestFormat::Lines)]
    pub manifest_format: ManifestFormat,

    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// One file name per line
    Lines,
    /// A JSON array of file names
    Json,
}

impl ParamgenArgs {
    /// Fallback log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn converter_options(&self) -> ConverterOptions {
        ConverterOptions::default()
            .prefix(self.prefix.clone())
            .out_dir(self.out_dir.clone())
            .pretty(self.pretty)
    }

    pub fn source_options(&self) -> SourceOptions {
        SourceOptions::default()
            .delimiter(self.delimiter)
            .trim(self.trim)
            .allow_empty(self.allow_empty)
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let s = if s == "\\t" { "\t" } else { s };
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be one ASCII character, got {:?}", s)),
    }
}

/// Render the manifest for stdout.
pub fn render_manifest(files: &[String], format: ManifestFormat) -> serde_json::Result<String> {
    match format {
        ManifestFormat::Lines => Ok(files.join("\n")),
        ManifestFormat::Json => serde_json::to_string(files),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ParamgenArgs::try_parse_from(["paramgen", "in.csv"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.csv")));
        assert_eq!(args.prefix, "item-");
        assert_eq!(args.delimiter, b',');
        assert_eq!(args.manifest_format, ManifestFormat::Lines);
        assert_eq!(args.log_filter(), "info");
        assert_eq!(args.converter_options().prefix, "item-");
        assert!(!args.source_options().allow_empty);
    }

    #[test]
    fn flags_flow_into_options() {
        let args = ParamgenArgs::try_parse_from([
            "paramgen",
            "-p",
            "cfg-",
            "-o",
            "out",
            "-d",
            "\\t",
            "--trim",
            "--pretty",
            "--allow-empty",
            "--manifest-format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.input, None);
        let conv = args.converter_options();
        assert_eq!(conv.prefix, "cfg-");
        assert_eq!(conv.out_dir, PathBuf::from("out"));
        assert!(conv.pretty);
        let src = args.source_options();
        assert_eq!(src.delimiter, b'\t');
        assert!(src.trim && src.allow_empty);
        assert_eq!(args.log_filter(), "trace");
    }

    #[test]
    fn rejects_multi_char_delimiter() {
        assert!(ParamgenArgs::try_parse_from(["paramgen", "-d", ";;"]).is_err());
    }

    #[test]
    fn renders_manifest() -> serde_json::Result<()> {
        let files = vec!["cfg-0.json".to_string(), "cfg-1.json".to_string()];
        assert_eq!(
            render_manifest(&files, ManifestFormat::Lines)?,
            "cfg-0.json\ncfg-1.json"
        );
        assert_eq!(
            render_manifest(&files, ManifestFormat::Json)?,
            r#"["cfg-0.json","cfg-1.json"]"#
        );
        Ok(())
    }
}
