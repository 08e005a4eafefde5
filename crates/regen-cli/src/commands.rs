use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use regen_iri::{decode_iri, derive_address_for_graph_str, derive_address_for_reader};
use regen_registry::{Registry, RegistryError, SqliteDocumentStore};
use serde_json::{json, Value};
use tracing::warn;

use crate::cli::*;
use crate::config::RegistryConfig;

pub fn run_command(
    command: Command,
    format: OutputFormat,
    config: &RegistryConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Iri(IriArgs {
            target: IriTarget::Graph(args),
        }) => cmd_iri_graph(args, format, out),
        Command::Iri(IriArgs {
            target: IriTarget::Raw(args),
        }) => cmd_iri_raw(args, format, config, out),
        Command::Canonicalize(args) => cmd_canonicalize(args, out),
        Command::Decode(args) => cmd_decode(args, format, out),
        Command::Put(args) => cmd_put(args, format, config, out),
        Command::Get(args) => cmd_get(args, format, config, out),
        Command::Config => cmd_config(format, config, out),
    }
}

fn cmd_iri_graph(args: InputArgs, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = read_input(&args.path)?;
    let iri = derive_address_for_graph_str(&text)?;
    match format {
        OutputFormat::Text => writeln!(out, "{iri}")?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "iri": iri, "kind": "graph" }))?,
    }
    Ok(())
}

fn cmd_iri_raw(
    args: RawArgs,
    format: OutputFormat,
    config: &RegistryConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let extension = args
        .ext
        .or_else(|| {
            Path::new(&args.path)
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| config.default_extension.clone());

    let iri = if args.path == "-" {
        derive_address_for_reader(io::stdin().lock(), &extension)?
    } else {
        let file =
            File::open(&args.path).with_context(|| format!("failed to open {}", args.path))?;
        derive_address_for_reader(io::BufReader::new(file), &extension)?
    };

    match format {
        OutputFormat::Text => writeln!(out, "{iri}")?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({ "iri": iri, "kind": "raw", "extension": iri.suffix() })
        )?,
    }
    Ok(())
}

fn cmd_canonicalize(args: InputArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = read_input(&args.path)?;
    let graph = regen_graph::canonicalize_str(&text)?;
    write!(out, "{graph}")?;
    Ok(())
}

fn cmd_decode(args: DecodeArgs, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    let decoded = decode_iri(&args.iri)?;
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} {}", "✓".green().bold(), args.iri.bold())?;
            writeln!(out, "  Kind:   {}", decoded.kind.to_string().cyan())?;
            writeln!(out, "  Digest: {}", decoded.digest.to_hex().yellow())?;
            writeln!(out, "  Suffix: {}", decoded.kind.suffix())?;
        }
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({
                "iri": args.iri,
                "kind": decoded.kind,
                "digest": decoded.digest.to_hex(),
                "suffix": decoded.kind.suffix(),
            })
        )?,
    }
    Ok(())
}

fn cmd_put(
    args: InputArgs,
    format: OutputFormat,
    config: &RegistryConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let text = read_input(&args.path)?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", args.path))?;
    let registry = open_registry(config)?;
    let stored = registry.insert_from_graph(&document)?;
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} Stored {}", "✓".green().bold(), stored.iri.bold())?
        }
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({
                "iri": stored.iri,
                "created_at": stored.created_at,
                "updated_at": stored.updated_at,
            })
        )?,
    }
    Ok(())
}

fn cmd_get(
    args: GetArgs,
    format: OutputFormat,
    config: &RegistryConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let registry = open_registry(config)?;
    let record = match registry.fetch_record(&args.iri) {
        Ok(record) => record,
        Err(RegistryError::NotFound(iri)) => {
            warn!(%iri, "no stored document");
            anyhow::bail!("no document stored under {iri}");
        }
        Err(e) => return Err(e.into()),
    };

    let value = if args.record {
        serde_json::to_value(&record)?
    } else {
        record.document
    };
    match format {
        OutputFormat::Text => writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?,
        OutputFormat::Json => writeln!(out, "{value}")?,
    }
    Ok(())
}

fn cmd_config(
    format: OutputFormat,
    config: &RegistryConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", config.to_toml_string()?)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(config)?)?,
    }
    Ok(())
}

fn open_registry(config: &RegistryConfig) -> anyhow::Result<Registry<SqliteDocumentStore>> {
    let store = SqliteDocumentStore::open(&config.database_path).with_context(|| {
        format!(
            "failed to open database {}",
            config.database_path.display()
        )
    })?;
    Ok(Registry::new(store))
}

/// Read a whole file as text; `-` means stdin.
fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}
