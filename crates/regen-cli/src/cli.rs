use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "regen",
    about = "Derive, decode and store Regen content-addressed IRIs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML config file (default: ./regen.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database holding stored graph documents
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive the IRI of a graph document or raw file
    Iri(IriArgs),
    /// Print the canonical N-Quads of a JSON-LD document
    Canonicalize(InputArgs),
    /// Validate an IRI and show what it encodes
    Decode(DecodeArgs),
    /// Store a JSON-LD document under its graph IRI
    Put(InputArgs),
    /// Print the document stored under an IRI
    Get(GetArgs),
    /// Show the effective configuration
    Config,
}

#[derive(Args)]
pub struct IriArgs {
    #[command(subcommand)]
    pub target: IriTarget,
}

#[derive(Subcommand)]
pub enum IriTarget {
    /// IRI of a JSON-LD document (`-` reads stdin)
    Graph(InputArgs),
    /// IRI of a file's raw bytes (`-` reads stdin)
    Raw(RawArgs),
}

#[derive(Args)]
pub struct InputArgs {
    pub path: String,
}

#[derive(Args)]
pub struct RawArgs {
    pub path: String,
    /// File extension to record; defaults to the file's own extension
    #[arg(long)]
    pub ext: Option<String>,
}

#[derive(Args)]
pub struct DecodeArgs {
    pub iri: String,
}

#[derive(Args)]
pub struct GetArgs {
    pub iri: String,
    /// Show timestamps along with the document
    #[arg(long)]
    pub record: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_raw_with_ext() {
        let cli = Cli::try_parse_from(["regen", "iri", "raw", "photo.dat", "--ext", "png"]).unwrap();
        match cli.command {
            Command::Iri(IriArgs {
                target: IriTarget::Raw(args),
            }) => {
                assert_eq!(args.path, "photo.dat");
                assert_eq!(args.ext.as_deref(), Some("png"));
            }
            _ => panic!("expected iri raw"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "regen",
            "get",
            "regen:abc.rdf",
            "--database",
            "/tmp/x.db",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.db")));
    }
}
