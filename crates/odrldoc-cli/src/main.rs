use anyhow::Result;
use clap::{Parser, Subcommand};
use odrldoc_cli::{env_filter, generate, list, GenerateOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odrldoc")]
#[command(about = "Generate AsciiDoc pages for ODRL policies in an RDF catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one page per odrl:Policy
    Generate {
        /// Turtle (.ttl) or N-Triples (.nt) file, or a glob pattern (repeatable)
        #[arg(long, short, required = true)]
        input: Vec<String>,

        /// Root directory the output directory is resolved against
        #[arg(long, default_value = ".")]
        output_root: PathBuf,

        /// Page directory under the output root (default: modules/policy/pages/)
        #[arg(long)]
        output_dir: Option<String>,

        /// YAML config file (falls back to ODRLDOC_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base IRI for relative IRIs in Turtle input
        #[arg(long)]
        base_iri: Option<String>,

        /// Sort table rows by UID and assignees
        #[arg(long)]
        sort: bool,
    },

    /// Show the policies found in the input graph
    List {
        /// Turtle (.ttl) or N-Triples (.nt) file, or a glob pattern (repeatable)
        #[arg(long, short, required = true)]
        input: Vec<String>,

        /// Base IRI for relative IRIs in Turtle input
        #[arg(long)]
        base_iri: Option<String>,

        /// Output format: json, text (default: text)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so listings on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            input,
            output_root,
            output_dir,
            config,
            base_iri,
            sort,
        } => {
            let options = GenerateOptions {
                inputs: input,
                output_root,
                output_dir,
                config,
                base_iri,
                sort,
            };
            let count = generate(&options)?;
            if count > 0 {
                tracing::info!(
                    "Wrote {} policy pages under {}",
                    count,
                    options.output_root.display()
                );
            }
        }
        Commands::List {
            input,
            base_iri,
            format,
        } => {
            println!("{}", list(&input, base_iri.as_deref(), &format)?);
        }
    }

    Ok(())
}
