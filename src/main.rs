use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use loose::areas::repository::Repository;
use loose::commands::plumbing::cat_file::CatFileMode;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "loose",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A reader for git loose objects",
    long_about = "This tool decodes the loose objects of a git repository: blobs, trees and commits. \
    It never writes to the repository and does not understand pack files.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        help = "Run as if started in this directory instead of the current one"
    )]
    path: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "cat-file",
        about = "Print the content, type or size of an object",
        long_about = "This command prints information about an object in the repository. \
        It requires the SHA of the object and exactly one of -p, -t or -s.",
        group = ArgGroup::new("mode").required(true).multiple(false)
    )]
    CatFile {
        #[arg(short = 'p', group = "mode", help = "Pretty-print the object content")]
        pretty: bool,
        #[arg(short = 't', group = "mode", help = "Show the object type")]
        show_type: bool,
        #[arg(short = 's', group = "mode", help = "Show the object size")]
        size: bool,
        #[arg(index = 1, help = "The object SHA")]
        sha: String,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree object, or of the tree of a commit."
    )]
    LsTree {
        #[arg(short = 'r', help = "Recurse into sub-trees")]
        recursive: bool,
        #[arg(index = 1, help = "The tree or commit SHA")]
        sha: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };
    let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::CatFile {
            pretty,
            show_type,
            size,
            sha,
        } => {
            let mode = match (*pretty, *show_type, *size) {
                (true, _, _) => CatFileMode::Pretty,
                (_, true, _) => CatFileMode::Type,
                _ => CatFileMode::Size,
            };

            repository.cat_file(sha, mode)?
        }
        Commands::LsTree { recursive, sha } => repository.ls_tree(sha, *recursive)?,
    }

    repository.writer().flush()?;

    Ok(())
}
