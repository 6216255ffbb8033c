use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use gitshell::config::{ConfigManager, Identity, Settings};
use gitshell::{logger, ChangeKind, GitCli, StatusEntry};

#[derive(Parser)]
#[command(name = "gitshell")]
#[command(about = "Typed front end for common git commands", long_about = None)]
#[command(version)]
struct Cli {
    /// Repository directory to run in
    #[arg(short = 'C', long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Executable to run instead of the configured one
    #[arg(long, global = true)]
    git: Option<String>,

    /// Log every git invocation
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the git version
    Version,

    /// Initialize a new repository
    Init,

    /// List changed paths
    Status {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stage every change in the working tree
    Add,

    /// Commit staged changes
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
    },

    /// Set the repository-local commit identity
    Identity {
        /// User name (defaults to the configured identity)
        #[arg(long)]
        name: Option<String>,

        /// User email (defaults to the configured identity)
        #[arg(long)]
        email: Option<String>,
    },

    /// Print the common ancestor of two commits
    MergeBase { first: String, second: String },

    /// List commit hashes of the current branch, most recent first
    Log,

    /// Switch to a branch or commit
    Checkout { reference: String },

    /// Create and switch to a new branch
    Branch { name: String },

    /// List paths that differ between two commits
    Diff { from: String, to: String },

    /// Print a file as stored in a commit
    Show { commit: String, path: String },

    /// List every file in a commit
    LsTree { commit: String },

    /// Resolve a reference to a commit hash
    RevParse { reference: String },

    /// Print the checked-out branch
    CurrentBranch,

    /// Show or update settings
    Config {
        /// Print the current settings
        #[arg(long)]
        show: bool,

        /// Store the executable to run
        #[arg(long)]
        program: Option<String>,

        /// Store a default identity name (requires --email)
        #[arg(long, requires = "email")]
        name: Option<String>,

        /// Store a default identity email (requires --name)
        #[arg(long, requires = "name")]
        email: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let settings = Settings::load()?;
    let program = cli.git.clone().unwrap_or_else(|| settings.program.clone());
    let git = GitCli::new(&cli.repo).with_program(program);

    match cli.command {
        Commands::Version => println!("{}", git.version()?),
        Commands::Init => {
            git.init()?;
            println!("{} Initialized repository in {}", "✓".green(), cli.repo.display());
        }
        Commands::Status { json } => {
            let entries = git.status()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_status(&entries);
            }
        }
        Commands::Add => git.stage_all()?,
        Commands::Commit { message } => git.commit(&message)?,
        Commands::Identity { name, email } => {
            let configured = settings.identity.as_ref();
            let name = name
                .or_else(|| configured.map(|i| i.name.clone()))
                .context("No user name given and none configured")?;
            let email = email
                .or_else(|| configured.map(|i| i.email.clone()))
                .context("No user email given and none configured")?;
            git.configure_user(&name, &email)?;
        }
        Commands::MergeBase { first, second } => println!("{}", git.merge_base(&first, &second)?),
        Commands::Log => print_lines(&git.log()?)?,
        Commands::Checkout { reference } => git.checkout(&reference)?,
        Commands::Branch { name } => git.create_branch(&name)?,
        Commands::Diff { from, to } => print_lines(&git.diff(&from, &to)?)?,
        Commands::Show { commit, path } => {
            let content = git.blob_bytes(&commit, &path)?;
            std::io::stdout()
                .write_all(&content)
                .context("Failed to write blob to stdout")?;
        }
        Commands::LsTree { commit } => print_lines(&git.ls_tree(&commit)?)?,
        Commands::RevParse { reference } => println!("{}", git.rev_parse(&reference)?),
        Commands::CurrentBranch => println!("{}", git.current_branch()?),
        Commands::Config {
            show,
            program,
            name,
            email,
        } => {
            let mut settings = settings;
            let changed = program.is_some() || name.is_some();
            if let Some(program) = program {
                settings.program = program;
            }
            if let (Some(name), Some(email)) = (name, email) {
                settings.identity = Some(Identity { name, email });
            }
            if changed {
                settings.save()?;
            }

            if show {
                println!("{}", toml::to_string_pretty(&settings)?);
            } else {
                println!("{}", ConfigManager::settings_path()?.display());
            }
        }
    }

    Ok(())
}

fn print_lines(lines: &[String]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn print_status(entries: &[StatusEntry]) {
    if entries.is_empty() {
        println!("{}", "nothing to commit, working tree clean".dimmed());
        return;
    }

    for entry in entries {
        let label = format!("{:>9}", entry.kind.label());
        let label = match entry.kind {
            ChangeKind::Untracked => label.red(),
            ChangeKind::Added => label.green(),
            ChangeKind::Modified => label.yellow(),
            ChangeKind::Renamed => label.cyan(),
            ChangeKind::Deleted => label.red().bold(),
            ChangeKind::Unknown => label.dimmed(),
        };

        match &entry.original_path {
            Some(from) => println!("{label}  {from} -> {}", entry.path),
            None => println!("{label}  {}", entry.path),
        }
    }
}
