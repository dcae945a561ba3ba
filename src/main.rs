use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sitemark::page::generate_pages_recursive;
use sitemark::{markdown_to_html, markdown_to_html_node};

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(about = "Convert Markdown to HTML and build static pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one Markdown document and print the result
    Convert {
        /// Input Markdown file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Print the node tree as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Generate an HTML page for every file under a content directory
    Build {
        /// Directory of Markdown sources
        #[arg(long, default_value = "content")]
        content: PathBuf,

        /// HTML template containing {{ Title }} and {{ Content }}
        #[arg(long, default_value = "template.html")]
        template: PathBuf,

        /// Output directory
        #[arg(long, default_value = "public")]
        dest: PathBuf,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Convert { input, json } => {
            let markdown = match input {
                Some(path) => fs::read_to_string(&path)
                    .map_err(|e| format!("reading {}: {}", path.display(), e))?,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            if json {
                let root = markdown_to_html_node(&markdown);
                println!("{}", serde_json::to_string_pretty(&root)?);
            } else {
                println!("{}", markdown_to_html(&markdown));
            }
        }
        Command::Build {
            content,
            template,
            dest,
        } => {
            generate_pages_recursive(&content, &template, &dest)?;
        }
    }
    Ok(())
}
