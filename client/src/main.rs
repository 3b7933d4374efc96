//! hvac-notes CLI - send a PDF to the notes extraction service
//!
//! ```bash
//! hvac-notes extract plans/unit-3.pdf              # Print notes and JSON
//! hvac-notes extract plans/unit-3.pdf --json       # JSON only
//! hvac-notes extract plans/unit-3.pdf -o out.json  # Save JSON to a file
//! hvac-notes config                                # Show resolved endpoint
//! ```
//!
//! The base URL comes from `--base-url`, then `HVAC_NOTES_API_BASE_URL`
//! (`.env` is read), then the built-in default.

use clap::{Parser, Subcommand};
use hvac_notes::{
    run_request, ClientConfig, Effect, HttpNotesClient, NotesWorkflow, SelectedFile, UiStatus,
    BASE_URL_ENV, SUCCESS_MESSAGE,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hvac-notes")]
#[command(about = "Extract notes from HVAC PDF documents via the notes service", long_about = None)]
struct Cli {
    /// Base URL of the notes extraction service
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF and print the extracted notes
    Extract {
        /// PDF file to upload
        input: PathBuf,

        /// Print only the response JSON
        #[arg(long)]
        json: bool,

        /// Also write the response JSON to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the underlying cause on failure
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the resolved endpoint
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match resolve_config(cli.base_url.as_deref()) {
        Ok(config) => match cli.command {
            Commands::Extract {
                input,
                json,
                output,
                verbose,
            } => cmd_extract(&config, &input, json, output.as_deref(), verbose).await,
            Commands::Config => cmd_config(&config),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn resolve_config(base_url: Option<&str>) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let config = match base_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    Ok(config)
}

async fn cmd_extract(
    config: &ClientConfig,
    input: &Path,
    json_only: bool,
    output: Option<&Path>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let file = SelectedFile::from_path_bytes(input, bytes);
    if !file.is_pdf() {
        return Err(format!("{} is not a PDF document", input.display()).into());
    }

    let client = HttpNotesClient::new(config);
    let mut workflow = NotesWorkflow::new();
    workflow.select_file(Some(file));

    if !json_only {
        eprintln!("Selected file: {}", workflow.file_name());
        eprintln!("⏳ Processing… ({})", client.endpoint());
    }

    if let Some(Effect::SendRequest { token, file }) = workflow.submit() {
        let event = run_request(&client, token, file).await;
        workflow.dispatch(event);
    }

    match workflow.status() {
        UiStatus::Success => {}
        UiStatus::Error(message) => {
            let mut msg = message.clone();
            if verbose {
                if let Some(cause) = workflow.last_failure() {
                    msg.push_str(&format!("\n   cause: {}", cause));
                }
            }
            return Err(msg.into());
        }
        other => return Err(format!("unexpected state after submit: {:?}", other).into()),
    }

    let json = workflow.result_json().unwrap_or_default();

    if json_only {
        println!("{}", json);
    } else {
        eprintln!("✅ {}", SUCCESS_MESSAGE);
        println!("Extracted Notes");
        println!("{}", workflow.notes());
        println!();
        println!("Response JSON");
        println!("{}", json);
    }

    if let Some(path) = output {
        fs::write(path, &json)?;
        eprintln!("💾 Saved JSON to {}", path.display());
    }

    Ok(())
}

fn cmd_config(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Base URL:  {}", config.base_url());
    println!("Endpoint:  POST {}", config.endpoint_url());
    println!("Override:  --base-url or {}", BASE_URL_ENV);
    Ok(())
}
