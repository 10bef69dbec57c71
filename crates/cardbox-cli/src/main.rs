use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use cardbox_async_runtime::{ImportCommand, ImportUpdate, worker_task};
use cardbox_store::{FlashcardStore, HttpStore};

#[derive(Parser)]
#[command(name = "cardbox", about = "Flashcard manager CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-import flashcards from a spreadsheet or CSV file
    Import {
        /// Input file (.csv, .xls or .xlsx) with "question" and "answer" columns
        #[arg(short, long)]
        input: PathBuf,

        /// Project to file the flashcards under
        #[arg(short, long)]
        project: String,

        /// Base URL of the flashcard manager
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,

        /// Session token for the manager API
        #[arg(long)]
        token: Option<String>,

        /// Parse and validate only, do not submit
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            input,
            project,
            server,
            token,
            dry_run,
        } => {
            if dry_run {
                let drafts = cardbox_import::load_from_file(&input).await?;
                for draft in &drafts {
                    println!("{} → {}", draft.question, draft.answer);
                }
                println!("{} flashcards ready for project {project}", drafts.len());
                return Ok(());
            }

            let mut store = HttpStore::new(&server);
            if let Some(token) = token {
                store = store.with_session_token(token);
            }
            let store: Arc<dyn FlashcardStore> = Arc::new(store);

            let (command_tx, command_rx) = mpsc::unbounded_channel();
            let (update_tx, mut update_rx) = mpsc::unbounded_channel();
            let worker = tokio::spawn(worker_task(store, command_rx, update_tx));

            command_tx.send(ImportCommand::ImportFile {
                input_path: input,
                project_id: project,
            })?;
            drop(command_tx);

            let mut failure = None;
            while let Some(update) = update_rx.recv().await {
                match update {
                    ImportUpdate::PhaseChanged { phase } => {
                        tracing::debug!(?phase, "phase changed");
                    }
                    ImportUpdate::DraftsReady { count } => {
                        println!("Parsed {count} flashcards");
                    }
                    ImportUpdate::ImportComplete { count, .. } => {
                        println!(
                            "Successfully uploaded {} flashcard{}!",
                            count,
                            if count == 1 { "" } else { "s" }
                        );
                    }
                    ImportUpdate::Error { message } => {
                        failure = Some(message);
                    }
                }
            }
            worker.await?;

            if let Some(message) = failure {
                bail!(message);
            }
        }
    }

    Ok(())
}
