// Entrypoint for the CLI.
// - Keeps `main` small: resolve the operation, build the IAM client and
//   dispatch, with a spinner over each remote call.
// - Returns `anyhow::Result` so any failure prints to stderr and exits 1.

use anyhow::Result;
use clap::Parser;
use servercert_cli::api::{CertStore, UploadRequest};
use servercert_cli::cli::{Cli, Operation};
use servercert_cli::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Usage validation happens before any AWS configuration is loaded.
    let operation = cli.operation()?;

    let store = CertStore::from_env(&cli.region, cli.endpoint_url.as_deref()).await;

    match operation {
        Operation::Upload {
            name,
            cert,
            key,
            chain,
        } => {
            // Local files are read first; an unreadable file fails the run
            // before any request is made.
            let request = UploadRequest::from_files(&name, &cert, &key, chain.as_deref())?;
            let pb = ui::spinner("Uploading certificate...");
            let result = store.upload(&request).await;
            pb.finish_and_clear();
            println!("{}", ui::render_upload(&result?, cli.json)?);
        }
        Operation::List => {
            let pb = ui::spinner("Fetching certificates...");
            let result = store.list().await;
            pb.finish_and_clear();
            println!("{}", ui::render_list(&result?, cli.json)?);
        }
        Operation::Delete { name } => {
            let pb = ui::spinner("Deleting certificate...");
            let result = store.delete(&name).await;
            pb.finish_and_clear();
            result?;
            println!("{}", ui::render_delete(&name, cli.json)?);
        }
    }

    Ok(())
}

// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug logging for
// this crate. Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        tracing_subscriber::EnvFilter::new(format!("servercert_cli={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
