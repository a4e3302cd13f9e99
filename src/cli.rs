// Flag surface for the tool. The interface is flag-driven rather than
// subcommand-driven: `--list` and `--delete` select the operation and
// everything else is an upload.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "servercert", version)]
#[command(about = "Manage IAM server certificates: upload, list and delete TLS certificate/key pairs")]
pub struct Cli {
    /// Certificate name (required for upload and delete)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Path to the PEM-encoded certificate file (required for upload)
    #[arg(long, value_name = "FILE")]
    pub cert: Option<PathBuf>,

    /// Path to the PEM-encoded private key file (required for upload)
    #[arg(long, value_name = "FILE")]
    pub key: Option<PathBuf>,

    /// Path to an optional PEM-encoded certificate chain file
    #[arg(long, value_name = "FILE")]
    pub chain: Option<PathBuf>,

    /// List existing certificates
    #[arg(long)]
    pub list: bool,

    /// Delete the certificate named by --name
    #[arg(long)]
    pub delete: bool,

    /// AWS region
    #[arg(long, value_name = "REGION", env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom API endpoint (LocalStack or other AWS-compatible services)
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// One resolved operation. `--list` wins over `--delete`, which wins over
/// the default upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Upload {
        name: String,
        cert: PathBuf,
        key: PathBuf,
        chain: Option<PathBuf>,
    },
    List,
    Delete {
        name: String,
    },
}

impl Cli {
    /// Resolve the parsed flags into an operation, or a usage error when a
    /// required flag is missing.
    pub fn operation(&self) -> Result<Operation> {
        if self.list {
            return Ok(Operation::List);
        }
        if self.delete {
            match &self.name {
                Some(name) => return Ok(Operation::Delete { name: name.clone() }),
                None => bail!("--name is required for delete"),
            }
        }
        match (&self.name, &self.cert, &self.key) {
            (Some(name), Some(cert), Some(key)) => Ok(Operation::Upload {
                name: name.clone(),
                cert: cert.clone(),
                key: key.clone(),
                chain: self.chain.clone(),
            }),
            _ => bail!("--name, --cert, and --key are required for upload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("servercert").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn list_wins_over_other_flags() {
        let cli = parse(&["--list", "--delete", "--name", "web"]);
        assert_eq!(cli.operation().unwrap(), Operation::List);
    }

    #[test]
    fn delete_requires_name() {
        let cli = parse(&["--delete"]);
        let err = cli.operation().unwrap_err();
        assert!(err.to_string().contains("--name is required for delete"));
    }

    #[test]
    fn delete_with_name_resolves() {
        let cli = parse(&["--delete", "--name", "web"]);
        assert_eq!(
            cli.operation().unwrap(),
            Operation::Delete {
                name: "web".to_string()
            }
        );
    }

    #[test]
    fn upload_requires_name_cert_and_key() {
        let cli = parse(&["--name", "web", "--cert", "cert.pem"]);
        let err = cli.operation().unwrap_err();
        assert!(err
            .to_string()
            .contains("--name, --cert, and --key are required for upload"));
    }

    #[test]
    fn upload_with_optional_chain() {
        let cli = parse(&[
            "--name", "web", "--cert", "cert.pem", "--key", "key.pem", "--chain", "ca.pem",
        ]);
        match cli.operation().unwrap() {
            Operation::Upload { name, chain, .. } => {
                assert_eq!(name, "web");
                assert_eq!(chain, Some(PathBuf::from("ca.pem")));
            }
            other => panic!("unexpected operation: {:?}", other),
        }
    }

    #[test]
    fn upload_without_chain() {
        let cli = parse(&["--name", "web", "--cert", "cert.pem", "--key", "key.pem"]);
        match cli.operation().unwrap() {
            Operation::Upload { chain, .. } => assert!(chain.is_none()),
            other => panic!("unexpected operation: {:?}", other),
        }
    }
}
