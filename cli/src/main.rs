//! config-decode - offline decoder for saved config-backup blobs.
//!
//! Reads the Base64 blob from a file (or stdin), runs the layered decode
//! pipeline, and writes the recovered configuration file. Fetching the blob
//! from a device is out of scope; save it first with whatever HTTP client
//! you like.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use backup_core::{decode_config, CompressionScheme, DecodeParams, EncryptionScheme};
use clap::Parser;
use log::info;

/// Decode an embedded device config backup blob.
#[derive(Parser, Debug)]
#[command(name = "config-decode")]
#[command(version)]
#[command(about = "Decode a Base64 config backup blob (none / xor / aes256)", long_about = None)]
struct Args {
    /// Input blob file (Base64 text), or '-' for stdin
    input: String,

    /// Decryption passphrase (required for xor/aes256 schemes)
    #[arg(short, long)]
    key: Option<String>,

    /// Encryption scheme used when embedding
    #[arg(long, default_value = "none")]
    encryption: String,

    /// Compression scheme used when embedding
    #[arg(long, default_value = "none")]
    compression: String,

    /// Salt override, only for the aes256-user-salt scheme
    #[arg(long)]
    salt: Option<String>,

    /// Fallback filename stem when the blob carries no filename header
    #[arg(long, default_value = "device")]
    hostname: String,

    /// Write output to this file instead of the embedded filename
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn read_blob(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read blob from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let encryption = EncryptionScheme::from_str(&args.encryption)?;
    let compression = CompressionScheme::from_str(&args.compression)?;

    // Mirror the key/scheme combination checks users actually trip over.
    match encryption {
        EncryptionScheme::None => {
            if args.key.is_some() {
                bail!("--key was given but --encryption is 'none'; remove --key if the blob is not encrypted");
            }
        }
        _ => {
            if args.key.is_none() {
                bail!("--encryption {} requires a --key", encryption.as_str());
            }
        }
    }
    if args.salt.is_some() && encryption != EncryptionScheme::Aes256CbcUserSalt {
        bail!("--salt is only valid with --encryption aes256-user-salt");
    }

    let blob_b64 = read_blob(&args.input)?;
    let passphrase = args.key.as_deref().unwrap_or("");

    let mut params = DecodeParams::new(encryption, compression, args.hostname.clone());
    if let Some(salt) = &args.salt {
        params = params.with_user_salt(salt.as_bytes());
    }

    info!("decoding blob ({} / {})", encryption.as_str(), compression.as_str());
    let file = decode_config(blob_b64.trim(), passphrase, &params)
        .map_err(|e| anyhow::anyhow!("[{}] {}", e.kind(), e))?;

    let path = args.output.unwrap_or_else(|| PathBuf::from(&file.filename));
    fs::write(&path, &file.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("written {} ({} bytes)", path.display(), file.content.len());

    Ok(())
}
