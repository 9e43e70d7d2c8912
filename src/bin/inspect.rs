//! progfs inspector
//!
//! Host-side tool for checking an asset image against its manifest before it
//! is flashed: list the files, dump a byte range, or verify digests.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use progfs::{AssetManifest, FileId, FileRecord, FileRegistry, FileSource};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Working buffer size used when streaming a file out
const CHUNK_BUFFER: usize = 512;

#[derive(Parser, Debug)]
#[command(name = "progfs-inspect")]
#[command(about = "Inspect a packed asset image through its manifest")]
struct Args {
    /// Path to the manifest (.toml or .json)
    #[arg(short = 'm', long)]
    manifest: PathBuf,

    /// Path to the packed asset image
    #[arg(short = 'i', long)]
    image: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered files
    List,

    /// Write (part of) a file to stdout
    Cat {
        /// File name, or numeric id
        file: String,

        /// Start offset in bytes
        #[arg(short = 's', long, default_value = "0")]
        start: usize,

        /// Bytes to copy [default: rest of file]
        #[arg(short = 'c', long)]
        chunk: Option<usize>,
    },

    /// Check bounds and digests, print each file's SHA-256
    Verify,
}

/// Resolve a `cat` argument: an exact name wins, otherwise a numeric id
///
/// Names have no format rules, so a file called "1" shadows id 1.
fn resolve_arg<'a>(fs: &FileRegistry<'a>, file: &str) -> progfs::Result<FileRecord<'a>> {
    if let Some(record) = fs.find_by_name(file) {
        return Ok(*record);
    }
    match file.parse::<FileId>() {
        Ok(id) => fs.resolve(FileSource::Id(id)),
        Err(_) => fs.resolve(FileSource::Name(file)),
    }
}

fn list(fs: &FileRegistry<'_>) {
    println!(
        "{:>3}  {:<32} {:>8}  {:<8} {:<26} {}",
        "id", "name", "size", "type", "mime", "compressed"
    );
    for (id, record) in fs.iter() {
        println!(
            "{:>3}  {:<32} {:>8}  {:<8} {:<26} {}",
            id,
            record.name(),
            record.size(),
            record.file_type(),
            record.file_type().mime(),
            record.is_compressed()
        );
    }
    println!("{} of {} slots used", fs.len(), fs.capacity());
}

/// Copy `record[start..start + chunk]` to `out` through a fixed working buffer
///
/// `chunk` defaults to the rest of the file. Returns the bytes written.
fn stream<'a>(
    fs: &FileRegistry<'a>,
    record: &FileRecord<'a>,
    start: usize,
    chunk: Option<usize>,
    out: &mut impl Write,
) -> Result<usize> {
    let end = match chunk {
        Some(len) => start.saturating_add(len).min(record.size()),
        None => record.size(),
    };

    let mut buf = [0u8; CHUNK_BUFFER];
    let mut pos = start;
    loop {
        let want = end.saturating_sub(pos).min(CHUNK_BUFFER);
        let copied = fs.copy(record, &mut buf, pos, want)?;
        if copied == 0 {
            break;
        }
        out.write_all(&buf[..copied])?;
        pos += copied;
    }
    out.flush()?;

    Ok(pos - start)
}

fn cat(fs: &FileRegistry<'_>, file: &str, start: usize, chunk: Option<usize>) -> Result<()> {
    let record = resolve_arg(fs, file)?;
    let mut stdout = std::io::stdout().lock();
    let written = stream(fs, &record, start, chunk, &mut stdout)?;

    info!("Wrote {} bytes of {}", written, record.name());
    Ok(())
}

fn verify(fs: &FileRegistry<'_>) {
    for (id, record) in fs.iter() {
        println!("{}  {:>3}  {}", hex::encode(record.sha256()), id, record.name());
    }
    println!("OK: {} files verified", fs.len());
}

fn main() -> Result<()> {
    // Logs go to stderr so `cat` output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Manifest: {:?}", args.manifest);
    info!("Image: {:?}", args.image);

    let manifest = AssetManifest::load(&args.manifest)
        .with_context(|| format!("loading manifest {}", args.manifest.display()))?;
    let image = std::fs::read(&args.image)
        .with_context(|| format!("reading image {}", args.image.display()))?;
    let fs = manifest
        .build_registry(&image)
        .context("building registry from manifest")?;

    match args.command {
        Command::List => list(&fs),
        Command::Cat { file, start, chunk } => cat(&fs, &file, start, chunk)?,
        Command::Verify => verify(&fs),
    }

    Ok(())
}
