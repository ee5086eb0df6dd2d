use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use opmask::{
    serde::TableDef,
    table::{DEFAULT_NAMESPACE, OpcodeTable},
};
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an isa! opcode table from bit-field patterns")]
struct Opts {
    /// Pattern file, one `OPCODE start,stop,value ...` per line (`.json` for a JSON table)
    #[arg(short, long, default_value = "patterns.txt")]
    input: PathBuf,
    /// Generated Rust source
    #[arg(short, long, default_value = "isa.rs")]
    output: PathBuf,
    /// Crate path providing the `isa!` macro
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,
}

fn load_table(path: &Path) -> Result<OpcodeTable> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let def: TableDef =
            serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
        let defs = def
            .into_defs()
            .with_context(|| format!("compile {}", path.display()))?;
        OpcodeTable::compile(&defs).with_context(|| format!("compile {}", path.display()))
    } else {
        OpcodeTable::from_patterns(&text).with_context(|| format!("compile {}", path.display()))
    }
}

/// Replaces `path` only once the whole table has been written.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("write {}", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("write {}", path.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();

    let table = load_table(&opts.input)?;
    info!("compiled {} instructions from {}", table.len(), opts.input.display());

    let mut rendered = Vec::new();
    table
        .render(&opts.namespace, &mut rendered)
        .context("render opcode table")?;
    write_atomic(&opts.output, &rendered)?;
    info!("wrote {}", opts.output.display());

    Ok(())
}
