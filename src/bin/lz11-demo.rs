use std::{
    env,
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{anyhow, bail, Context, Result};
use camino::Utf8PathBuf;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use lz11_rs::*;

fn utf8_path(arg: &OsString) -> Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(PathBuf::from(arg)).context("path is not valid utf-8")
}

fn main() -> Result<()> {
    let mut args: Vec<OsString> = env::args_os().collect();
    let prog = args
        .first()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lz11-demo".into());

    let mut level = LevelFilter::Info;
    while args.len() > 1 {
        match args[1].to_str() {
            Some("-v") => level = LevelFilter::Debug,
            Some("-vv") => level = LevelFilter::Trace,
            _ => break,
        }
        args.remove(1);
    }
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| anyhow!("installing logger: {e}"))?;

    if args.len() < 3 {
        println!("Usage: {prog} [-v|-vv] d input output");
        println!("       {prog} [-v|-vv] i input");
        return Ok(());
    }

    let mode = &args[1];
    let inp_fn = utf8_path(&args[2])?;
    let inp = std::fs::read(&inp_fn).with_context(|| format!("reading {inp_fn}"))?;

    match mode.to_str() {
        Some("i") => {
            let header = Header::parse(&inp).with_context(|| inp_fn.to_string())?;
            println!(
                "{inp_fn}: lz11, {} bytes compressed, {} bytes decompressed",
                inp.len(),
                header.decompressed_len
            );
        }
        Some("d") => {
            let Some(outp_fn) = args.get(3) else {
                bail!("no output file given");
            };
            let outp_fn = utf8_path(outp_fn)?;

            let outp = decompress_to_vec(&inp).with_context(|| format!("decompressing {inp_fn}"))?;
            info!("{inp_fn}: {} -> {} bytes", inp.len(), outp.len());

            let mut outp_f = BufWriter::new(
                File::create(&outp_fn).with_context(|| format!("creating {outp_fn}"))?,
            );
            outp_f.write_all(&outp)?;
            outp_f.flush()?;
        }
        _ => {
            println!("Invalid mode {}", mode.to_string_lossy());
        }
    }

    Ok(())
}
