// Mon Aug 24 2026

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use std::path::PathBuf;
use std::process;
use symlib::{Config, Resolver};

#[derive(Parser, Debug)]
#[command(name = "symlib-test")]
#[command(version = "1.0.0")]
#[command(about = "Symbol resolver self-test", long_about = None)]
struct Args {
    /// Module to resolve symbols from
    #[arg(default_value = "ntoskrnl.exe")]
    library: String,

    /// Symbol to query in the module
    #[arg(default_value = "KiDispatchInterrupt")]
    symbol: String,

    /// Byte delta added to the symbol offset for the best-match query
    #[arg(long, default_value_t = 0x10)]
    delta: u64,

    /// Extra directory to search for module files (repeatable)
    #[arg(long)]
    search_path: Vec<PathBuf>,

    /// Resolver configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => Config::default(),
    };

    config.search_paths.extend(args.search_path.iter().cloned());
    Ok(config)
}

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            println!("{} {:#}", "ERROR:".red(), e);
            process::exit(-1);
        }
    };

    let resolver = Resolver::new(config);

    println!("{} Testing addrbyname()...", "[+]".green());

    // step 1: query symbol offset by name
    let addr = match resolver.offset_by_name(&args.library, &args.symbol) {
        Ok(Some(addr)) => addr,
        Ok(None) => {
            println!("{} {}!{}() is not found", "ERROR:".red(), args.library, args.symbol);
            process::exit(-1);
        }
        Err(e) => {
            println!("{} {}", "ERROR:".red(), e);
            process::exit(-1);
        }
    };

    println!("INFO: {}!{}() is at offset 0x{:08x}", args.library, args.symbol, addr);
    println!("{} Testing namebyaddr()...", "[+]".green());

    // step 2: query symbol name by offset
    let name = match resolver.name_by_offset(&args.library, addr) {
        Ok(Some(name)) => name,
        Ok(None) => {
            println!("{} Symbol for offset 0x{:08x} is not found", "ERROR:".red(), addr);
            process::exit(-1);
        }
        Err(e) => {
            println!("{} {}", "ERROR:".red(), e);
            process::exit(-1);
        }
    };

    if name != args.symbol {
        println!("{} Test failed", "[-]".red());
        process::exit(-1);
    }

    println!("{} Testing bestbyaddr()...", "[+]".green());

    // step 3: query best symbol by offset
    let target = match addr.checked_add(args.delta) {
        Some(target) => target,
        None => {
            println!(
                "{} Offset 0x{:08x} + delta 0x{:x} overflows",
                "ERROR:".red(),
                addr,
                args.delta
            );
            process::exit(-1);
        }
    };

    let best = match resolver.best_by_offset(&args.library, target) {
        Ok(Some(best)) => best,
        Ok(None) => {
            println!(
                "{} Best symbol for offset 0x{:08x} is not found",
                "ERROR:".red(),
                target
            );
            process::exit(-1);
        }
        Err(e) => {
            println!("{} {}", "ERROR:".red(), e);
            process::exit(-1);
        }
    };

    if best.0 != name || best.1 != args.delta {
        println!("{} Test failed", "[-]".red());
        process::exit(-1);
    }

    println!("{} Test passed", "[+]".green());
}
