use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use facet_pipeline::{FilterPass, ingest_tree, write_records};
use facet_resolve::{Resolver, ResolverConfig, is_relative};

use crate::config;
use crate::runtime::POOL;

#[derive(Debug, Parser)]
#[command(name="facet",version=env!("CARGO_PKG_VERSION"),about,long_about=None,propagate_version=true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "r", name = "resolve", about = "Resolve one logical path")]
    Resolve(ResolveArg),
    #[command(alias = "b", name = "build", about = "Filter a source tree into an output directory")]
    Build(BuildArg),
}

#[derive(Debug, Args)]
pub struct ResolveArg {
    /// Logical path; `./`-prefixed paths are taken relative to the
    /// current directory, others relative to the project root
    pub path: String,

    #[arg(short, long, default_value = "facet.toml")]
    pub config: PathBuf,

    /// Project root
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Active selector, repeatable (`-s prod -s ios`); flags outside
    /// the declared dimensions are ignored
    #[arg(short, long = "select")]
    pub select: Vec<String>,

    /// Enable directory-level substitution regardless of the config
    #[arg(long)]
    pub filter_dir: bool,
}

#[derive(Debug, Args)]
pub struct BuildArg {
    /// Source tree to filter
    #[arg(default_value = ".")]
    pub src: PathBuf,

    /// Output directory
    #[arg(short, long)]
    pub out: PathBuf,

    #[arg(short, long, default_value = "facet.toml")]
    pub config: PathBuf,

    #[arg(short, long = "select")]
    pub select: Vec<String>,
}

pub fn run(app: App) -> anyhow::Result<()> {
    match app.cmd {
        Commands::Resolve(arg) => resolve(arg),
        Commands::Build(arg) => build(arg),
    }
}

fn resolve(arg: ResolveArg) -> anyhow::Result<()> {
    let cfg = config::load(&arg.config)?;
    let selectors = cfg.dimensions.selectors_from(&arg.select);

    let root = if is_relative(&arg.path) {
        std::env::current_dir()?
    } else {
        arg.root.clone()
    };

    let resolver = Resolver::new(
        root,
        ResolverConfig::new(cfg.dimensions, selectors)
            .filter_dir(cfg.filter_dir || arg.filter_dir),
    );

    match resolver.resolve(arg.path.as_ref())? {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => {
            bail!(
                "{}: no such file, and no derived file could match the active selectors",
                arg.path
            );
        }
    }
}

fn build(arg: BuildArg) -> anyhow::Result<()> {
    let cfg = config::load(&arg.config)?;
    let selectors = cfg.dimensions.selectors_from(&arg.select);

    let written = POOL.block_on(async {
        let mut pass = FilterPass::new(&arg.src, cfg.dimensions, selectors);
        ingest_tree(&mut pass, &arg.src).await?;

        let records = pass.finalize();
        write_records(&records, &arg.src, &arg.out).await
    })?;

    println!("{} files written to {}", written, arg.out.display());
    Ok(())
}
