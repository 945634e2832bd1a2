#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that lists, prints and exports Boulder Dash caves.

mod files;

use std::path::PathBuf;

use anyhow::{Context, Result};
use boulder_caves_catalog::{CaveSet, StructuredCave, StructuredCaveSet};
use boulder_caves_core::{Cave, ColorTable, Direction};
use boulder_caves_system_translation::symbol_rows;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use crate::files::Config;

/// Decodes classic Boulder Dash caves.
#[derive(Debug, Parser)]
#[command(name = "boulder-caves", version)]
struct Cli {
    /// Configuration file selecting the color table and default caveset.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Structured caveset document to read instead of the built-in caves.
    #[arg(long, global = true)]
    caveset: Option<PathBuf>,
    /// Color table used to resolve palette indices.
    #[arg(long, value_enum, global = true)]
    table: Option<TableArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lists the caves of the caveset.
    List,
    /// Prints one cave as map symbols, followed by its metadata.
    Show {
        /// Position of the cave, counting from one.
        index: usize,
    },
    /// Writes every cave of the caveset to a structured caveset document.
    Export {
        /// Destination file.
        output: PathBuf,
    },
    /// Prints the recorded demonstration moves.
    Demo,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TableArg {
    Pepto,
    Contrast,
    Light,
}

impl From<TableArg> for ColorTable {
    fn from(table: TableArg) -> Self {
        match table {
            TableArg::Pepto => Self::Pepto,
            TableArg::Contrast => Self::Contrast,
            TableArg::Light => Self::Light,
        }
    }
}

/// Entry point for the Boulder Caves command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let table = cli
        .table
        .map(ColorTable::from)
        .or(config.color_table)
        .unwrap_or_default();
    let caves = open_caveset(cli.caveset.or(config.caveset))?;

    match cli.command {
        Command::List => list(&caves),
        Command::Show { index } => show(&caves, index, table),
        Command::Export { output } => export(&caves, output),
        Command::Demo => demo(&caves),
    }
}

fn open_caveset(path: Option<PathBuf>) -> Result<CaveSet> {
    let Some(path) = path else {
        return Ok(CaveSet::builtin());
    };
    let caveset = files::load_caveset(&path)?;
    info!(
        "loaded caveset {:?} with {} caves from {}",
        caveset.name,
        caveset.caves.len(),
        path.display()
    );
    Ok(CaveSet::structured(caveset))
}

fn list(caves: &CaveSet) -> Result<()> {
    println!("{} by {} ({})", caves.name(), caves.author(), caves.date());
    for (position, name) in caves.cave_names().into_iter().enumerate() {
        println!("{:>3}  {name}", position + 1);
    }
    Ok(())
}

fn show(caves: &CaveSet, index: usize, table: ColorTable) -> Result<()> {
    let cave = caves
        .cave(index)
        .with_context(|| format!("failed to decode cave {index}"))?;
    for row in symbol_rows(&cave).context("cave cannot be printed as map symbols")? {
        println!("{row}");
    }
    println!();
    print_metadata(&cave, table);
    Ok(())
}

fn print_metadata(cave: &Cave, table: ColorTable) {
    println!("{} ({}x{})", cave.name, cave.width(), cave.height());
    if !cave.description.is_empty() {
        println!("{}", cave.description);
    }
    if cave.intermission {
        println!("intermission");
    }
    println!(
        "time {}s, {} diamonds worth {}/{}",
        cave.time, cave.diamonds_required, cave.diamond_value_normal, cave.diamond_value_extra
    );
    println!(
        "magic wall {}, amoeba {} (factor {})",
        cave.magic_wall_milling_time, cave.amoeba_slow_growth_time, cave.amoeba_factor
    );
    println!(
        "colors fg1 #{:06x} fg2 #{:06x} fg3 #{:06x} amoeba #{:06x} slime #{:06x} screen #{:06x} border #{:06x}",
        cave.rgb_fg1(table),
        cave.rgb_fg2(table),
        cave.rgb_fg3(table),
        cave.rgb_amoeba(table),
        cave.rgb_slime(table),
        cave.rgb_screen(table),
        cave.rgb_border(table),
    );
}

fn export(caves: &CaveSet, output: PathBuf) -> Result<()> {
    let mut exported = Vec::with_capacity(caves.cave_count());
    for index in 1..=caves.cave_count() {
        let cave = caves
            .cave(index)
            .with_context(|| format!("failed to decode cave {index}"))?;
        exported.push(
            StructuredCave::from_cave(&cave)
                .with_context(|| format!("cave {index} cannot be exported"))?,
        );
    }

    let caveset = StructuredCaveSet {
        name: caves.name().to_owned(),
        author: caves.author().to_owned(),
        date: caves.date().to_owned(),
        www: caves.www().to_owned(),
        caves: exported,
    };
    files::save_caveset(&output, caveset)?;
    info!("exported {} caves to {}", caves.cave_count(), output.display());
    Ok(())
}

fn demo(caves: &CaveSet) -> Result<()> {
    let Some(steps) = caves.demo().context("failed to decode demo script")? else {
        println!("{} has no demo", caves.name());
        return Ok(());
    };
    for step in steps {
        let movement = match step.direction {
            Direction::Nowhere => "wait",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        println!("{movement} x{}", step.repeat);
    }
    Ok(())
}
