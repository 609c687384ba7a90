//! meshidx CLI - triangle soup indexing tool.
//!
//! Usage: meshidx <COMMAND> [OPTIONS] <INPUT>
//!
//! Run `meshidx --help` for available commands.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use meshidx::format::Compact;
use meshidx::index::{index_soup, IndexOptions, IndexStats, KeyMode};
use meshidx::io::{self as mesh_io, buffers, stl};
use meshidx::mesh::{IndexedMesh, MeshIndex, TriangleSoup};

#[derive(Parser)]
#[command(name = "meshidx")]
#[command(author, version, about = "Triangle soup indexing CLI", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a triangle soup and print the vertex and index buffers
    Index {
        /// Input mesh file (`-` reads STL from stdin)
        input: PathBuf,

        /// Write the buffers to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How vertices are compared for deduplication
        #[arg(short, long, value_enum, default_value = "bits")]
        key: KeyArg,

        /// Keep triangle winding as read
        #[arg(long)]
        no_orient: bool,

        /// Integer width of the index buffer
        #[arg(short, long, value_enum, default_value = "u32")]
        index_type: IndexType,
    },

    /// Display indexing statistics without printing the buffers
    Info {
        /// Input mesh file (`-` reads STL from stdin)
        input: PathBuf,

        /// How vertices are compared for deduplication
        #[arg(short, long, value_enum, default_value = "bits")]
        key: KeyArg,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum KeyArg {
    /// Exact bit patterns of the parsed coordinates
    Bits,
    /// Exact coordinate text as written in the file
    Text,
}

impl From<KeyArg> for KeyMode {
    fn from(arg: KeyArg) -> Self {
        match arg {
            KeyArg::Bits => KeyMode::Bits,
            KeyArg::Text => KeyMode::Text,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum IndexType {
    U16,
    U32,
    U64,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Index {
            input,
            output,
            key,
            no_orient,
            index_type,
        } => {
            let options = IndexOptions::default()
                .with_key_mode(key.into())
                .with_orientation(!no_orient);
            match index_type {
                IndexType::U16 => cmd_index::<u16>(&input, output.as_deref(), &options)?,
                IndexType::U32 => cmd_index::<u32>(&input, output.as_deref(), &options)?,
                IndexType::U64 => cmd_index::<u64>(&input, output.as_deref(), &options)?,
            }
        }

        Commands::Info { input, key } => {
            cmd_info(&input, key.into())?;
        }
    }

    Ok(())
}

fn load_soup(input: &Path) -> meshidx::error::Result<TriangleSoup> {
    if input == Path::new("-") {
        stl::read(&mut io::stdin().lock())
    } else {
        mesh_io::load(input)
    }
}

fn cmd_index<I: MeshIndex>(
    input: &Path,
    output: Option<&Path>,
    options: &IndexOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let soup = load_soup(input)?;
    log::info!(
        "Loaded {}: {} corners, {} triangles",
        input.display(),
        soup.num_vertices(),
        soup.num_triangles()
    );

    let start = Instant::now();
    let (mesh, stats): (IndexedMesh<I>, IndexStats) = index_soup(&soup, options)?;
    log::info!("{} ({:.2?})", stats, start.elapsed());

    match output {
        Some(path) => {
            mesh_io::save(&mesh, path)?;
            log::info!("Saved: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            buffers::write(&mesh, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn cmd_info(input: &Path, key: KeyMode) -> Result<(), Box<dyn std::error::Error>> {
    let soup = load_soup(input)?;
    let options = IndexOptions::default().with_key_mode(key);
    let (mesh, stats): (IndexedMesh<u64>, IndexStats) = index_soup(&soup, &options)?;

    println!("File: {}", input.display());
    println!("Input corners: {}", stats.input_vertices);
    println!("Unique vertices: {}", stats.unique_vertices);
    println!("Duplicates removed: {:.1}%", stats.dedup_ratio() * 100.0);
    println!("Triangles: {}", stats.triangles);
    println!("Re-oriented: {}", stats.reoriented);
    if stats.dropped_vertices > 0 {
        println!("Dropped trailing corners: {}", stats.dropped_vertices);
    }

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({}, {}, {}) to ({}, {}, {})",
            Compact(min.x),
            Compact(min.y),
            Compact(min.z),
            Compact(max.x),
            Compact(max.y),
            Compact(max.z)
        );
    }

    let narrowest = if stats.unique_vertices <= <u16 as MeshIndex>::CAPACITY {
        "u16"
    } else if stats.unique_vertices <= <u32 as MeshIndex>::CAPACITY {
        "u32"
    } else {
        "u64"
    };
    println!("Narrowest index type: {}", narrowest);

    Ok(())
}
