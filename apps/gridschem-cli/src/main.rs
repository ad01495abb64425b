use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gridschem_io::{DocumentError, SchematicDocument};
use gridschem_render::{render_circuit, RenderOptions};

#[derive(Parser)]
#[command(name = "gridschem", about = "Render placed circuits as text schematics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a schematic document as box-drawing text.
    Render {
        /// Path to the schematic document (JSON).
        document: PathBuf,
        /// Grid cells per layout unit along X.
        #[arg(long)]
        scale_x: Option<f64>,
        /// Grid cells per layout unit along Y.
        #[arg(long)]
        scale_y: Option<f64>,
        /// Prefix rows and columns with layout coordinates.
        #[arg(long)]
        axis_labels: bool,
        /// Do not draw chip identifiers above chips.
        #[arg(long)]
        no_chip_labels: bool,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print entity counts and overlap diagnostics for a document.
    Info {
        /// Path to the schematic document (JSON).
        document: PathBuf,
    },
}

/// Overlay command-line flags on the options stored in the document.
fn merge_options(
    mut opts: RenderOptions,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
    axis_labels: bool,
    no_chip_labels: bool,
) -> RenderOptions {
    if let Some(x) = scale_x {
        opts.grid_scale_x = x;
    }
    if let Some(y) = scale_y {
        opts.grid_scale_y = y;
    }
    if axis_labels {
        opts.show_axis_labels = true;
    }
    if no_chip_labels {
        opts.chip_labels = false;
    }
    opts
}

fn info(doc: &SchematicDocument) {
    let circuit = &doc.circuit;
    println!("name:              {}", doc.name);
    println!("active chips:      {}", circuit.active_chips().count());
    println!("passives:          {}", circuit.passive_chips().count());
    println!("lines:             {}", circuit.lines.len());
    println!("net labels:        {}", circuit.net_labels.len());
    println!("connection points: {}", circuit.connection_points.len());
    for (a, b) in circuit.overlapping_chips() {
        println!(
            "overlap:           {} / {}",
            circuit.chips[a].id, circuit.chips[b].id
        );
    }
}

fn run(cli: Cli) -> Result<(), DocumentError> {
    match cli.command {
        Command::Render {
            document,
            scale_x,
            scale_y,
            axis_labels,
            no_chip_labels,
            output,
        } => {
            let doc = SchematicDocument::load(&document)?;
            let opts = merge_options(doc.options.clone(), scale_x, scale_y, axis_labels, no_chip_labels);
            let text = render_circuit(&doc.circuit, &opts).to_string();
            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{text}\n"))?;
                    log::info!("Wrote schematic to {}", path.display());
                }
                None => println!("{text}"),
            }
        }
        Command::Info { document } => {
            let doc = SchematicDocument::load(&document)?;
            info(&doc);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
