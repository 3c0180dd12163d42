use clap::{Parser, Subcommand};
use lg_diagram::{DiagramConfig, DiagramResult, PhaseDiagram, write_outputs};
use lg_model::MetastableWindow;
use lg_solver::{Regime, State, find_equilibrium_state, find_subcritical_states};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "lg-cli")]
#[command(about = "Lattice-gas phase diagrams - equilibrium density of a mean-field fluid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the equilibrium state at one temperature and chemical potential
    Solve {
        /// Reduced temperature (critical point at 1)
        #[arg(long)]
        temperature: f64,
        /// Reduced chemical potential (critical point at -2)
        #[arg(long, allow_negative_numbers = true)]
        chem_pot: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the metastability limits at a subcritical temperature
    Boundaries {
        /// Reduced temperature, strictly between 0 and 1
        #[arg(long)]
        temperature: f64,
        /// Also report whether both branches exist at this chemical potential
        #[arg(long, allow_negative_numbers = true)]
        chem_pot: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build a phase diagram and write it to a directory
    Diagram {
        /// Diagram configuration (YAML or JSON); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output directory
        #[arg(short, long, default_value = "phase_diagram")]
        output_dir: PathBuf,
        /// Skip writing the image
        #[arg(long)]
        no_image: bool,
    },
    /// Write the default diagram configuration as YAML
    InitConfig {
        /// Path of the YAML file to create
        path: PathBuf,
    },
}

fn main() -> DiagramResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            temperature,
            chem_pot,
            json,
        } => cmd_solve(temperature, chem_pot, json),
        Commands::Boundaries {
            temperature,
            chem_pot,
            json,
        } => cmd_boundaries(temperature, chem_pot, json),
        Commands::Diagram {
            config,
            output_dir,
            no_image,
        } => cmd_diagram(config.as_deref(), &output_dir, !no_image),
        Commands::InitConfig { path } => cmd_init_config(&path),
    }
}

fn cmd_solve(temperature: f64, chem_pot: f64, json: bool) -> DiagramResult<()> {
    let equilibrium = find_equilibrium_state(temperature, chem_pot)?;
    let candidates = match Regime::classify(temperature) {
        Regime::Supercritical => Vec::new(),
        Regime::Subcritical => find_subcritical_states(temperature, chem_pot)?,
    };

    if json {
        let value = serde_json::json!({
            "temperature": temperature,
            "chem_pot": chem_pot,
            "equilibrium": equilibrium,
            "candidates": candidates,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("T = {temperature}, mu = {chem_pot}");
    println!("Equilibrium:");
    print_state(&equilibrium);
    if candidates.len() > 1 {
        println!("Candidates:");
        for state in &candidates {
            print_state(state);
        }
    }
    Ok(())
}

fn print_state(state: &State) {
    println!(
        "  {:<13} density = {:.8}, free energy = {:.8}",
        state.branch.label(),
        state.density,
        state.free_energy
    );
}

fn cmd_boundaries(temperature: f64, chem_pot: Option<f64>, json: bool) -> DiagramResult<()> {
    let window = MetastableWindow::at(temperature)?;
    let coexistence = chem_pot.map(|mu| window.is_coexistence(mu));

    if json {
        let value = serde_json::json!({
            "window": window,
            "chem_pot": chem_pot,
            "coexistence": coexistence,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Metastability limits at T = {temperature}:");
    println!(
        "  gas:    density <= {:.8}, exists for mu <= {:.8}",
        window.max_gas_density, window.max_gas_chem_pot
    );
    println!(
        "  liquid: density >= {:.8}, exists for mu >= {:.8}",
        window.min_liq_density, window.min_liq_chem_pot
    );
    if let (Some(mu), Some(both)) = (chem_pot, coexistence) {
        let verdict = if both { "both branches exist" } else { "one branch exists" };
        println!("  at mu = {mu}: {verdict}");
    }
    Ok(())
}

fn cmd_diagram(
    config_path: Option<&Path>,
    output_dir: &Path,
    write_image: bool,
) -> DiagramResult<()> {
    let config = match config_path {
        Some(path) => {
            println!("Loading configuration: {}", path.display());
            DiagramConfig::load(path)?
        }
        None => DiagramConfig::default(),
    };

    println!(
        "Building phase diagram: {} x {} points",
        config.num_temperature_pts, config.num_chem_pot_pts
    );
    let start = Instant::now();
    let diagram = PhaseDiagram::build(&config)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "diagram built");

    let image = if write_image {
        Some(diagram.render()?)
    } else {
        None
    };
    let paths = write_outputs(output_dir, &config, &diagram.array, image.as_ref())?;

    println!("✓ Phase array: {}", paths.array.display());
    println!("✓ Manifest:    {}", paths.manifest.display());
    if let Some(image) = paths.image {
        println!("✓ Image:       {}", image.display());
    }
    println!("  Elapsed: {:.3} s", start.elapsed().as_secs_f64());
    Ok(())
}

fn cmd_init_config(path: &Path) -> DiagramResult<()> {
    DiagramConfig::default().save_yaml(path)?;
    println!("✓ Wrote default configuration: {}", path.display());
    Ok(())
}
