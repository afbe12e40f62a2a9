use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tsunami_rs::io::{HistoryFileError, write_history, write_history_file};
use tsunami_rs::{ColumnDiagnostics, HeightField, SimParams, Simulation};

#[derive(Debug, clap::Parser)]
#[command(
    name = "tsunami",
    about = "Run the 1D periodic tsunami solver and print the height history"
)]
pub struct TsunamiCli {
    /// Node of the initial pulse center (1-based)
    #[arg(long, default_value_t = SimParams::default().icenter, allow_negative_numbers = true)]
    pub icenter: i64,

    /// Number of grid nodes
    #[arg(long = "grid-size", default_value_t = SimParams::default().grid_size)]
    pub grid_size: usize,

    /// Number of time steps
    #[arg(long, default_value_t = SimParams::default().timesteps)]
    pub timesteps: usize,

    #[arg(long, default_value_t = SimParams::default().dt, allow_negative_numbers = true)]
    pub dt: f64,

    #[arg(long, default_value_t = SimParams::default().dx, allow_negative_numbers = true)]
    pub dx: f64,

    /// Background flow speed
    #[arg(short = 'c', long = "speed", default_value_t = SimParams::default().c, allow_negative_numbers = true)]
    pub c: f64,

    /// Decay rate of the initial Gaussian
    #[arg(long, default_value_t = SimParams::default().decay, allow_negative_numbers = true)]
    pub decay: f64,

    /// Write the history here instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Log diagnostics every N steps (needs RUST_LOG=debug)
    #[arg(long = "diagnostics-interval", default_value_t = 0)]
    pub diagnostics_interval: usize,
}

impl TsunamiCli {
    fn params(&self) -> SimParams {
        SimParams::new(
            self.icenter,
            self.grid_size,
            self.timesteps,
            self.dt,
            self.dx,
            self.c,
            self.decay,
        )
    }
}

fn write_output(path: Option<&PathBuf>, heights: &HeightField) -> Result<(), HistoryFileError> {
    match path {
        Some(path) => write_history_file(path, heights),
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_history(&mut writer, heights)?;
            writer.flush()?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = TsunamiCli::parse();
    let params = args.params();

    let heights = match Simulation::new(params)
        .with_diagnostics_interval(args.diagnostics_interval)
        .run()
    {
        Ok(heights) => heights,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let first = ColumnDiagnostics::from_column(0, heights.column(0), params.dx);
    let last = ColumnDiagnostics::from_column(
        heights.timesteps(),
        heights.last_column(),
        params.dx,
    );
    info!(
        "Ran {} steps on {} nodes: mass {:.6e} -> {:.6e}, peak {:.4} at node {} -> {:.4} at node {}",
        heights.timesteps(),
        heights.grid_size(),
        first.mass,
        last.mass,
        first.max_height,
        first.peak_index + 1,
        last.max_height,
        last.peak_index + 1
    );

    if let Err(err) = write_output(args.output.as_ref(), &heights) {
        error!("Failed to write history: {}", err);
        return ExitCode::FAILURE;
    }

    if let Some(path) = &args.output {
        info!("Wrote history to {}", path.display());
    }

    ExitCode::SUCCESS
}
