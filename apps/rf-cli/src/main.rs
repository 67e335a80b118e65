use clap::{Args, Parser, Subcommand};
use rf_core::Real;
use rf_kinetics::{DomainError, ReactorParameters, SteadyStateCB};
use rf_project::{Catalog, KineticCoeffsDef, ProjectError, RangeDef, RawTypeDef};
use rf_sweep::{ReportHeader, SweepError, execute_grid_sweep, render_csv_report, write_csv_report};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("refusing to overwrite {path} (use --force)")]
    Exists { path: String },

    #[error("no grid points at CA_in = {ca_in}")]
    EmptySeries { ca_in: Real },
}

#[derive(Parser)]
#[command(name = "rf-cli")]
#[command(about = "ReactorFlow CLI - steady-state CSTR (A->B->C) calculations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate outlet concentrations for one operating point
    Eval {
        /// Volumetric flow rate
        #[arg(long, allow_negative_numbers = true)]
        q: Real,
        /// Inlet concentration of A
        #[arg(long, allow_negative_numbers = true)]
        ca_in: Real,
        /// Rate constant A->B
        #[arg(long, allow_negative_numbers = true)]
        k1: Real,
        /// Rate constant B->C
        #[arg(long, allow_negative_numbers = true)]
        k2: Real,
        /// Reactor volume
        #[arg(long, allow_negative_numbers = true)]
        vr: Real,
    },
    /// Write the default feedstock catalog
    Init {
        /// Path to the catalog file (.yaml or .json)
        catalog_path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List feedstocks in a catalog
    Types {
        /// Path to the catalog file (.yaml or .json)
        catalog_path: PathBuf,
    },
    /// Validate catalog syntax and coefficients
    Validate {
        /// Path to the catalog file (.yaml or .json)
        catalog_path: PathBuf,
    },
    /// Sweep Q and CA_in for one feedstock
    Sweep {
        /// Path to the catalog file (.yaml or .json)
        catalog_path: PathBuf,
        /// Raw type ID to sweep
        raw_type_id: String,
        /// Output CSV report path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the CB(Q) curve of one feedstock at a fixed CA_in
    Series {
        /// Path to the catalog file (.yaml or .json)
        catalog_path: PathBuf,
        /// Raw type ID to sweep
        raw_type_id: String,
        /// Inlet concentration (defaults to the first grid value)
        #[arg(long)]
        ca_in: Option<Real>,
    },
    /// Add a feedstock to a catalog
    AddType {
        /// Path to the catalog file (.yaml or .json)
        catalog_path: PathBuf,
        /// New raw type ID
        raw_type_id: String,
        /// Display name
        name: String,
        #[command(flatten)]
        coeffs: CoeffArgs,
    },
    /// Change coefficients of an existing feedstock
    SetCoeffs {
        /// Path to the catalog file (.yaml or .json)
        catalog_path: PathBuf,
        /// Raw type ID to edit
        raw_type_id: String,
        #[command(flatten)]
        coeffs: CoeffOverrides,
    },
}

#[derive(Args)]
#[command(next_help_heading = "Coefficients")]
struct CoeffArgs {
    #[arg(long, allow_negative_numbers = true)]
    k1: Real,
    #[arg(long, allow_negative_numbers = true)]
    k2: Real,
    #[arg(long, allow_negative_numbers = true)]
    vr: Real,
    #[arg(long, allow_negative_numbers = true)]
    q_min: Real,
    #[arg(long, allow_negative_numbers = true)]
    q_max: Real,
    #[arg(long, allow_negative_numbers = true)]
    dq: Real,
    #[arg(long, allow_negative_numbers = true)]
    ca_in_min: Real,
    #[arg(long, allow_negative_numbers = true)]
    ca_in_max: Real,
    #[arg(long, allow_negative_numbers = true)]
    dca_in: Real,
}

impl From<CoeffArgs> for KineticCoeffsDef {
    fn from(a: CoeffArgs) -> Self {
        Self {
            k1: a.k1,
            k2: a.k2,
            vr: a.vr,
            q: RangeDef::new(a.q_min, a.q_max, a.dq),
            ca_in: RangeDef::new(a.ca_in_min, a.ca_in_max, a.dca_in),
        }
    }
}

/// Same flags as [`CoeffArgs`]; only the given ones change.
#[derive(Args)]
#[command(next_help_heading = "Coefficients")]
struct CoeffOverrides {
    #[arg(long, allow_negative_numbers = true)]
    k1: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    k2: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    vr: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    q_min: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    q_max: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    dq: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    ca_in_min: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    ca_in_max: Option<Real>,
    #[arg(long, allow_negative_numbers = true)]
    dca_in: Option<Real>,
}

impl CoeffOverrides {
    fn apply(&self, mut c: KineticCoeffsDef) -> KineticCoeffsDef {
        let set = |slot: &mut Real, value: Option<Real>| {
            if let Some(v) = value {
                *slot = v;
            }
        };
        set(&mut c.k1, self.k1);
        set(&mut c.k2, self.k2);
        set(&mut c.vr, self.vr);
        set(&mut c.q.min, self.q_min);
        set(&mut c.q.max, self.q_max);
        set(&mut c.q.step, self.dq);
        set(&mut c.ca_in.min, self.ca_in_min);
        set(&mut c.ca_in.max, self.ca_in_max);
        set(&mut c.ca_in.step, self.dca_in);
        c
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Eval { q, ca_in, k1, k2, vr } => {
            cmd_eval(ReactorParameters::new(q, ca_in, k1, k2, vr))
        }
        Commands::Init {
            catalog_path,
            force,
        } => cmd_init(&catalog_path, force),
        Commands::Types { catalog_path } => cmd_types(&catalog_path),
        Commands::Validate { catalog_path } => cmd_validate(&catalog_path),
        Commands::Sweep {
            catalog_path,
            raw_type_id,
            output,
        } => cmd_sweep(&catalog_path, &raw_type_id, output.as_deref()),
        Commands::Series {
            catalog_path,
            raw_type_id,
            ca_in,
        } => cmd_series(&catalog_path, &raw_type_id, ca_in),
        Commands::AddType {
            catalog_path,
            raw_type_id,
            name,
            coeffs,
        } => cmd_add_type(&catalog_path, raw_type_id, name, coeffs.into()),
        Commands::SetCoeffs {
            catalog_path,
            raw_type_id,
            coeffs,
        } => cmd_set_coeffs(&catalog_path, &raw_type_id, &coeffs),
    }
}

fn cmd_eval(params: ReactorParameters) -> CliResult<()> {
    let state = SteadyStateCB::solve(&params)?;

    println!("CA = {:.6}", state.ca);
    println!("CB = {:.6}", state.cb);
    if let Some(tau) = params.residence_time() {
        println!("Residence time Vr/Q = {:.6}", tau.value);
    }
    Ok(())
}

fn cmd_init(catalog_path: &Path, force: bool) -> CliResult<()> {
    if catalog_path.exists() && !force {
        return Err(CliError::Exists {
            path: catalog_path.display().to_string(),
        });
    }
    let catalog = Catalog::default_seed();
    rf_project::save(catalog_path, &catalog)?;
    println!(
        "✓ Wrote {} feedstocks to {}",
        catalog.raw_types.len(),
        catalog_path.display()
    );
    Ok(())
}

fn cmd_types(catalog_path: &Path) -> CliResult<()> {
    let catalog = rf_project::load(catalog_path)?;

    if catalog.raw_types.is_empty() {
        println!("No feedstocks found in catalog");
    } else {
        println!("Feedstocks in '{}':", catalog.name);
        for raw in &catalog.raw_types {
            let c = &raw.coeffs;
            println!(
                "  {} - {} (k1={}, k2={}, Vr={})",
                raw.id, raw.name, c.k1, c.k2, c.vr
            );
        }
    }
    Ok(())
}

fn cmd_validate(catalog_path: &Path) -> CliResult<()> {
    println!("Validating catalog: {}", catalog_path.display());
    rf_project::load(catalog_path)?;
    println!("✓ Catalog is valid");
    Ok(())
}

fn cmd_sweep(catalog_path: &Path, raw_type_id: &str, output: Option<&Path>) -> CliResult<()> {
    let catalog = rf_project::load(catalog_path)?;
    let raw = catalog.get(raw_type_id)?;
    let sweep = raw.to_grid_sweep()?;

    tracing::info!(raw_type = %raw.id, points = sweep.num_points(), "running sweep");
    let result = execute_grid_sweep(&sweep)?;
    let header = ReportHeader::new(raw.name.clone(), sweep);

    // Write to file or stdout
    if let Some(path) = output {
        write_csv_report(path, &header, &result)?;
        println!("✓ Swept {} ({} points)", raw.name, result.points.len());
        if result.num_failed > 0 {
            println!("  Outside model domain: {}", result.num_failed);
        }
        if let Some(best) = result.max_point()
            && let Some(cb) = best.cb
        {
            println!(
                "  Max CB = {:.4} at Q = {:.2}, CA_in = {:.3}",
                cb, best.q, best.ca_in
            );
        }
        println!("  Report: {}", path.display());
    } else {
        print!("{}", render_csv_report(&header, &result)?);
    }

    Ok(())
}

fn cmd_series(catalog_path: &Path, raw_type_id: &str, ca_in: Option<Real>) -> CliResult<()> {
    let catalog = rf_project::load(catalog_path)?;
    let raw = catalog.get(raw_type_id)?;
    let sweep = raw.to_grid_sweep()?;
    let ca_in = ca_in.unwrap_or(sweep.ca_in.min);

    let result = execute_grid_sweep(&sweep)?;
    let series = result.series_at_ca_in(ca_in);
    if series.is_empty() {
        return Err(CliError::EmptySeries { ca_in });
    }

    println!("# {} at CA_in = {:.3}", raw.name, ca_in);
    println!("Q;CB");
    for (q, cb) in series {
        println!("{q:.2};{cb:.4}");
    }
    Ok(())
}

fn cmd_add_type(
    catalog_path: &Path,
    id: String,
    name: String,
    coeffs: KineticCoeffsDef,
) -> CliResult<()> {
    let mut catalog = rf_project::load(catalog_path)?;
    let label = format!("{name} ({id})");
    catalog.add_raw_type(RawTypeDef { id, name, coeffs })?;
    rf_project::save(catalog_path, &catalog)?;

    println!("✓ Added {label}");
    Ok(())
}

fn cmd_set_coeffs(catalog_path: &Path, raw_type_id: &str, overrides: &CoeffOverrides) -> CliResult<()> {
    let mut catalog = rf_project::load(catalog_path)?;
    let coeffs = overrides.apply(catalog.get(raw_type_id)?.coeffs);
    catalog.update_coeffs(raw_type_id, coeffs)?;
    rf_project::save(catalog_path, &catalog)?;

    println!("✓ Updated coefficients of {raw_type_id}");
    Ok(())
}
