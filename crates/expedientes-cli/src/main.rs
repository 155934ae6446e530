//! `expedientes` — case-file tracking from the command line.
//!
//! # Usage
//!
//! ```
//! expedientes create --name "Exp. 2024-12345-NQN" --description "Pedido de insumos"
//! expedientes note "Exp. 2024-12345-NQN" "Elevado a dirección."
//! expedientes export "Exp. 2024-12345-NQN"
//! ```
//!
//! Settings come from `config.toml` (or the path given with `--config`),
//! overridable through `EXPEDIENTES_*` environment variables.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use expedientes_core::store::CaseFileStore;
use expedientes_store_sqlite::SqliteKv;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
  name = "expedientes",
  version,
  about = "Seguimiento de expedientes administrativos"
)]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Registrar un nuevo expediente.
  Create {
    /// Número de nota o expediente.
    #[arg(long)]
    name: String,
    /// Descripción de la nota o expediente.
    #[arg(long)]
    description: String,
    /// Fecha de generación (aaaa-mm-dd); hoy si se omite.
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Agregar una nota de seguimiento.
  Note {
    /// Expediente: id o nombre exacto.
    file: String,
    /// Texto de la nota.
    text: String,
  },
  /// Marcar como resuelto, o reabrir.
  Toggle {
    /// Expediente: id o nombre exacto.
    file: String,
  },
  /// Editar los datos identificatorios.
  Edit {
    /// Expediente: id o nombre exacto.
    file: String,
    /// Nuevo número de nota o expediente.
    #[arg(long)]
    name: Option<String>,
    /// Nueva fecha de generación (aaaa-mm-dd).
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Nueva descripción.
    #[arg(long)]
    description: Option<String>,
  },
  /// Eliminar un expediente. Pide confirmación.
  Delete {
    /// Expediente: id o nombre exacto.
    file: String,
    /// No pedir confirmación.
    #[arg(long)]
    yes: bool,
  },
  /// Listar todos los expedientes.
  List,
  /// Mostrar el detalle de un expediente.
  Show {
    /// Expediente: id o nombre exacto.
    file: String,
  },
  /// Exportar el informe de un expediente.
  Export {
    /// Expediente: id o nombre exacto.
    file: String,
  },
  /// Exportar el listado completo.
  ExportSummary,
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Shape of the optional TOML settings file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct Settings {
  /// SQLite file holding the persisted collection.
  store_path: PathBuf,
  /// Directory where exported documents are written.
  export_dir: PathBuf,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      store_path: PathBuf::from("expedientes.db"),
      export_dir: PathBuf::from("."),
    }
  }
}

fn load_settings(path: &Path) -> anyhow::Result<Settings> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("EXPEDIENTES"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise settings")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = load_settings(&cli.config)?;
  tracing::debug!(?settings, "settings loaded");

  let store_path = expand_tilde(&settings.store_path);
  let export_dir = expand_tilde(&settings.export_dir);

  let backend = SqliteKv::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let mut store = CaseFileStore::load(backend).await;

  match cli.command {
    Command::Create { name, description, date } => {
      commands::create(&mut store, name, description, date).await
    }
    Command::Note { file, text } => commands::note(&mut store, &file, &text).await,
    Command::Toggle { file } => commands::toggle(&mut store, &file).await,
    Command::Edit { file, name, date, description } => {
      commands::edit(&mut store, &file, name, date, description).await
    }
    Command::Delete { file, yes } => commands::delete(&mut store, &file, yes).await,
    Command::List => commands::list(&store),
    Command::Show { file } => commands::show(&store, &file),
    Command::Export { file } => commands::export(&store, &file, &export_dir).await,
    Command::ExportSummary => commands::export_summary(&store, &export_dir).await,
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
