use ahorro_energia_cliente::{
    app::{Action, Panel},
    config::AppConfig,
    mount::TerminalMount,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ahorro-energia",
    version,
    about = "Consulta recomendaciones de ahorro de energía para electrodomésticos"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ver todas las recomendaciones
    Todas,
    /// Buscar una recomendación por ID
    Id {
        #[arg(default_value = "")]
        id: String,
    },
    /// Buscar por nombre de electrodoméstico
    Electro {
        #[arg(default_value = "")]
        nombre: String,
    },
    /// Preguntar al chatbot
    Chatbot {
        #[arg(num_args = 0.., trailing_var_arg = true)]
        pregunta: Vec<String>,
    },
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Todas => Action::AllRecommendations,
            Command::Id { id } => Action::ById(id),
            Command::Electro { nombre } => Action::ByAppliance(nombre),
            Command::Chatbot { pregunta } => Action::Chatbot(pregunta.join(" ")),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Cargar .env e inicializar logging (a stderr, la salida es para los resultados)
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 2. Cargar configuración
    let cfg = AppConfig::from_env().context("Error al cargar la configuración")?;
    info!("API en {}", cfg.base_url);

    // 3. Consultar y mostrar
    let panel = Panel::from_config(&cfg)?;
    let mut mount = TerminalMount::new();
    panel.run(&cli.command.into(), &mut mount).await;
    mount.finish();

    Ok(())
}
