use clap::{Parser, Subcommand};
use escape3ds::api::{AddUserForm, ApiError, HttpBackend, LoginForm, UserType};
use escape3ds::config::{ClientConfig, ConfigError};
use escape3ds::editor::EditPage;
use escape3ds::pages::gamelist::AddGameOutcome;
use escape3ds::pages::{Dialog, debug, gamelist};
use escape3ds::routes::Router;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("missing user key; pass --user-key or set ESCAPE3DS_USER_KEY")]
    MissingUserKey,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "escape3ds", about = "Escape-room authoring client")]
struct Cli {
    #[arg(long, env = "ESCAPE3DS_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a test account (debug page).
    AddUser {
        #[arg(long = "type")]
        user_type: UserType,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        pass: String,
        #[arg(long, default_value = "")]
        mail: String,
        #[arg(long, default_value = "")]
        oauth_id: String,
    },
    /// Log in with mail and password (debug page).
    Login {
        #[arg(long)]
        mail: String,
        #[arg(long)]
        pass: String,
    },
    /// Create a game (game-list page).
    AddGame {
        #[arg(long, env = "ESCAPE3DS_USER_KEY")]
        user_key: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    /// Route a path and print the editor's game.
    Edit {
        #[arg(default_value = "/")]
        path: String,
    },
}

/// Alerts go to stderr, navigation targets to stdout.
struct ConsoleDialog;

impl Dialog for ConsoleDialog {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn navigate(&self, to: &str) {
        println!("{to}");
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = ClientConfig::new(base_url, config.user_key, config.timeouts);
    }

    match cli.command {
        Command::AddUser { user_type, name, pass, mail, oauth_id } => {
            let backend = HttpBackend::new(config)?;
            let form = AddUserForm {
                user_type,
                user_name: name,
                user_pass: pass,
                user_mail: mail,
                user_oauth_id: oauth_id,
            };
            debug::submit_add_user(&backend, &form).await?;
        }
        Command::Login { mail, pass } => {
            let backend = HttpBackend::new(config)?;
            debug::submit_login(&backend, &ConsoleDialog, &LoginForm { mail, pass }).await?;
        }
        Command::AddGame { user_key, name, description } => {
            let user_key = user_key
                .or_else(|| config.user_key.clone())
                .ok_or(CliError::MissingUserKey)?;
            let backend = HttpBackend::new(config)?;
            let outcome = gamelist::submit_add_game(&backend, &ConsoleDialog, &user_key, &name, &description).await?;
            if let AddGameOutcome::Created(ack) = outcome {
                println!("{}", serde_json::to_string_pretty(&ack)?);
            }
        }
        Command::Edit { path } => {
            let router = Router::default();
            let route = router.navigate(&path);
            tracing::info!(%path, route = %route.path, template = %route.template, "editor route");
            let page = EditPage::for_view(route.view);
            println!("{}", serde_json::to_string_pretty(&page.game)?);
        }
    }
    Ok(())
}
