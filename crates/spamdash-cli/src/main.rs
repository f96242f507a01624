use anyhow::Result;
use clap::{Parser, Subcommand};
use spamdash_client::{ReqwestTransport, ViewController};
use spamdash_core::{DashboardConfig, Notification, NotificationLevel, SampleCategory, ViewState};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spamdash")]
#[command(about = "spamdash - spam classifier dashboard", long_about = None)]
struct Cli {
    /// Backend base URL (overrides SPAMDASH_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Only query the primary prediction backend
    #[arg(long, global = true)]
    primary_only: bool,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show model metadata
    Info,

    /// Classify a piece of text with every configured backend
    Predict {
        /// Text to classify
        text: Vec<String>,
    },

    /// Fetch a sample message (spam, ham or clear)
    Sample {
        category: SampleCategory,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spamdash=info,spamdash_client=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    tracing::debug!("Using backend at {}", config.base_url);

    let transport = ReqwestTransport::new(&config)?;
    let ctrl = ViewController::new(config, transport, print_notification);

    match cli.command {
        Some(Commands::Info) => cmd_info(&ctrl).await?,
        Some(Commands::Predict { text }) => cmd_predict(&ctrl, &text.join(" ")).await,
        Some(Commands::Sample { category }) => cmd_sample(&ctrl, category).await,
        None => run_interactive(&ctrl).await?,
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if cli.primary_only {
        config.endpoints.secondary_prediction = None;
    }
    if let Some(ms) = cli.timeout_ms {
        config.request_timeout_ms = Some(ms);
    }
    Ok(config)
}

fn print_notification(notification: Notification) {
    let tag = match notification.level {
        NotificationLevel::Success => "ok",
        NotificationLevel::Warning => "warn",
    };
    println!("  [{}] {}", tag, notification.message);
}

async fn run_interactive(ctrl: &ViewController) -> Result<()> {
    display_welcome();
    if let Err(e) = ctrl.initialize().await {
        println!("  Model info unavailable ({})", e);
    }
    ctrl.with_state(print_model_info);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (cmd, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let rest = rest.trim();

        match cmd.to_lowercase().as_str() {
            "help" | "h" | "?" => display_help(),
            "info" | "i" => {
                if let Err(e) = ctrl.initialize().await {
                    println!("Error: {}", e);
                }
                ctrl.with_state(print_model_info);
            }
            "sample" | "s" => match rest.parse::<SampleCategory>() {
                Ok(category) => {
                    ctrl.fill_sample_text(category).await;
                    ctrl.with_state(print_input);
                }
                Err(_) => println!("Usage: sample <spam|ham|clear>"),
            },
            "type" | "t" => {
                ctrl.set_input_text(rest);
                ctrl.with_state(print_input);
            }
            "submit" | "p" => {
                ctrl.submit().await;
                print_predictions(ctrl);
            }
            "show" => {
                ctrl.with_state(print_input);
                print_predictions(ctrl);
            }
            "clear" | "cls" => {
                print!("\x1B[2J\x1B[1;1H");
                stdout.flush()?;
            }
            "exit" | "quit" | "q" => {
                println!("  Goodbye!");
                break;
            }
            _ => {
                println!("Unknown command: {}. Type 'help' for available commands.", cmd);
            }
        }
    }

    Ok(())
}

fn display_welcome() {
    println!();
    println!("  spamdash - spam classifier dashboard");
    println!();
    println!("  sample, s <spam|ham>   # Load a sample message");
    println!("  type, t <text>         # Enter text to classify");
    println!("  submit, p              # Classify the current text");
    println!("  help                   # Show all command options");
    println!("  exit, quit, q          # Leave");
    println!();
}

fn display_help() {
    println!();
    println!("Available Commands:");
    println!("  info, i                Refetch and show model metadata");
    println!("  sample, s <category>   Load a sample message: spam, ham, or clear");
    println!("  type, t <text>         Replace the current text");
    println!("  submit, p              Send the current text to the prediction backends");
    println!("  show                   Show the current text and predictions");
    println!("  clear, cls             Clear screen");
    println!("  help, h                Show this help message");
    println!("  exit, quit, q          Leave");
    println!();
}

async fn cmd_info(ctrl: &ViewController) -> Result<()> {
    ctrl.initialize().await?;
    ctrl.with_state(print_model_info);
    Ok(())
}

async fn cmd_predict(ctrl: &ViewController, text: &str) {
    ctrl.set_input_text(text);
    ctrl.submit().await;
    print_predictions(ctrl);
}

async fn cmd_sample(ctrl: &ViewController, category: SampleCategory) {
    ctrl.fill_sample_text(category).await;
    ctrl.with_state(print_input);
}

fn print_model_info(state: &ViewState) {
    println!();
    println!("Model Info:");
    println!("{:-<50}", "");
    if state.model_info.is_empty() {
        println!("  (none)");
    }
    for (label, value) in state.model_info.display_rows() {
        println!("  {:<28} {}", label, value);
    }
}

fn print_input(state: &ViewState) {
    if state.input_text.is_empty() {
        println!("  Text: (empty)");
    } else {
        println!("  Text: {}", state.input_text);
    }
}

fn print_predictions(ctrl: &ViewController) {
    let backends = ctrl.config().prediction_backends();
    ctrl.with_state(|state| {
        println!();
        println!("Predictions:");
        println!("{:-<50}", "");
        for backend in backends {
            let result = state.predictions.get(backend);
            let value = if result.have_prediction {
                result.prediction().unwrap_or("?").to_string()
            } else {
                "-".to_string()
            };
            println!("  {:<32} {}", backend.label(), value);
        }
        println!();
    });
}
