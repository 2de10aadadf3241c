use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};

use mindconnect::config::AppOptions;
use mindconnect::demo::seed_demo;
use mindconnect::render::Renderer;
use mindconnect::{Confirmation, FormData, Intent, MindConnect, ModalId, Repository};

#[derive(Parser, Debug)]
#[clap(name = "mindconnect", version)]
#[clap(about = "Drive the MindConnect view-model from the terminal", long_about = None)]
struct Cli {
    /// Start with the demo user, check-ins and connections
    #[clap(long)]
    demo: bool,

    /// Output debug logs to stderr
    #[clap(long)]
    debug: bool,

    /// Print intents as JSON instead of text
    #[clap(long)]
    json: bool,
}

/// Prints intents and remembers the last confirmation prompt
struct TerminalRenderer {
    json: bool,
    pending: Mutex<Option<Confirmation>>,
}

impl TerminalRenderer {
    fn new(json: bool) -> Self {
        Self {
            json,
            pending: Mutex::new(None),
        }
    }

    fn take_pending(&self) -> Option<Confirmation> {
        self.pending.lock().ok().and_then(|mut p| p.take())
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, intent: &Intent) {
        if let Intent::Confirm { confirmation } = intent {
            if let Ok(mut pending) = self.pending.lock() {
                *pending = Some(*confirmation);
            }
        }

        if self.json {
            match serde_json::to_string(intent) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("failed to encode intent: {}", e),
            }
            return;
        }

        match intent {
            Intent::ActivateView { view, nav } => {
                println!("[view] {} (nav: {})", view, nav.as_deref().unwrap_or("-"))
            }
            Intent::SetMobileMenu { open } => {
                println!("[menu] {}", if *open { "open" } else { "closed" })
            }
            Intent::ScrollToTop => {}
            Intent::OpenModal { modal } => println!("[modal] {} opened", modal),
            Intent::CloseModal { modal } => println!("[modal] {} closed", modal),
            Intent::ShowAlert { alert, .. } => println!("[{}] {}", alert.kind, alert.message),
            Intent::DismissAlert { id } => println!("[alert] #{} dismissed", id.0),
            Intent::SetLoading { form, loading } => {
                if *loading {
                    println!("[{}] submitting...", form)
                }
            }
            Intent::ResetForm { form } => println!("[{}] form reset", form),
            Intent::RefreshDashboard { metrics } => println!(
                "[dashboard] days joined: {}, connections: {}, check-ins: {}",
                metrics.days_joined, metrics.connections, metrics.checkins
            ),
            Intent::Confirm { confirmation } => {
                println!("[confirm] {} (yes/no)", confirmation.prompt())
            }
            Intent::Dial { uri } => println!("[dial] {}", uri),
        }
    }
}

/// Split a command line into words, keeping `"quoted text"` together
fn tokenize(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn form_from(args: &[String]) -> FormData {
    args.iter()
        .filter_map(|arg| arg.split_once('='))
        .collect()
}

fn modal_from(arg: Option<&String>) -> Option<ModalId> {
    match arg.map(String::as_str) {
        Some("checkin") => Some(ModalId::Checkin),
        Some("crisis") => Some(ModalId::Crisis),
        _ => None,
    }
}

const HELP: &str = "\
commands:
  show <view>                 home register support resources groups providers dashboard crisis
  menu                        toggle the mobile menu
  open|close|backdrop <modal> checkin or crisis
  esc                         close all modals
  register k=v ...            fullName= email= phone= age= location=
                              supportTypes= urgencyLevel= privacy=on
  urgency <level>             change the urgency field
  checkin k=v ...             moodRating= activities= notes=
  search k=v ...              searchLocation= supportType= meetingFormat=
  peer | healthcare | counselors | faith | ngos
  group <id> | book <id> | ministry <id>
  call                        call the crisis line
  yes | no                    answer the pending prompt
  dashboard | export | help | quit";

async fn dispatch(
    app: &MindConnect,
    renderer: &TerminalRenderer,
    words: &[String],
) -> anyhow::Result<bool> {
    let Some((command, args)) = words.split_first() else {
        return Ok(true);
    };
    let first = args.first().map(String::as_str).unwrap_or_default();

    match command.as_str() {
        "show" => app.show_view(first).await,
        "menu" => app.toggle_mobile_menu().await,
        "open" | "close" | "backdrop" => match modal_from(args.first()) {
            Some(modal) if command == "open" => app.open_modal(modal).await,
            Some(modal) if command == "close" => app.close_modal(modal).await,
            Some(modal) => app.backdrop_click(modal).await,
            None => println!("unknown modal, expected checkin or crisis"),
        },
        "esc" => app.escape().await,
        "register" => {
            if let Err(e) = app.submit_registration(&form_from(args)).await {
                log::debug!("registration failed: {}", e);
            }
        }
        "urgency" => {
            app.urgency_changed(first).await;
        }
        "checkin" => {
            if let Err(e) = app.submit_checkin(&form_from(args)).await {
                log::debug!("check-in failed: {}", e);
            }
        }
        "search" => {
            if let Err(e) = app.submit_support_search(&form_from(args)).await {
                log::debug!("search failed: {}", e);
            }
        }
        "peer" => app.join_peer_group().await,
        "healthcare" => app.find_healthcare().await,
        "counselors" => app.find_counselors().await,
        "faith" => app.find_faith_support().await,
        "ngos" => app.explore_ngos().await,
        "group" => app.join_group(first).await,
        "book" => app.book_appointment(first).await,
        "ministry" => app.join_ministry(first).await,
        "call" => app.call_crisis_line().await,
        "yes" | "no" => match renderer.take_pending() {
            Some(confirmation) => app.resolve_confirmation(confirmation, command == "yes").await,
            None => println!("nothing to confirm"),
        },
        "dashboard" => {
            if app.refresh_dashboard().await.is_none() {
                println!("[dashboard] register first");
            }
        }
        "export" => {
            println!("{}", app.export_json().await.context("encoding snapshot")?);
        }
        "help" => println!("{}", HELP),
        "quit" | "exit" => return Ok(false),
        other => println!("unknown command '{}', try 'help'", other),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("RUST_LOG", "debug");
    }
    pretty_env_logger::init();

    let options = AppOptions::from_env().context("reading MINDCONNECT_* settings")?;
    let renderer = Arc::new(TerminalRenderer::new(cli.json));

    let mut repository = Repository::new();
    if cli.demo {
        seed_demo(&mut repository, Utc::now());
    }
    let app = MindConnect::new_with_options(renderer.clone(), options).with_repository(repository);
    app.start(None).await;

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if !dispatch(&app, &renderer, &tokenize(&line)).await? {
            break;
        }
    }
    Ok(())
}
