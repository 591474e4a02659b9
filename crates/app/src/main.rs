use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use masterclass_core::model::{AiSettings, Catalog, CompletedSet, TopicId};
use services::assistant::{EMPTY_ANSWER, EMPTY_EXPLANATION};
use services::{AppServices, ProgressService, TutorService, ai_settings_from_env};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_FILE: &str = "masterclass.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingOperand { command: &'static str, operand: &'static str },
    UnknownArg(String),
    UiOnlyFlag { flag: &'static str },
    UnknownSubcommand(String),
    InvalidDbUrl { raw: String },
    UnknownTopic(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingOperand { command, operand } => {
                write!(f, "{command} requires {operand}")
            }
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UiOnlyFlag { flag } => write!(f, "{flag} only applies to the ui command"),
            ArgsError::UnknownSubcommand(arg) => write!(f, "unknown subcommand: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::UnknownTopic(id) => write!(f, "unknown topic id: {id}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    completed: CompletedSet,
    topic: Option<TopicId>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn tutor(&self) -> Arc<TutorService> {
        self.services.tutor()
    }

    fn initial_completed(&self) -> CompletedSet {
        self.completed.clone()
    }

    fn initial_topic(&self) -> Option<TopicId> {
        self.topic.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui]                            [--db <sqlite_url>] [--topic <id>] [--debug]");
    eprintln!("  app progress                        [--db <sqlite_url>]");
    eprintln!("  app toggle <topic-id>               [--db <sqlite_url>]");
    eprintln!("  app explain <topic-id> [question...]");
    eprintln!("  app review <file>");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://<cwd>/{DEFAULT_DB_FILE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MASTERCLASS_DB_URL, MASTERCLASS_AI_API_KEY, MASTERCLASS_AI_BASE_URL,");
    eprintln!("  MASTERCLASS_AI_MODEL, MASTERCLASS_AI_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
    Toggle(String),
    Explain {
        topic: String,
        question: Option<String>,
    },
    Review(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Ui,
    Progress,
    Toggle,
    Explain,
    Review,
}

impl CommandKind {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            "toggle" => Some(Self::Toggle),
            "explain" => Some(Self::Explain),
            "review" => Some(Self::Review),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    db_url: String,
    topic: Option<String>,
    debug: bool,
}

#[derive(Debug)]
enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    /// `env_db` is the value of `MASTERCLASS_DB_URL`; flags override it.
    fn parse(argv: Vec<String>, env_db: Option<String>) -> Result<Parsed, ArgsError> {
        let mut iter = argv.into_iter().peekable();

        // Launch the UI when no subcommand is given.
        let first = iter.peek().cloned();
        let kind = match first.as_deref() {
            None => CommandKind::Ui,
            Some(first) if first.starts_with('-') => CommandKind::Ui,
            Some(first) => {
                let kind = CommandKind::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownSubcommand(first.to_string()))?;
                iter.next();
                kind
            }
        };

        let mut db_url = env_db
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url(DEFAULT_DB_FILE.into()), normalize_sqlite_url);
        let mut topic = None;
        let mut debug = false;
        let mut operands = Vec::new();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut iter, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--topic" => topic = Some(require_value(&mut iter, "--topic")?),
                "--debug" => debug = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ if arg.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => operands.push(arg),
            }
        }

        if topic.is_some() && kind != CommandKind::Ui {
            return Err(ArgsError::UiOnlyFlag { flag: "--topic" });
        }

        let command = build_command(kind, operands)?;
        Ok(Parsed::Run(Self {
            command,
            db_url,
            topic,
            debug,
        }))
    }
}

fn build_command(kind: CommandKind, operands: Vec<String>) -> Result<Command, ArgsError> {
    let mut operands = operands.into_iter();
    let command = match kind {
        CommandKind::Ui => Command::Ui,
        CommandKind::Progress => Command::Progress,
        CommandKind::Toggle => Command::Toggle(operands.next().ok_or(
            ArgsError::MissingOperand {
                command: "toggle",
                operand: "<topic-id>",
            },
        )?),
        CommandKind::Explain => {
            let topic = operands.next().ok_or(ArgsError::MissingOperand {
                command: "explain",
                operand: "<topic-id>",
            })?;
            let question = operands.by_ref().collect::<Vec<_>>().join(" ");
            return Ok(Command::Explain {
                topic,
                question: (!question.trim().is_empty()).then_some(question),
            });
        }
        CommandKind::Review => Command::Review(PathBuf::from(operands.next().ok_or(
            ArgsError::MissingOperand {
                command: "review",
                operand: "<file>",
            },
        )?)),
    };

    match operands.next() {
        Some(extra) => Err(ArgsError::UnknownArg(extra)),
        None => Ok(command),
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// `--debug` beats `RUST_LOG`; otherwise `RUST_LOG` applies, defaulting to info.
fn filter_directives(debug: bool, rust_log: Option<String>) -> String {
    if debug {
        return "debug".into();
    }
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "info".into())
}

fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directives = filter_directives(debug, std::env::var("RUST_LOG").ok());
    let filter = tracing_subscriber::EnvFilter::try_new(&directives).unwrap_or_else(|error| {
        eprintln!("ignoring invalid RUST_LOG ({error}); using info");
        tracing_subscriber::EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| format!("failed to initialize tracing subscriber: {error}"))?;
    Ok(())
}

/// Invalid AI settings leave the tutor without a backend; the UI still runs.
fn load_ai_settings() -> AiSettings {
    ai_settings_from_env().unwrap_or_else(|error| {
        tracing::warn!(%error, "invalid AI settings; tutor answers will use fallback text");
        AiSettings::default()
    })
}

async fn open_services(db_url: &str, ai: &AiSettings) -> Result<AppServices, Box<dyn std::error::Error>> {
    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(db_url)?;
    Ok(AppServices::new_sqlite(db_url, ai).await?)
}

fn topic_title(catalog: &Catalog, id: &str) -> Result<String, ArgsError> {
    catalog
        .get(id)
        .map(|topic| topic.title().to_string())
        .ok_or_else(|| ArgsError::UnknownTopic(id.to_string()))
}

fn print_progress(catalog: &Catalog, completed: &CompletedSet) {
    let progress = completed.progress(catalog);
    println!(
        "CURRICULUM PROGRESS: {}/{}",
        progress.completed, progress.total
    );
    for group in catalog.grouped() {
        println!();
        println!("{}", group.category);
        for topic in group.topics {
            let marker = if completed.contains(topic.id().as_str()) {
                "x"
            } else {
                " "
            };
            println!("  [{marker}] {:<22} {}", topic.id(), topic.title());
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match Args::parse(argv, std::env::var("MASTERCLASS_DB_URL").ok()) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(error) => {
            eprintln!("{error}");
            print_usage();
            return Err(error.into());
        }
    };

    init_tracing(parsed.debug)?;
    let ai = load_ai_settings();

    match parsed.command {
        Command::Ui => {
            let services = open_services(&parsed.db_url, &ai).await?;
            let completed = services.progress().load().await;
            tracing::info!(
                db = %parsed.db_url,
                completed = completed.len(),
                "launching desktop app"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services,
                completed,
                topic: parsed.topic.map(TopicId::from),
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("C Masterclass")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Progress => {
            let services = open_services(&parsed.db_url, &ai).await?;
            let completed = services.progress().load().await;
            print_progress(&services.catalog(), &completed);
            Ok(())
        }
        Command::Toggle(id) => {
            let services = open_services(&parsed.db_url, &ai).await?;
            let catalog = services.catalog();
            let title = topic_title(&catalog, &id)?;
            let progress = services.progress();

            let current = progress.load().await;
            let next = progress.toggle(&TopicId::from(id.as_str()), &current);
            progress.try_persist(&next).await?;

            let state = if next.contains(&id) {
                "completed"
            } else {
                "not completed"
            };
            let counts = next.progress(&catalog);
            println!(
                "{title}: {state} ({}/{})",
                counts.completed, counts.total
            );
            Ok(())
        }
        Command::Explain { topic, question } => {
            let services = AppServices::in_memory(&ai);
            let title = topic_title(&services.catalog(), &topic)?;
            let reply = services.tutor().explain(&title, question.as_deref()).await;
            if reply.trim().is_empty() {
                let placeholder = if question.is_some() {
                    EMPTY_ANSWER
                } else {
                    EMPTY_EXPLANATION
                };
                println!("{placeholder}");
            } else {
                println!("{reply}");
            }
            Ok(())
        }
        Command::Review(path) => {
            let code = std::fs::read_to_string(&path)
                .map_err(|error| format!("cannot read {}: {error}", path.display()))?;
            let services = AppServices::in_memory(&ai);
            println!("{}", services.tutor().review_code(&code).await);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
