//! course-outline
//!
//! Drive a course home page from the command line: dump its outline, count its
//! parts, jump into the courseware or run a course search.

use clap::{Parser, Subcommand};
use course_pages::pages::{CourseHomePage, PageObject};
use course_pages::{BrowserSession, ConnectionOptions, Element, LaunchOptions, PageConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "course-outline")]
#[command(version)]
#[command(about = "Inspect and navigate an LMS course outline", long_about = None)]
struct Cli {
    /// Course key, e.g. course-v1:edX+DemoX+Demo_Course
    #[arg(long, short = 'c')]
    course_id: String,

    /// LMS root URL (default: $LMS_BASE_URL or http://localhost:8003)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// JSON page configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the wait timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<PathBuf>,

    /// WebSocket endpoint URL for remote browser connection
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the outline as JSON
    Outline,
    /// Print section, subsection and unit counts
    Counts {
        /// Section to count subsections of (default: first section)
        #[arg(long)]
        section: Option<String>,
    },
    /// Open a subsection by title
    GoTo { section: String, subsection: String },
    /// Open a subsection by zero-based indices
    GoToIndex { section_index: usize, subsection_index: usize },
    /// Search the course and print the results
    Search { term: String },
}

fn load_config(cli: &Cli) -> anyhow::Result<PageConfig> {
    let mut config = match &cli.config {
        Some(path) => PageConfig::from_json_file(path)?,
        None => PageConfig::from_env(),
    };
    if let Some(url) = &cli.base_url {
        config = PageConfig { base_url: url.trim_end_matches('/').to_string(), ..config };
    }
    if let Some(timeout) = cli.timeout_ms {
        config.wait = config.wait.timeout(timeout);
    }
    Ok(config)
}

fn open_session(cli: &Cli) -> anyhow::Result<BrowserSession> {
    if let Some(endpoint) = &cli.ws_endpoint {
        log::info!("Connecting to {}", endpoint);
        return Ok(BrowserSession::connect(ConnectionOptions::new(endpoint.clone()))?);
    }

    let mut options = LaunchOptions::new().headless(!cli.headed);
    if let Some(path) = &cli.executable_path {
        options = options.chrome_path(path);
    }
    if let Some(dir) = &cli.user_data_dir {
        options = options.user_data_dir(dir);
    }
    Ok(BrowserSession::launch(options)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let session = open_session(&cli)?;
    let page = session.page()?;

    let home = CourseHomePage::new(&page, &config, cli.course_id.clone());
    home.visit()?;

    match &cli.command {
        Command::Outline => {
            let outline = home.outline.sections()?;
            println!("{}", serde_json::to_string_pretty(&outline)?);
        }
        Command::Counts { section } => {
            println!("sections:    {}", home.outline.num_sections()?);
            println!("subsections: {}", home.outline.num_subsections(section.as_deref())?);
            println!("units:       {}", home.outline.num_units()?);
        }
        Command::GoTo { section, subsection } => {
            home.outline.go_to_section(section, subsection)?;
            println!("Arrived at '{}' / '{}'", section, subsection);
        }
        Command::GoToIndex { section_index, subsection_index } => {
            home.outline.go_to_section_by_index(*section_index, *subsection_index)?;
            println!("Arrived at section {} / subsection {}", section_index, subsection_index);
        }
        Command::Search { term } => {
            let results = home.search_for_term(term)?;
            results.wait_for_page()?;
            for (index, result) in results.search_results()?.iter().enumerate() {
                println!("{:>3}. {}", index + 1, result.first_line()?);
            }
        }
    }

    session.close()?;
    Ok(())
}
