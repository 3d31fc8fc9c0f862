use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Import from wordscope-core
use wordscope_core::{AnalysisConfig, WordFrequencyProcessor, RESEARCH_ROOT};

// Import CLI utilities
use wordscope::{resolve_config_path, ModelManager};

#[derive(Parser)]
#[command(name = "wordscope")]
#[command(about = "Most common words, overall and per part of speech, for every Markdown file under ./research")]
struct Args {
    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// spaCy model name or path to a model directory
    #[arg(short, long)]
    model: Option<String>,

    /// Number of rows per frequency table
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Python interpreter with spaCy installed
    #[arg(long)]
    python: Option<String>,

    /// Do not download the model when it is missing
    #[arg(long)]
    no_download: bool,

    /// Print headers without bold/underline styling
    #[arg(long)]
    no_color: bool,

    /// Print timings for read/analyze/count steps to stderr
    #[arg(long)]
    profile: bool,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.show_configs {
        show_help();
        return Ok(());
    }

    // Load config, then apply CLI overrides
    let working_dir = std::env::current_dir()?;
    let config_path = resolve_config_path(args.config.as_deref(), &working_dir);
    let mut config = AnalysisConfig::load_with_fallback(config_path.as_deref());

    match &config_path {
        Some(path) => eprintln!("📋 Loaded config from: {}", path.display()),
        None => eprintln!("📋 Using default config"),
    }

    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(top) = args.top {
        config.top_n = top;
    }
    if let Some(python) = args.python {
        config.python = python;
    }
    if args.no_download {
        config.auto_download = false;
    }
    if args.no_color {
        config.color = false;
    }

    let root = Path::new(RESEARCH_ROOT);
    if !root.is_dir() {
        eprintln!("⚠️  No {}/ directory found, nothing to report", RESEARCH_ROOT);
        return Ok(());
    }

    if config.auto_download {
        ModelManager::new(&config.python).ensure_model(&config.model)?;
    }

    let mut processor = WordFrequencyProcessor::new_spacy(&config);
    eprintln!("🚀 Using {} with model {}", processor.analyzer_name(), config.model);
    eprintln!("📄 Scanning: {}/**/*.md", RESEARCH_ROOT);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match processor.run_with_profiling(root, &mut out, args.profile) {
        Ok(count) => {
            eprintln!("✅ Reported on {} file(s)", count);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Processing failed: {:#}", anyhow::Error::from(e));
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn show_help() {
    println!("\n📋 Available Configuration Options:");
    println!("  --config <path>         Load custom config file (default: ./wordscope.yaml, then user config dir)");
    println!("  --model <name|path>     spaCy model to load (default: en_core_web_sm)");
    println!("  --top <n>               Rows per frequency table (default: 10)");
    println!("  --python <path>         Python interpreter with spaCy installed (default: python3)");
    println!("  --no-download           Fail instead of downloading a missing model");
    println!("  --no-color              Plain headers without bold/underline");
    println!("  --profile               Print step timings to stderr");

    println!("\n📄 Config file keys (YAML):");
    println!("  model: en_core_web_sm");
    println!("  top_n: 10");
    println!("  python: python3");
    println!("  auto_download: true");
    println!("  color: true");

    println!("\n📁 Input:");
    println!("  Every *.md file under ./{}/ (recursive)", RESEARCH_ROOT);

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- ");
    println!("  cargo run -- --top 5 --no-color > report.txt");
    println!("  cargo run -- --model en_core_web_md --python .venv/bin/python");
}
