use clap::{Parser, Subcommand};
use dotenv::dotenv;
use stepgate_rs::gate::condition::{Coercion, ConditionEvaluator};
use stepgate_rs::gate::loader::DocumentLoader;
use stepgate_rs::gate::path::get_by_path;
use stepgate_rs::gate::redirect::RedirectionSpec;
use stepgate_rs::gate::state::StepStore;
use stepgate_rs::support::actor::{current_actor_or_system, EnvActorProvider};
use stepgate_rs::support::{codec, html};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a condition list against step data
    Eval {
        /// Path to the condition list (JSON or YAML)
        #[arg(short, long)]
        conditions: String,

        /// Path to the step data, keyed by step then field (JSON or YAML)
        #[arg(short, long)]
        data: String,

        /// How resolved values are coerced: text or match-expected
        #[arg(long)]
        coercion: Option<String>,
    },
    /// Print the node at a dot path in a document
    Path {
        /// Path to the document (JSON or YAML)
        #[arg(short, long)]
        document: String,

        /// Dot-separated path, e.g. a.b.c
        #[arg(short, long)]
        path: String,
    },
    /// Print the redirection name and target step of a document
    Redirect {
        /// Path to the redirection document (JSON or YAML)
        #[arg(short, long)]
        document: String,
    },
    /// HTML-escape text
    Escape { text: String },
    /// gzip and Base64-encode text
    Compress { text: String },
    /// Reverse `compress`
    Decompress { text: String },
    /// Show the current actor
    Whoami,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let loader = DocumentLoader::new();

    match args.command {
        Commands::Eval {
            conditions,
            data,
            coercion,
        } => {
            let mode = coercion.or_else(|| std::env::var("STEPGATE_COERCION").ok());
            let coercion: Coercion = match mode {
                Some(mode) => mode.parse()?,
                None => Coercion::default(),
            };
            log::info!("Evaluating {} with {:?} coercion", conditions, coercion);

            let doc = loader.load_document(&conditions)?;
            let store = StepStore::from_json(loader.load_document(&data)?)?;
            let evaluator = ConditionEvaluator::new().with_coercion(coercion);

            let passed = evaluator.evaluate_document(Some(&doc), Some(&store));
            println!("{}", passed);
            if !passed {
                std::process::exit(1);
            }
        }
        Commands::Path { document, path } => {
            let doc = loader.load_document(&document)?;
            match get_by_path(Some(&doc), &path) {
                Some(node) => println!("{}", node),
                None => {
                    eprintln!("Path not found: {}", path);
                    std::process::exit(1);
                }
            }
        }
        Commands::Redirect { document } => {
            let doc = loader.load_document(&document)?;
            let spec = RedirectionSpec::from(&doc);
            println!("name: {}", spec.name());
            println!("targetStep: {}", spec.target_step().unwrap_or("-"));
        }
        Commands::Escape { text } => println!("{}", html::escape_html(&text)),
        Commands::Compress { text } => println!("{}", codec::compress(&text)?),
        Commands::Decompress { text } => println!("{}", codec::decompress(&text)?),
        Commands::Whoami => {
            let actor = current_actor_or_system(&EnvActorProvider::new());
            println!("{}", actor);
        }
    }

    Ok(())
}
