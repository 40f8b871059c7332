use arff::{summary_to_json, ArffFiles, ClassSelector, LoaderConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "ARFF info - Inspect and load Attribute-Relation File Format datasets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show counts and class labels without building the matrix
    Summary {
        /// Path to the ARFF file
        path: PathBuf,

        #[command(flatten)]
        class: ClassArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load the full dataset and print its shape
    Load {
        /// Path to the ARFF file
        path: PathBuf,

        #[command(flatten)]
        class: ClassArgs,

        /// Read with a buffered read instead of a memory map
        #[arg(long)]
        no_mmap: bool,

        /// Number of rows to print
        #[arg(long, default_value_t = 5)]
        head: usize,
    },
}

#[derive(clap::Args)]
struct ClassArgs {
    /// Name of the class attribute
    #[arg(long, conflicts_with = "first")]
    class: Option<String>,

    /// Use the first attribute as the class instead of the last
    #[arg(long)]
    first: bool,
}

impl ClassArgs {
    fn selector(&self) -> ClassSelector {
        match &self.class {
            Some(name) => ClassSelector::named(name.as_str()),
            None => ClassSelector::from_position(!self.first),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match &cli.command {
        Commands::Summary { path, class, json } => {
            handle_summary(path, class.selector(), *json)?;
        }
        Commands::Load {
            path,
            class,
            no_mmap,
            head,
        } => {
            handle_load(path, class.selector(), !*no_mmap, *head)?;
        }
    }

    let elapsed = start_time.elapsed();
    eprintln!("Completed in {elapsed:.2?}");

    Ok(())
}

fn handle_summary(
    path: &Path,
    selector: ClassSelector,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = arff::summarize_file(path, &selector, &LoaderConfig::from_env())?;

    if json {
        println!("{}", summary_to_json(&summary)?);
        return Ok(());
    }

    println!("File: {}", path.display());
    println!("  Samples: {}", summary.num_samples);
    println!("  Features: {}", summary.num_features);
    println!("  Class: {} {}", summary.class_name, summary.class_type);
    println!("  Classes ({}):", summary.num_classes);
    for label in &summary.class_labels {
        println!("    {label}");
    }
    println!("  Feature attributes:");
    for attribute in &summary.feature_info {
        println!("    {} {}", attribute.name, attribute.type_string);
    }
    Ok(())
}

fn handle_load(
    path: &Path,
    selector: ClassSelector,
    use_mmap: bool,
    head: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = LoaderConfig::from_env().with_mmap(use_mmap);
    let mut loader = ArffFiles::with_config(config);
    loader.load_with(path, selector)?;

    println!("File: {} (arff {})", path.display(), ArffFiles::version());
    println!("  X: {} features x {} samples", loader.x().len(), loader.size());
    println!("  y: {} labels", loader.y().len());
    println!("  Class: {} {}", loader.class_name(), loader.class_type());

    for attribute in loader.attributes() {
        let kind = match loader.numeric_attributes().get(&attribute.name) {
            Some(true) => "numeric".to_string(),
            _ => {
                let states = loader.states().get(&attribute.name).unwrap_or_default();
                format!("categorical, {} states", states.len())
            }
        };
        println!("    {} ({kind})", attribute.name);
    }

    for (code, label) in loader.labels().iter().enumerate() {
        println!("  {code} => {label}");
    }

    for sample in 0..head.min(loader.size()) {
        let row: Vec<String> = loader.x().iter().map(|column| column[sample].to_string()).collect();
        println!("  [{}] -> {}", row.join(", "), loader.y()[sample]);
    }
    Ok(())
}
