use animal_classifier::app::App;
use animal_classifier::config::Config;
use animal_classifier::display::impl_console::PredictionDisplayConsole;
use animal_classifier::display::render::render_error;
use animal_classifier::library::logger::impl_console::LoggerConsole;
use animal_classifier::session::Session;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "animal-classifier", about = "Classify images with a pre-trained model")]
struct Args {
    /// Images to classify, in order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    #[arg(long)]
    model: Option<PathBuf>,

    /// Class names: a JSON string array, or one name per line.
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Optional normalization metadata (JSON).
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Minimum confidence in percent before a class is named.
    #[arg(long)]
    threshold: Option<f32>,

    #[arg(long)]
    image_size: Option<u32>,

    /// Rows in the detail table.
    #[arg(long)]
    top: Option<usize>,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            model_path: self.model.clone().unwrap_or(defaults.model_path),
            labels_path: self.labels.clone().unwrap_or(defaults.labels_path),
            stats_path: self.stats.clone().or(defaults.stats_path),
            image_size: self.image_size.unwrap_or(defaults.image_size),
            threshold: self.threshold.unwrap_or(defaults.threshold),
            top_k: self.top.unwrap_or(defaults.top_k),
            logger_timezone: defaults.logger_timezone,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let session = match Session::load(&config, logger) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("{}", render_error("startup", &error));
            return ExitCode::FAILURE;
        }
    };

    let display = Box::new(PredictionDisplayConsole::new(config.top_k));
    let mut app = App::new(session, display);

    let summary = match app.run(&args.images) {
        Ok(summary) => summary,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if summary.failed > 0 {
        eprintln!(
            "{} of {} images could not be classified",
            summary.failed,
            args.images.len()
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
