use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use linedetect_core::config::store::ConfigStore;
use linedetect_core::config::threshold::ThresholdUpdate;
use linedetect_core::filtering::infrastructure::fixed_roi_provider::FixedRoiProvider;
use linedetect_core::filtering::infrastructure::hsv_threshold_filter::HsvThresholdFilter;
use linedetect_core::io::domain::frame_source::FrameSource;
use linedetect_core::io::infrastructure::image_file_sink::ImageFileSink;
use linedetect_core::io::infrastructure::image_file_source::ImageFileSource;
use linedetect_core::pipeline::filter_frames_use_case::FilterFramesUseCase;
use linedetect_core::pipeline::frame_emitter::FrameEmitter;
use linedetect_core::pipeline::infrastructure::streaming_pipeline_executor::StreamingPipelineExecutor;
use linedetect_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use linedetect_core::shared::rect::Rect;

/// HSV threshold filtering for camera frames.
///
/// Pixels whose HSV coordinates fall inside the configured range are
/// blacked out; everything else passes through unchanged.
#[derive(Parser)]
#[command(name = "linedetect")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// JSON file with the full threshold set (overrides the individual
    /// flags).
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// Lower hue bound (0-180).
    #[arg(long, default_value = "0")]
    hue_low: u8,

    /// Upper hue bound (0-180).
    #[arg(long, default_value = "0")]
    hue_high: u8,

    /// Lower saturation bound (0-255).
    #[arg(long, default_value = "0")]
    saturation_low: u8,

    /// Upper saturation bound (0-255).
    #[arg(long, default_value = "0")]
    saturation_high: u8,

    /// Lower value bound (0-255).
    #[arg(long, default_value = "0")]
    value_low: u8,

    /// Upper value bound (0-255).
    #[arg(long, default_value = "0")]
    value_high: u8,

    /// Restrict filtering to the region of interest given by --roi.
    #[arg(long)]
    use_roi: bool,

    /// Region of interest as x,y,width,height.
    #[arg(long, value_delimiter = ',', num_args = 4)]
    roi: Option<Vec<u32>>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let update = load_update(&cli)?;
    if update.use_roi && cli.roi.is_none() {
        return Err("--use-roi requires --roi x,y,width,height".into());
    }

    let store = Arc::new(ConfigStore::default());
    let accepted = store.apply(update);
    log::info!(
        "applied thresholds: {}",
        serde_json::to_string(&ThresholdUpdate::from(accepted.as_ref()))?
    );

    let roi_rect = match &cli.roi {
        Some(v) => Rect::new(v[0], v[1], v[2], v[3]),
        None => Rect::new(0, 0, 0, 0),
    };

    let mut source = ImageFileSource::new();
    let info = source.open(&cli.input)?;

    let filter = HsvThresholdFilter::new(
        store.clone(),
        Box::new(FixedRoiProvider::new(roi_rect)),
    );
    let emitter = FrameEmitter::new(Box::new(ImageFileSink::new()));

    let mut use_case = FilterFramesUseCase::new(
        Box::new(source),
        Box::new(filter),
        emitter,
        Box::new(StreamingPipelineExecutor::new()),
        Some(Box::new(StdoutPipelineLogger::default())),
        None,
        None,
    );

    use_case.execute(&info, &cli.output)
}

fn load_update(cli: &Cli) -> Result<ThresholdUpdate, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.thresholds {
        let text = std::fs::read_to_string(path)?;
        Ok(ThresholdUpdate::from_json(&text)?)
    } else {
        Ok(ThresholdUpdate {
            hue_low: cli.hue_low,
            hue_high: cli.hue_high,
            saturation_low: cli.saturation_low,
            saturation_high: cli.saturation_high,
            value_low: cli.value_low,
            value_high: cli.value_high,
            use_roi: cli.use_roi,
        })
    }
}
