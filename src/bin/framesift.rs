use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use framesift::{
    ControlHandle, ExtractionJob, FrameSampler, ImageFormat, Outcome, ProgressSink,
};

const CLI_AFTER_HELP: &str = "Examples:\n  framesift --input_dir videos --output_dir frames --fps 10 --img_format png\n  framesift            (prompts for every value interactively)";

#[derive(Debug, Parser)]
#[command(
    name = "framesift",
    version,
    about = "Sample frames from every video in a directory into image files",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Directory containing the source videos.
    #[arg(long = "input_dir")]
    input_dir: Option<PathBuf>,

    /// Destination directory for extracted frames (defaults to the input directory).
    #[arg(long = "output_dir")]
    output_dir: Option<PathBuf>,

    /// Target sampling rate in frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Output image format (jpg, jpeg, png, tif).
    #[arg(long = "img_format")]
    img_format: Option<String>,
}

impl Cli {
    /// All four flags present means the run is non-interactive.
    fn is_non_interactive(&self) -> bool {
        self.input_dir.is_some()
            && self.output_dir.is_some()
            && self.fps.is_some()
            && self.img_format.is_some()
    }
}

/// Map a numbered menu selection to a format. Invalid input falls back to png.
fn format_from_choice(choice: &str) -> ImageFormat {
    match choice.trim() {
        "1" => ImageFormat::Jpg,
        "2" => ImageFormat::Jpeg,
        "3" => ImageFormat::Png,
        "4" => ImageFormat::Tif,
        _ => ImageFormat::Png,
    }
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed while waiting for input",
        ));
    }
    Ok(line.trim().to_string())
}

fn prompt_fps() -> io::Result<u32> {
    loop {
        let answer = prompt_line("Enter the desired frames per second (FPS): ")?;
        match answer.parse::<u32>() {
            Ok(fps) if fps > 0 => return Ok(fps),
            _ => eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                "FPS must be a positive integer".yellow()
            ),
        }
    }
}

fn prompt_format() -> io::Result<ImageFormat> {
    println!("Select image format:");
    for (position, format) in ImageFormat::ALL.iter().enumerate() {
        println!("  {}) {}", position + 1, format);
    }
    let choice = prompt_line("Choice [3]: ")?;
    Ok(format_from_choice(&choice))
}

/// Resolve the job from flags, prompting for anything missing.
fn build_job(cli: Cli) -> Result<ExtractionJob, Box<dyn Error>> {
    if cli.is_non_interactive() {
        let format_name = cli.img_format.unwrap_or_default();
        let format = ImageFormat::parse(&format_name)
            .ok_or(format!("unsupported --img_format: {format_name}"))?;
        let mut job = ExtractionJob::new(cli.input_dir.unwrap_or_default())
            .with_rate(cli.fps.unwrap_or(1))
            .with_format(format);
        if let Some(output_dir) = cli.output_dir {
            job = job.with_output_dir(output_dir);
        }
        return Ok(job);
    }

    let input_dir = match cli.input_dir {
        Some(dir) => dir,
        None => PathBuf::from(prompt_line("Enter the input directory containing videos: ")?),
    };

    let output_dir = match cli.output_dir {
        Some(dir) => Some(dir),
        None => {
            let answer =
                prompt_line("Enter the output directory for extracted frames (blank = input): ")?;
            if answer.is_empty() {
                None
            } else {
                Some(PathBuf::from(answer))
            }
        }
    };

    let fps = match cli.fps {
        Some(fps) if fps > 0 => fps,
        _ => prompt_fps()?,
    };

    let format = match cli.img_format.as_deref().and_then(ImageFormat::parse) {
        Some(format) => format,
        None => prompt_format()?,
    };

    let mut job = ExtractionJob::new(input_dir).with_rate(fps).with_format(format);
    if let Some(output_dir) = output_dir {
        job = job.with_output_dir(output_dir);
    }
    Ok(job)
}

struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    fn new() -> Result<Self, Box<dyn Error>> {
        let bar = ProgressBar::new(0);
        let style =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} frames")?;
        bar.set_style(style.progress_chars("##-"));
        Ok(Self { bar })
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for TerminalProgress {
    fn set_total(&self, total_frames: u64) {
        self.bar.set_length(total_frames);
    }

    fn frame_processed(&self, frames_done: u64) {
        self.bar.set_position(frames_done);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let job = build_job(cli)?;

    // Keep FFmpeg's own stderr chatter from garbling the progress bar.
    ffmpeg_next::util::log::set_level(ffmpeg_next::util::log::Level::Error);

    let progress = TerminalProgress::new()?;
    let outcome = FrameSampler::new(job).run(&progress, &ControlHandle::new());
    progress.finish();

    match outcome? {
        Outcome::Completed => {
            println!(
                "{} {}",
                "success:".green().bold(),
                "Frames extracted successfully!".green()
            );
        }
        Outcome::Stopped => {
            println!(
                "{} {}",
                "stopped:".yellow().bold(),
                "Extraction stopped by user.".yellow()
            );
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
