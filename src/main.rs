pub(crate) mod intervaltimer;
pub(crate) mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use funkellicht::color::BLACK;
use funkellicht::{AnimationConfig, EffectKind, PixelBuffer};

use crate::intervaltimer::IntervalTimer;
use crate::terminal::TerminalStrip;

/// Plays one lighting effect on a strip drawn in the terminal
#[derive(Parser)]
struct Cli {
    /// Config file (TOML, JSON or YAML) with the animation settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// The effect to play
    #[arg(short, long, value_enum)]
    effect: Option<EffectKind>,

    /// Number of pixels on the strip
    #[arg(short = 'n', long)]
    pixels: Option<usize>,

    /// Seconds between frames
    #[arg(short, long)]
    period: Option<f32>,

    /// Base color: a name, #RRGGBB, 0xRRGGBB or r,g,b
    #[arg(long)]
    color: Option<String>,

    /// Color of the unlit blink phase
    #[arg(long)]
    off_color: Option<String>,

    /// Comet tail length in pixels
    #[arg(short, long)]
    tail_length: Option<usize>,

    /// How often the animation gets polled, in Hz
    #[arg(long)]
    poll_rate: Option<f32>,
}

impl Cli {
    fn into_config(self) -> funkellicht::Result<AnimationConfig> {
        let mut config = match &self.config {
            Some(path) => AnimationConfig::load(path)?,
            None => AnimationConfig::default(),
        };

        if let Some(effect) = self.effect {
            config.effect = effect;
        }
        if let Some(pixels) = self.pixels {
            config.pixel_count = pixels;
        }
        if let Some(period) = self.period {
            config.period = period;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.off_color.is_some() {
            config.off_color = self.off_color;
        }
        if let Some(tail_length) = self.tail_length {
            config.tail_length = tail_length;
        }
        if let Some(poll_rate) = self.poll_rate {
            config.poll_rate = poll_rate;
        }

        Ok(config)
    }
}

fn run(config: AnimationConfig) -> funkellicht::Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let handler_running = Arc::clone(&running);
    if let Err(err) = ctrlc::set_handler(move || handler_running.store(false, Ordering::SeqCst)) {
        log::warn!("Cannot install Ctrl-C handler: {err}");
    }

    let mut strip = TerminalStrip::stdout(config.pixel_count);
    let mut animation = config.build(&mut strip)?;
    log::info!(
        "Playing {} on {} pixels every {:?}",
        animation.effect().name(),
        config.pixel_count,
        animation.period()
    );

    let mut timer = IntervalTimer::new(config.poll_rate, true);
    log::debug!("Polling every {:?}", timer.interval());
    while running.load(Ordering::SeqCst) {
        animation.animate();
        timer.sleep_until_next_tick();
    }

    drop(animation);
    strip.fill(BLACK);
    strip.present();
    strip.finish();
    log::info!("Stopped");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    let result = args.into_config().and_then(|config| {
        log::info!("Using {:?}", config);
        run(config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("funkellicht: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "funkellicht",
            "--effect",
            "sparkle",
            "-n",
            "12",
            "--color",
            "#00ff00",
        ]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.effect, EffectKind::Sparkle);
        assert_eq!(config.pixel_count, 12);
        assert_eq!(config.color, "#00ff00");
        assert_eq!(config.tail_length, AnimationConfig::default().tail_length);
    }

    #[test]
    fn flags_override_the_config_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/funkellicht.toml");
        let cli = Cli::parse_from(["funkellicht", "--config", path, "--tail-length", "4"]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.effect, EffectKind::Comet);
        assert_eq!(config.tail_length, 4);
        assert_eq!(config.pixel_count, 30);
    }
}
