use std::io::{self, BufRead};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clock_face::FileSurface;
use clock_lib::color::{parse_hex, sRGB, to_string};
use clock_lib::ColorPair;
use clock_widget::command::HELP;
use clock_widget::logging::{init_logging, LoggingConfig};
use clock_widget::sources::low_contrast;
use clock_widget::{
    ClockTick, ClockWidget, Command, FixedTheme, LocalClock, Settings, ThemeSource,
    ThreadScheduler,
};

#[derive(Debug, Parser)]
#[command(
    name = "clock-widget",
    about = "Draws an analog clock to an SVG file and redraws it every second."
)]
struct Arguments {
    #[arg(long, default_value = "250", help = "Clock size in pixels.")]
    size: NonZeroU32,
    #[arg(long, value_parser = parse_hex, help = "Hand and tick color, e.g. #202020.")]
    foreground: Option<sRGB>,
    #[arg(long, value_parser = parse_hex, help = "Face color, e.g. #FAFAFA.")]
    background: Option<sRGB>,
    #[arg(long, default_value = "clock.svg", help = "File the clock is drawn to.")]
    output: PathBuf,
    #[arg(long, help = "Start the clock immediately.")]
    start: bool,
    #[arg(long, help = "Log filter, in env_logger syntax. Overrides RUST_LOG.")]
    log: Option<String>,
}

fn warn_low_contrast(colors: &ColorPair) {
    if let Some(lc) = low_contrast(colors) {
        log::warn!(
            "{} on {} has low contrast (Lc {:.1})",
            to_string(&colors.foreground),
            to_string(&colors.background),
            lc
        );
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let mut colors = ColorPair::default();
    if let Some(c) = args.foreground {
        colors.foreground = c;
    }
    if let Some(c) = args.background {
        colors.background = c;
    }
    warn_low_contrast(&colors);

    let theme = Arc::new(FixedTheme::new(colors));
    let settings = Arc::new(Settings::new(args.size));
    let tick = ClockTick::new(
        Box::new(LocalClock),
        theme.clone(),
        settings.clone(),
        Box::new(FileSurface::new(&args.output)),
    );
    let mut widget = ClockWidget::new(ThreadScheduler, tick);

    if args.start {
        widget.toggle();
    }
    println!("{HELP}");

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("error: {err:#}");
                continue;
            }
        };

        match command {
            Command::Toggle => {
                let running = widget.toggle();
                println!("{}", if running { "running" } else { "stopped" });
            }
            Command::Size(size) => {
                settings.set_size(size);
                log::info!("size set to {size}px");
            }
            Command::Foreground(c) => warn_low_contrast(&theme.update(|p| p.foreground = c)),
            Command::Background(c) => warn_low_contrast(&theme.update(|p| p.background = c)),
            Command::Status => {
                let colors = theme.colors();
                println!(
                    "{} size={}px fg={} bg={} output={}",
                    if widget.is_running() { "running" } else { "stopped" },
                    settings.size(),
                    to_string(&colors.foreground),
                    to_string(&colors.background),
                    args.output.display()
                );
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    widget.shutdown();
    Ok(())
}

fn main() {
    let args = Arguments::parse();

    init_logging(LoggingConfig {
        filter: args.log.clone(),
    });

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        err.chain()
            .skip(1)
            .for_each(|cause| eprintln!("because: {cause}"));
        process::exit(1);
    }
}
