use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{error, info};
use tokio::sync::oneshot;

use rpi_monitor::cli::Cli;
use rpi_monitor::config::MonitorConfig;
use rpi_monitor::device::{bus_path, open_panel};
use rpi_monitor::loaders::load_image;
use rpi_monitor::{FrameComposer, Image, RefreshLoop, SystemStatus};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = MonitorConfig::resolve(&cli).context("invalid configuration")?;

    info!("starting rpi-monitor service using {}", bus_path(&config.bus).display());

    let source = match &config.image {
        Some(path) => load_image(path).context("failed to load source image")?,
        None => Image::new(config.width, config.height),
    };

    let panel = open_panel(&config.bus, config.address, config.bus_speed_hz, config.panel_options())
        .context("failed to open display")?;

    let mut refresh = RefreshLoop::new(panel, SystemStatus::new(), source, config.interface.clone())?
        .with_composer(FrameComposer::new().with_threshold(config.threshold))
        .with_interval(config.interval());
    let stop = refresh.stop_handle();

    // Ticks do blocking bus I/O, so the loop gets its own thread
    let (done_tx, done_rx) = oneshot::channel();
    std::thread::Builder::new()
        .name("refresh".into())
        .spawn(move || {
            let _ = done_tx.send(refresh.run());
        })
        .context("failed to spawn refresh thread")?;

    let outcome = tokio::select! {
        signal = shutdown_signal() => {
            signal?;
            stop.stop();
            Ok(())
        }
        finished = done_rx => match finished {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                error!("ssd1306: {}", err);
                Err(anyhow!(err))
            }
            Err(_) => Err(anyhow!("refresh thread exited without reporting")),
        },
    };

    info!("stopping the rpi-monitor service");
    outcome
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res.context("failed to listen for SIGINT")?;
            info!("received SIGINT");
        }
        _ = term.recv() => info!("received SIGTERM"),
    }
    Ok(())
}
