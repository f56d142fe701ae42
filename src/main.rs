use std::env;
use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tokio::task;

use crate::config::{ControllerModel, EmulatorConfig};
use crate::status::new_shared_status;
use crate::target::dualsense::DualSenseEngine;
use crate::target::dualshock4::DualShock4Engine;
use crate::target::session::SessionDriver;
use crate::target::{random_mac, ProtocolSession, SessionCommand};

mod config;
mod crc;
mod drivers;
mod status;
mod target;
mod timing;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<String>,
    /// Emulate a DualShock 4 instead of a DualSense
    #[arg(long)]
    dualshock4: bool,
    /// Present the DualSense Edge identity
    #[arg(long)]
    edge: bool,
    /// Claim a USB connection instead of Bluetooth
    #[arg(long)]
    usb: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let log_level = match env::var("LOG_LEVEL") {
        Ok(value) => value,
        Err(_) => "info".to_string(),
    };
    env::set_var("RUST_LOG", log_level);
    env_logger::init();
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    log::info!("Starting ghostpad v{}", VERSION);

    let args = Args::parse();
    let mut config = match args.config.as_deref() {
        Some(path) => EmulatorConfig::from_yaml_file(path)?,
        None => EmulatorConfig::default(),
    };
    if args.dualshock4 {
        config.model = ControllerModel::Dualshock4;
    }
    if args.edge {
        config.edge = true;
    }
    if args.usb {
        config.bluetooth = false;
    }

    let transport = config.transport();
    let fusion = config.fusion_params()?;
    let mac = match config.mac_bytes()? {
        Some(mac) => mac,
        None => random_mac(),
    };

    let engine = match config.model {
        ControllerModel::Dualshock4 => {
            ProtocolSession::DualShock4(DualShock4Engine::new(transport, mac, fusion))
        }
        ControllerModel::Dualsense => {
            ProtocolSession::DualSense(DualSenseEngine::new(transport, config.edge, mac, fusion))
        }
    };

    let status = new_shared_status();
    let (commands_tx, commands_rx) = mpsc::channel(64);
    let cadence = Duration::from_micros(config.poll_interval_us);
    let driver = SessionDriver::new(engine, status, commands_rx, cadence);

    // Without a capture collaborator attached the device still comes up
    // and emits neutral reports; updates arrive over the command channel.
    let session = task::spawn_blocking(move || driver.run());

    let shutdown_tx = commands_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Shutting down");
            let _ = shutdown_tx.send(SessionCommand::Stop).await;
        }
    });

    session.await??;
    log::info!("ghostpad stopped");

    Ok(())
}
