//! Per-controller event loop. One driver owns one virtual device node
//! exclusively, composes an INPUT report every cadence interval, and
//! services host events and capture-side updates in between.
use std::fs::File;
use std::io;
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::Receiver;
use uhid_virt::{OutputEvent, StreamError, UHIDDevice};

use crate::status::SharedGamepadStatus;

use super::{ProtocolEngine, ProtocolSession, SessionCommand};

pub struct SessionDriver {
    engine: ProtocolSession,
    status: SharedGamepadStatus,
    commands: Receiver<SessionCommand>,
    cadence: Duration,
}

impl SessionDriver {
    pub fn new(
        engine: ProtocolSession,
        status: SharedGamepadStatus,
        commands: Receiver<SessionCommand>,
        cadence: Duration,
    ) -> Self {
        Self {
            engine,
            status,
            commands,
            cadence,
        }
    }

    /// Create the virtual device and run the session to completion. Blocks
    /// the calling thread; run it under `task::spawn_blocking`. A failed
    /// device-create is fatal and surfaced to the caller.
    pub fn run(mut self) -> io::Result<()> {
        let params = self.engine.create_params();
        let name = params.name.clone();
        let mut device = UHIDDevice::create(params)?;
        log::info!("Created virtual device {name}");

        let result = self.serve(&mut device);
        let _ = device.destroy();
        log::info!("Destroyed virtual device {name}");
        result
    }

    fn serve(&mut self, device: &mut UHIDDevice<File>) -> io::Result<()> {
        loop {
            if !self.drain_commands() {
                return Ok(());
            }
            self.service_transport(device)?;

            let report = {
                let status = self.status.lock().unwrap_or_else(|e| e.into_inner());
                self.engine.compose_input_report(&status)
            };
            match report {
                Ok(data) => {
                    if let Err(e) = device.write(&data) {
                        log::warn!("Failed to write input report: {e:?}");
                    }
                }
                Err(e) => log::warn!("Failed to compose input report: {e}"),
            }

            thread::sleep(self.cadence);
        }
    }

    /// Apply all pending capture-side updates under a single lock hold so
    /// the next composition sees whole gestures. Returns false when the
    /// session should shut down.
    fn drain_commands(&mut self) -> bool {
        let mut updates = Vec::new();
        let keep_running = loop {
            match self.commands.try_recv() {
                Ok(SessionCommand::Update(update)) => updates.push(update),
                Ok(SessionCommand::Stop) => {
                    log::info!("Session stop requested");
                    break false;
                }
                Err(TryRecvError::Empty) => break true,
                Err(TryRecvError::Disconnected) => {
                    log::info!("Status channel closed, stopping session");
                    break false;
                }
            }
        };
        if !updates.is_empty() {
            let mut status = self.status.lock().unwrap_or_else(|e| e.into_inner());
            for update in updates {
                status.apply(update);
            }
        }
        keep_running
    }

    /// Read and dispatch every pending kernel event. The device node is
    /// non-blocking, so an empty queue surfaces as `WouldBlock`.
    fn service_transport(&mut self, device: &mut UHIDDevice<File>) -> io::Result<()> {
        loop {
            let event = match device.read() {
                Ok(event) => event,
                Err(StreamError::Io(e)) if e.kind() == io::ErrorKind::WouldBlock => return Ok(()),
                Err(StreamError::Io(e))
                    if matches!(
                        e.kind(),
                        io::ErrorKind::UnexpectedEof | io::ErrorKind::BrokenPipe
                    ) =>
                {
                    log::error!("Transport closed: {e:?}");
                    return Err(e);
                }
                Err(StreamError::Io(e)) => {
                    log::warn!("Error reading from virtual device: {e:?}");
                    return Ok(());
                }
                Err(StreamError::UnknownEventType(t)) => {
                    log::debug!("Unknown event type: {t:?}");
                    return Ok(());
                }
            };
            self.dispatch(device, event);
        }
    }

    fn dispatch(&mut self, device: &mut UHIDDevice<File>, event: OutputEvent) {
        match event {
            OutputEvent::Start { dev_flags } => {
                let dev_flags: Vec<u64> = dev_flags.iter().map(|f| *f as u64).collect();
                log::debug!("Start event received: {dev_flags:?}");
            }
            OutputEvent::Stop => {
                log::debug!("Stop event received");
            }
            OutputEvent::Open => {
                log::debug!("Open event received");
            }
            OutputEvent::Close => {
                log::debug!("Close event received");
            }
            OutputEvent::Output { data } => {
                let mut status = self.status.lock().unwrap_or_else(|e| e.into_inner());
                if let Err(e) = self.engine.handle_output_report(&data, &mut status) {
                    log::warn!("Dropping host output report: {e}");
                }
            }
            OutputEvent::GetReport {
                id,
                report_number,
                report_type: _,
            } => {
                log::trace!("GetReport for report {report_number:#04x}");
                if let Some(reply) = self.engine.handle_feature_request(report_number) {
                    if let Err(e) = device.write_get_report_reply(id, 0, reply) {
                        log::warn!("Failed to write get report reply: {e:?}");
                    }
                }
            }
            OutputEvent::SetReport {
                id,
                report_number,
                report_type: _,
                data: _,
            } => {
                // Acknowledged so the host does not stall, but not modeled.
                log::trace!("SetReport for report {report_number:#04x}");
                if let Err(e) = device.write_set_report_reply(id, 0) {
                    log::warn!("Failed to write set report reply: {e:?}");
                }
            }
        }
    }
}
