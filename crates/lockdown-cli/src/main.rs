//! Lockdown console binary.
//!
//! # Usage
//!
//! ```bash
//! # Run a script against a platform that grants the exclusive lock
//! lockdown --script session.txt
//!
//! # Same script on a platform that denies it, with verbose platform logging
//! lockdown --capability denied --log-level debug < session.txt
//! ```

use std::io::{Read, Write};

use clap::{Parser, ValueEnum};
use lockdown_app::{DEFAULT_CHANNEL_CAPACITY, Runtime, channel};
use lockdown_cli::{describe, platform::LoggingAdapter, script};
use lockdown_core::{KioskConfig, KioskController, WindowProtection};
use lockdown_harness::{Capability, SimAdapter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// How the simulated platform answers exclusive lock requests.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CapabilityArg {
    Granted,
    Denied,
    Unsupported,
}

impl From<CapabilityArg> for Capability {
    fn from(arg: CapabilityArg) -> Self {
        match arg {
            CapabilityArg::Granted => Self::Granted,
            CapabilityArg::Denied => Self::Denied,
            CapabilityArg::Unsupported => Self::Unsupported,
        }
    }
}

/// Lockdown kiosk controller console
#[derive(Parser, Debug)]
#[command(name = "lockdown")]
#[command(about = "Drive the Lockdown kiosk controller with a host event script")]
#[command(version)]
struct Args {
    /// Script to run (reads stdin when omitted)
    #[arg(short, long)]
    script: Option<String>,

    /// Simulated exclusive lock capability
    #[arg(short, long, value_enum, default_value = "granted")]
    capability: CapabilityArg,

    /// Do not block screenshots of the app window
    #[arg(long)]
    no_secure_surface: bool,

    /// Do not keep the screen on
    #[arg(long)]
    no_keep_screen_on: bool,

    /// Do not request foreground when the exclusive lock is unavailable
    #[arg(long)]
    no_foreground_fallback: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn kiosk_config(&self) -> KioskConfig {
        KioskConfig {
            window_protection: WindowProtection {
                secure_surface: !self.no_secure_surface,
                keep_screen_on: !self.no_keep_screen_on,
            },
            foreground_fallback: !self.no_foreground_fallback,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        },
    };
    let events = script::parse(&source)?;

    tracing::info!(
        capability = ?args.capability,
        events = events.len(),
        "Lockdown console starting"
    );

    let adapter = LoggingAdapter::new(SimAdapter::new(args.capability.into()));
    let controller = KioskController::with_config(adapter, args.kiosk_config());
    let (handle, driver) = channel(DEFAULT_CHANNEL_CAPACITY);
    let runtime = tokio::spawn(Runtime::new(driver, controller).run());

    for event in events {
        let response = handle.send(event.clone()).await?;
        writeln!(std::io::stdout(), "{}", describe(&event, &response))?;
    }

    drop(handle);
    let controller = runtime.await??;

    let outcome = controller.lock_outcome().map_or_else(|| "none".to_string(), |r| r.to_string());
    writeln!(
        std::io::stdout(),
        "final state: {} (last lock outcome: {outcome})",
        controller.state()
    )?;

    Ok(())
}
