//! Host wiring: plugin registration and the stdio transport.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

use winbridge_config::{Config, ConfigValidator};
use winbridge_core::{ChannelRegistry, Envelope, Messenger};
use winbridge_protocols::channel::MethodCall;
use winbridge_protocols::plugin::Plugin;
use winbridge_window_manager::WindowManagerPlugin;

/// Validate the config, register the window manager plugin and build the
/// messenger that routes calls to it.
pub(crate) fn build_messenger(config: &Config) -> Result<Messenger, Box<dyn std::error::Error>> {
    let validation = ConfigValidator::validate(config);
    for warning in &validation.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    if !validation.is_valid() {
        for e in &validation.errors {
            error!(path = %e.path, "{}", e.message);
        }
        return Err(format!(
            "invalid configuration ({} error(s))",
            validation.errors.len()
        )
        .into());
    }

    let registry = Arc::new(ChannelRegistry::new());
    let plugin = WindowManagerPlugin::from_config(config);
    plugin.register(registry.as_ref())?;
    info!(
        plugin = %plugin.manifest().id,
        version = %plugin.manifest().version,
        channels = ?registry.list_ids(),
        "Plugin loaded"
    );

    Ok(Messenger::new(registry, config.channel.name.clone()))
}

/// Answer JSON-line envelopes from stdin until EOF or Ctrl-C.
pub(crate) async fn serve(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let messenger = build_messenger(config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!(channel = %messenger.default_channel(), "Serving method calls on stdio");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed, shutting down");
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let reply = messenger.dispatch_line(line);
                let mut out = serde_json::to_vec(&reply)?;
                out.push(b'\n');
                stdout.write_all(&out).await?;
                stdout.flush().await?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C, shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Dispatch one call and print its reply.
pub(crate) fn call_once(
    config: &Config,
    method: &str,
    arguments: Option<&str>,
    channel: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let messenger = build_messenger(config)?;

    let arguments = match arguments {
        Some(raw) => serde_json::from_str(raw)?,
        None => serde_json::Value::Null,
    };
    let mut envelope = Envelope::new(MethodCall::new(method).with_arguments(arguments));
    envelope.channel = channel;

    let reply = messenger.dispatch(envelope);
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
