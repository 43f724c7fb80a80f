//! The `serve` command: run the proxy until Ctrl-C.

use std::error::Error;
use std::net::SocketAddr;

use tracing::{info, warn};

use crate::core::config::data::Config;
use crate::proxy::server::serve;
use crate::proxy::settings::SettingsSource;
use crate::proxy::Forwarder;

pub fn listen_addr(config: &Config, listen: Option<&str>) -> Result<SocketAddr, Box<dyn Error>> {
    let raw = listen.unwrap_or(config.listen());
    raw.parse::<SocketAddr>()
        .map_err(|err| format!("Invalid listen address '{raw}': {err}").into())
}

pub async fn run_serve(config: &Config, listen: Option<&str>) -> Result<(), Box<dyn Error>> {
    let addr = listen_addr(config, listen)?;
    let settings = SettingsSource::environment();

    // Requests still get a configuration error; this only surfaces it early.
    if let Err(err) = settings.resolve() {
        warn!(error = %err, "upstream settings incomplete");
        if let Some(details) = err.to_body().details {
            eprintln!("⚠️  {details}");
        }
    }

    let forwarder = Forwarder::new(config.payload_defaults(), settings);
    serve(
        addr,
        forwarder,
        async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        },
        |bound| println!("Listening on http://{bound}"),
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_configured_address() {
        let config = Config {
            listen: Some("127.0.0.1:4000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            listen_addr(&config, None).expect("config addr").port(),
            4000
        );
        assert_eq!(
            listen_addr(&config, Some("0.0.0.0:5000"))
                .expect("flag addr")
                .port(),
            5000
        );
        assert!(listen_addr(&config, Some("nowhere")).is_err());
    }
}
