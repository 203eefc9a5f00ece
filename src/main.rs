use std::sync::Arc;

use checkalive::cancel::install_signal_handlers;
use checkalive::dispatch::Runner;
use checkalive::input::Opts;
use checkalive::logger::init_logger;
use checkalive::{CheckConfig, ReqwestTransport};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let opts = Opts::parse_from_env();
    init_logger(opts.verbose);

    let cancel = CancellationToken::new();
    install_signal_handlers(cancel.clone());

    let config = CheckConfig::default();
    let transport = match ReqwestTransport::new(&config) {
        Ok(transport) => Arc::new(transport),
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let runner = Runner::new(transport, config, cancel);
    let code = runner.run(&opts).await;
    std::process::exit(code);
}
