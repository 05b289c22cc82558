use eyre::{Context, Result};
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    color_eyre::install().expect("Failed to install `color_eyre`");
    tracing_subscriber::fmt::Subscriber::builder()
        .without_time()
        .with_writer(std::io::stderr)
        .finish()
        .init();

    if let Err(e) = run() {
        tracing::error!("failed to emit payload: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let payload = objemit::payload();
    tracing::debug!("emitting {} bytes", payload.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    objemit::emit(payload, &mut out).context("writing payload to stdout")
}
