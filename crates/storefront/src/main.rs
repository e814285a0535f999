use std::io::{self, BufRead, Write};

use anyhow::Context;

use stockroom_storefront::app::HELP;
use stockroom_storefront::watch::spawn_watcher;
use stockroom_storefront::{Reply, Storefront, StorefrontConfig};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = StorefrontConfig::from_env().context("failed to load storefront configuration")?;
    let storefront = Storefront::new(config).context("failed to seed inventory")?;
    let watcher = spawn_watcher(storefront.store().subscribe());

    tracing::info!(store = %storefront.store().id(), "storefront ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP}")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }

        match storefront.handle_line(&line) {
            Reply::Print(text) if text.is_empty() => {}
            Reply::Print(text) => writeln!(stdout, "{text}")?,
            Reply::Quit => break,
        }
    }

    // Dropping the store closes the change stream and lets the watcher finish.
    drop(storefront);
    let observed = watcher
        .join()
        .map_err(|_| anyhow::anyhow!("stock watcher panicked"))?;
    tracing::info!(observed, "storefront closed");

    Ok(())
}
