// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deckrepo=info")),
        )
        .init();

    deckrepo::app::run()
}
