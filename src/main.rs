//! Job listings kept in a flat JSON file, with uploads served from disk and
//! job applications forwarded through an SMTP relay.

mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;

use crate::prelude::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    cmd::run().await?;
    Ok(())
}
