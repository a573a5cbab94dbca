use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dockerapi::start().await
}
