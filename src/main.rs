use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    ebank_assistant::run().await
}
