use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cartly_server::run().await
}
