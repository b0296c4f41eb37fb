#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quote_charades::run().await
}
