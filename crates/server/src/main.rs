#[tokio::main]
async fn main() -> anyhow::Result<()> {
    snaptext_server::start().await
}
