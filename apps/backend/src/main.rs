#[tokio::main]
async fn main() -> anyhow::Result<()> {
    palavras_backend::run().await
}
