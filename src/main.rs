#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mnevi_backend::server::run().await
}
