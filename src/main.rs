#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().skip(1).any(|a| a == "--write-config") {
        let path = textkit_lib::write_config()?;
        eprintln!("Wrote config: {}", path.display());
        return Ok(());
    }
    textkit_lib::run().await
}
