fn main() -> anyhow::Result<()> {
    bankacct_observability::init();

    let stdout = std::io::stdout();
    bankacct_demo::run(&mut stdout.lock())?;

    tracing::info!("demo finished");
    Ok(())
}
