mod cli;
mod runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = cli::parse_cli();
    let code = runner::run_from_cli(cli).await?;
    std::process::exit(code);
}
