#[tokio::main]
async fn main() {
    if let Err(err) = trackfit_analyzer::cli::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
