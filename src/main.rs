use clap::Parser;
use ecs_scale::cli::Cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    if let Err(e) = ecs_scale::run(cli).await {
        let code = ecs_scale::report(&e, &mut std::io::stdout(), &mut std::io::stderr());
        process::exit(code);
    }
}
