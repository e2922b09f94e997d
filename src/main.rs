use clap::Parser;
use page_audit::{Audit, AuditConfig, server};

mod args;
use args::{Args, Command, OutputFormat};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(args).await {
        ::log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> page_audit::Result<()> {
    let mut config = match &args.config {
        Some(path) => AuditConfig::from_file(path)?,
        None => AuditConfig::default(),
    }
    .with_env_overrides();

    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    match args.command {
        Command::Serve { port, bind } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            config.validate()?;
            server::serve(&config).await
        }
        Command::Check { url, format } => {
            let report = Audit::new(url).with_config(config).run().await?;
            match format {
                OutputFormat::Text => print!("{}", report.to_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            Ok(())
        }
    }
}
