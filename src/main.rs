use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use railway::config::{get_port, Fs, DEFAULT_CONFIG_PATH, DEFAULT_PORT};
use railway::users::{describe, UserDirectory};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the port from a JSON config file, or the fallback if it can't be read.
    Port {
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        fallback: u16,
    },

    /// Look up a user. Leave out the id to take the missing-id path.
    User {
        id: Option<u32>,

        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version are not failures.
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let Args { command, verbose } = args;

    // env_logger writes to stderr, stdout only gets the result line.
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder().filter_level(log_level).try_init()?;

    match command {
        Command::Port { config, fallback } => {
            let port = get_port(&Fs, &config, fallback);
            println!("{port}");
        }
        Command::User { id, delay_ms } => {
            let users = UserDirectory::new(Duration::from_millis(delay_ms));

            info!("lookup settles after {delay_ms}ms");
            let found = users.find_user_by_id(id).await;

            println!("{}", describe(found));
        }
    }

    Ok(())
}
