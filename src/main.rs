//! SQLGate - A Minimal SQL-over-TCP Gateway
//!
//! This is the main entry point for the SQLGate server.
//! It sets up the TCP listener, ensures the backing schema exists, and
//! spawns a handler task per incoming connection.

use sqlgate::connection::{handle_connection, ConnectionStats};
use sqlgate::gateway::StoreGateway;
use sqlgate::storage::Database;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Server configuration
struct Config {
    /// Host to bind to
    host: String,
    /// Port to listen on
    port: u16,
    /// Path to the SQLite database file
    db_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: sqlgate::DEFAULT_HOST.to_string(),
            port: sqlgate::DEFAULT_PORT,
            db_path: sqlgate::DEFAULT_DB_PATH.to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from command-line arguments
    fn from_args() -> Self {
        let mut config = Config::default();
        let args: Vec<String> = std::env::args().collect();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--host" | "-h" => {
                    if i + 1 < args.len() {
                        config.host = args[i + 1].clone();
                        i += 2;
                    } else {
                        eprintln!("Error: --host requires a value");
                        std::process::exit(1);
                    }
                }
                "--port" | "-p" => {
                    if i + 1 < args.len() {
                        config.port = args[i + 1].parse().unwrap_or_else(|_| {
                            eprintln!("Error: invalid port number");
                            std::process::exit(1);
                        });
                        i += 2;
                    } else {
                        eprintln!("Error: --port requires a value");
                        std::process::exit(1);
                    }
                }
                "--db" | "-d" => {
                    if i + 1 < args.len() {
                        config.db_path = args[i + 1].clone();
                        i += 2;
                    } else {
                        eprintln!("Error: --db requires a value");
                        std::process::exit(1);
                    }
                }
                "--help" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("SQLGate version {}", sqlgate::VERSION);
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Unknown argument: {}", args[i]);
                    print_help();
                    std::process::exit(1);
                }
            }
        }

        config
    }

    /// Returns the bind address as a string
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn print_help() {
    println!(
        r#"
SQLGate - A Minimal SQL-over-TCP Gateway

USAGE:
    sqlgate [OPTIONS]

OPTIONS:
    -h, --host <HOST>    Host to bind to (default: 127.0.0.1)
    -p, --port <PORT>    Port to listen on (default: 7778)
    -d, --db <PATH>      SQLite database file (default: sqlgate.db)
    -v, --version        Print version information
        --help           Print this help message

EXAMPLES:
    sqlgate                        # Start on 127.0.0.1:7778
    sqlgate --port 7800            # Start on port 7800
    sqlgate --db /var/lib/gate.db  # Use a specific database file

PROTOCOL:
    Send one UTF-8 SQL statement terminated by a null byte; the reply
    is one line of text. Statements starting with SELECT return rows,
    everything else returns "done" on success:

    $ printf 'SELECT COUNT(*) FROM users\0' | nc 127.0.0.1 7778
    0
"#
    );
}

fn print_banner(config: &Config) {
    println!(
        r#"
SQLGate v{} - SQL-over-TCP Gateway
──────────────────────────────────────────
Database: {}
Server started on {}
Ready to accept connections.

Use Ctrl+C to shutdown.
"#,
        sqlgate::VERSION,
        config.db_path,
        config.bind_address()
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let config = Config::from_args();

    // Set up logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    // Print the banner
    print_banner(&config);

    // Create the database handle and make sure the schema exists
    // before the first accept
    let database = Database::new(config.db_path.clone());
    database.ensure_schema()?;
    info!(db = %config.db_path, "schema ensured");

    // One gateway, cloned per connection
    let gateway = StoreGateway::new(database);

    // Create connection statistics
    let stats = Arc::new(ConnectionStats::new());

    // Bind the TCP listener
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("listening on {}", config.bind_address());

    // Set up shutdown on interrupt
    let shutdown = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("shutdown signal received, stopping server...");
    };

    // Main accept loop; dropping the listener on shutdown releases the
    // port, in-flight handlers are not awaited
    tokio::select! {
        _ = accept_loop(listener, gateway, stats) => {}
        _ = shutdown => {}
    }

    info!("server shutdown complete");
    Ok(())
}

/// Main loop that accepts incoming connections
async fn accept_loop(listener: TcpListener, gateway: StoreGateway, stats: Arc<ConnectionStats>) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let gateway = gateway.clone();
                let stats = Arc::clone(&stats);

                // Spawn a task to handle this connection
                tokio::spawn(async move {
                    handle_connection(stream, addr, gateway, stats).await;
                });
            }
            Err(e) => {
                error!("failed to accept connection: {}", e);
            }
        }
    }
}
