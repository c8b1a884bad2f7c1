use skycast::config::ApiConfig;
use skycast::net::{ApiClient, NetExecutor};
use skycast::runtime::Runtime;
use skycast::state::AppState;
use skycast::terminal::Terminal;
use std::io;
use std::sync::Arc;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    let config = ApiConfig::from_env();
    let client = Arc::new(ApiClient::new(&config));
    let executor = NetExecutor::new(client);

    let terminal = Terminal::new()?;
    let mut runtime = Runtime::new(AppState::new(), terminal, executor);
    runtime.run()
}
