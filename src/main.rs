use clap::Parser;
use game_hub::cloud::LoggingCloud;
use game_hub::hub::Hub;
use game_hub::registry::{ClientEntry, ClientHandle, ClientKind, Player};
use log::info;
use rand::Rng;
use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Main-method of the application.
/// Parses command-line arguments, then runs the hub with a simulated
/// roster so the telemetry cycle can be observed end to end. The network
/// transport and the real cloud service plug in here in a deployment;
/// this binary stands in for both with score churn and a logging cloud.
#[tokio::main]
async fn main() {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Seconds between cloud update cycles
        #[clap(short, long, default_value = "10")]
        cloud_interval: u64,
        /// Number of simulated agents to spawn
        #[clap(short, long, default_value = "4")]
        bots: usize,
    }

    env_logger::init();
    let args = Args::parse();

    let mut hub = Hub::new(Arc::new(LoggingCloud));

    for i in 0..args.bots {
        hub.clients_mut().insert(ClientEntry::new(
            ClientKind::Bot,
            Player::new(format!("bot-{}", i)),
        ));
    }

    let status = hub.status_reader();

    let mut cloud_timer = interval(Duration::from_secs(args.cloud_interval));
    cloud_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut churn_timer = interval(Duration::from_secs(1));

    // Handles of the simulated socket clients currently "connected"
    let mut roster: Vec<ClientHandle> = Vec::new();

    // Skip the first cloud tick since it fires immediately
    cloud_timer.tick().await;

    loop {
        tokio::select! {
            _ = cloud_timer.tick() => {
                hub.cloud_cycle().await;
                info!("status payload: {}", String::from_utf8_lossy(&status.read()));
            }
            _ = churn_timer.tick() => {
                churn_roster(&mut hub, &mut roster);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down gracefully...");
                break;
            }
        }
    }
}

/// Simulates players joining, leaving, and scoring
///
/// Stands in for the transport layer's connection events and the gameplay
/// subsystem's score updates, which are external to this crate.
fn churn_roster(hub: &mut Hub, roster: &mut Vec<ClientHandle>) {
    const NAMES: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

    let mut rng = rand::thread_rng();

    if roster.len() < NAMES.len() && rng.gen_bool(0.3) {
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        let handle = hub
            .clients_mut()
            .insert(ClientEntry::new(ClientKind::Socket, Player::new(name)));
        roster.push(handle);
    }

    if !roster.is_empty() && rng.gen_bool(0.1) {
        let handle = roster.swap_remove(rng.gen_range(0..roster.len()));
        hub.clients_mut().remove(handle);
    }

    for handle in roster.iter() {
        if let Some(entry) = hub.clients_mut().get_mut(*handle) {
            // Scores can dip below zero during play
            entry.player.score += rng.gen_range(-2..=5);
        }
    }
}
