use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use anyhow::Result;
use clap::{App, load_yaml};
use env_logger::Builder;
use jemallocator::Jemalloc;
use log::{debug, info, warn};
use log::LevelFilter::*;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag::register;
use tokio::runtime;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::timeout;
use oracle_api::{Client, Packet, Stream};
use oracle_dash::{Config, Dashboard, Outcome};
use oracle_dash::args::{self, opt};
use oracle_dash::record::{Payload, Row};
use oracle_dash::status::Monitor;
use oracle_dash::sync::Event;
use oracle_dash::view::DetailState;

#[global_allocator]
static ALLOC: Jemalloc = Jemalloc;

struct Options {
    search: Option<String>,
    focus:  Option<u64>,
    json:   bool,
}

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let (module, level) = match args.occurrences_of("verbose") {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    let config  = args::config(&args)?;
    let options = Options {
        search: args.value_of("search").map(String::from),
        focus:  opt(args.value_of("focus"))?,
        json:   args.is_present("json"),
    };

    info!("initializing oracle-dash {}", ver);

    let shutdown = Arc::new(AtomicBool::new(false));
    register(SIGTERM, shutdown.clone())?;
    register(SIGINT,  shutdown.clone())?;

    let rt = runtime::Builder::new_current_thread().enable_all().build()?;
    rt.block_on(run(config, options, shutdown))
}

async fn run(config: Config, options: Options, shutdown: Arc<AtomicBool>) -> Result<()> {
    let client  = Arc::new(Client::new(&config.server, config.timeout)?);
    let monitor = Monitor::start(client.clone(), config.status);

    let packets: Dashboard<Packet> = Dashboard::new(client.clone());
    match packets.poll_once().await {
        Ok(_)  => info!("loaded {} packets, protocols {:?}", packets.dataset().len(), packets.protocols().to_vec()),
        Err(e) => warn!("{}", e),
    }

    let streams: Dashboard<Stream> = Dashboard::new(client);
    let mut events = streams.subscribe();
    let poller     = streams.start(config.streams);

    startup(&streams, &options).await;

    let mut online = monitor.online();

    while !shutdown.load(Ordering::Acquire) {
        if online != monitor.online() {
            online = monitor.online();
            info!("status: {}", if online { "online" } else { "offline" });
        }

        let event = match timeout(Duration::from_millis(250), events.recv()).await {
            Ok(Ok(event))                 => event,
            Ok(Err(RecvError::Lagged(n))) => {
                warn!("skipped {} events", n);
                continue;
            }
            Ok(Err(RecvError::Closed))    => break,
            Err(_)                        => continue,
        };

        match event {
            Event::Fetching                  => debug!("fetching streams since {}", streams.cursor().value()),
            Event::Failed(_)                 => (),
            Event::Updated { merge, cursor } => {
                let records = streams.dataset();
                for stream in &records[records.len().saturating_sub(merge.added)..] {
                    info!("{}", Row(stream));
                }
                debug!("{} streams, cursor {}", records.len(), cursor.value());

                if options.json {
                    println!("{}", serde_json::to_string(&streams.snapshot())?);
                }
            }
        }
    }

    poller.stop();
    monitor.stop();

    info!("shutting down");

    Ok(())
}

async fn startup(streams: &Dashboard<Stream>, options: &Options) {
    if let Some(query) = &options.search {
        match streams.submit_search(query).await {
            Ok(Outcome::Applied) => {
                if let Some(result) = streams.search_result() {
                    info!("{} streams match '{}'", result.records.len(), query);
                    for stream in &result.records {
                        info!("{}", Row(stream));
                    }
                }
            }
            Ok(_)  => (),
            Err(e) => warn!("{}", e),
        }
    }

    if let Some(id) = options.focus {
        match streams.focus(id).await {
            Ok(DetailState::Loaded(_, detail)) => {
                let payload = detail.payload();
                let preview = String::from_utf8_lossy(&payload[..payload.len().min(256)]);
                info!("stream #{}: {} bytes", id, payload.len());
                info!("{}", preview);
            }
            Ok(_)  => (),
            Err(e) => warn!("{}", e),
        }
    }
}
