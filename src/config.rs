use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server:  String,
    pub streams: Duration,
    pub status:  Duration,
    pub timeout: Duration,
}

impl Config {
    pub fn new(server: &str) -> Self {
        Self {
            server:  server.to_owned(),
            streams: Duration::from_secs(30),
            status:  Duration::from_secs(10),
            timeout: Duration::from_secs(10),
        }
    }
}
