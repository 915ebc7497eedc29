use std::env;
use std::str::FromStr;
use std::time::Duration;
use anyhow::Result;
use clap::{ArgMatches, value_t};
use crate::Config;

pub fn opt<T: FromStr>(arg: Option<&str>) -> Result<Option<T>> {
    Ok(arg.map(|s| T::from_str(s).map_err(|_| {
        let msg  = format!("invalid argument value '{}'", s);
        let kind = clap::ErrorKind::InvalidValue;
        clap::Error::with_description(&msg, kind)
    })).transpose()?)
}

pub fn config(args: &ArgMatches) -> Result<Config> {
    let server = match args.value_of("server") {
        Some(server) => server.to_owned(),
        None         => env::var("ORACLE_SERVER").map_err(|_| {
            let msg  = "missing --server or ORACLE_SERVER";
            let kind = clap::ErrorKind::MissingRequiredArgument;
            clap::Error::with_description(msg, kind)
        })?,
    };

    let mut config = Config::new(&server);
    config.streams = secs(value_t!(args, "interval", u64)?)?;
    config.status  = secs(value_t!(args, "status",   u64)?)?;
    config.timeout = secs(value_t!(args, "timeout",  u64)?)?;

    Ok(config)
}

fn secs(n: u64) -> Result<Duration> {
    if n == 0 {
        let msg  = "interval must be at least one second";
        let kind = clap::ErrorKind::InvalidValue;
        return Err(clap::Error::with_description(msg, kind).into());
    }
    Ok(Duration::from_secs(n))
}
