use std::time::Duration;
use log::trace;
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;
use crate::Error;

#[derive(Clone)]
pub struct Client {
    pub(crate) client: reqwest::Client,
    pub(crate) urls:   Urls,
}

impl Client {
    pub fn new(server: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("oracle-dash/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client: client,
            urls:   Urls::new(server)?,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        trace!("GET {}", url);
        let res = self.send(self.client.get(url)).await?;
        Ok(res.json().await?)
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await?;
        let status   = response.status();
        match status {
            _ if status.is_success() => Ok(response),
            _                        => Err(error(response).await),
        }
    }

    pub fn urls(&self) -> &Urls {
        &self.urls
    }
}

async fn error(response: Response) -> Error {
    let status = response.status();

    #[derive(Deserialize)]
    struct Wrapper {
        error: String,
    }

    match response.json::<Wrapper>().await {
        Ok(w)  => Error::App(w.error, status.as_u16()),
        Err(_) => Error::Status(status.as_u16()),
    }
}

#[derive(Clone, Debug)]
pub struct Urls {
    pub packets: Url,
    pub streams: Url,
    pub sniffer: Url,
}

impl Urls {
    pub fn new(server: &str) -> Result<Self, Error> {
        let mut base = Url::parse(server)?;

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            packets: base.join("api/packets/")?,
            streams: base.join("api/streams/")?,
            sniffer: base.join("api/sniffer/status")?,
        })
    }

    pub(crate) fn since(base: &Url, cursor: u64) -> Url {
        let mut url = collection(base);
        url.query_pairs_mut().append_pair("since", &cursor.to_string());
        url
    }

    pub(crate) fn detail(base: &Url, rowid: u64) -> Result<Url, Error> {
        Ok(base.join(&rowid.to_string())?)
    }

    pub(crate) fn search(base: &Url, query: &str) -> Result<Url, Error> {
        let mut url = base.join("search")?;
        url.query_pairs_mut().append_pair("content", query);
        Ok(url)
    }
}

fn collection(base: &Url) -> Url {
    let mut url = base.clone();
    let path    = base.path().trim_end_matches('/').to_owned();
    url.set_path(&path);
    url
}
