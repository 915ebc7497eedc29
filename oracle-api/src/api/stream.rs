use serde::{Serialize, Deserialize};
use crate::{Batch, Client, Error, Urls};

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub rowid:              u64,
    pub start_time:         u64,
    pub end_time:           u64,
    pub protocol:           String,
    #[serde(default)]
    pub src_ip:             String,
    #[serde(default)]
    pub src_port:           u16,
    #[serde(default)]
    pub dst_ip:             String,
    #[serde(default)]
    pub dst_port:           u16,
    #[serde(default)]
    pub data_length:        u64,
    #[serde(default)]
    pub data_length_string: String,
}

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StreamDetail {
    #[serde(flatten)]
    pub stream:  Stream,
    #[serde(rename = "data_hex", with = "crate::serde::hex")]
    pub payload: Vec<u8>,
}

impl Client {
    pub async fn streams_since(&self, cursor: u64) -> Result<Batch<Stream>, Error> {
        let url = Urls::since(&self.urls.streams, cursor);
        self.get(url).await
    }

    pub async fn stream_detail(&self, rowid: u64) -> Result<StreamDetail, Error> {
        let url = Urls::detail(&self.urls.streams, rowid)?;
        self.get(url).await
    }

    pub async fn search_streams(&self, query: &str) -> Result<Batch<Stream>, Error> {
        let url = Urls::search(&self.urls.streams, query)?;
        self.get(url).await
    }
}
