use serde::{Serialize, Deserialize};
use crate::{Batch, Client, Error, Urls};

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    pub rowid:              u64,
    pub start_time:         u64,
    #[serde(default)]
    pub end_time:           Option<u64>,
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
pub struct PacketDetail {
    #[serde(flatten)]
    pub packet:  Packet,
    #[serde(rename = "data_hex", with = "crate::serde::hex")]
    pub payload: Vec<u8>,
}

impl Client {
    pub async fn packets_since(&self, cursor: u64) -> Result<Batch<Packet>, Error> {
        let url = Urls::since(&self.urls.packets, cursor);
        self.get(url).await
    }

    pub async fn packet_detail(&self, rowid: u64) -> Result<PacketDetail, Error> {
        let url = Urls::detail(&self.urls.packets, rowid)?;
        self.get(url).await
    }

    pub async fn search_packets(&self, query: &str) -> Result<Batch<Packet>, Error> {
        let url = Urls::search(&self.urls.packets, query)?;
        self.get(url).await
    }
}
