use serde::{Serialize, Deserialize};
use crate::{Client, Error};

#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub online: bool,
}

impl Client {
    pub async fn sniffer_status(&self) -> Result<Status, Error> {
        let url = self.urls.sniffer.clone();
        self.get(url).await
    }
}
