pub use batch::Batch;
pub use packet::{Packet, PacketDetail};
pub use status::Status;
pub use stream::{Stream, StreamDetail};

mod batch;
mod packet;
mod status;
mod stream;
