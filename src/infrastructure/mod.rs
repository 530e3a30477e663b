pub mod navigator;
pub mod storage;
pub mod transport;

pub use navigator::{LogNavigator, Navigator};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use transport::{
    decode_body, DownloadRequest, DownloadResponse, Headers, HttpMethod, RawResponse,
    ReqwestTransport, Transport, TransportRequest, UploadRequest,
};
