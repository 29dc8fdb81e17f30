// Adapters layer: concrete implementations of the domain ports.

pub mod html;
pub mod http;
pub mod output;

pub use html::Html2MdRenderer;
pub use http::HttpSource;
pub use output::{FileSink, StdoutSink};
