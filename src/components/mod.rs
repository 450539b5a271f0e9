mod header;
mod log_viewer;

pub use header::Header;
pub use log_viewer::LogViewer;
