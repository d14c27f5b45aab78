use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "wxnow=info";

/// Where log lines go. The interactive screen owns the terminal, so it logs
/// to a file.
#[derive(Debug)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("wxnow").join("wxnow.log"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}

pub fn init(target: LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
                .try_init()
        }
    };

    result.map_err(io::Error::other)
}
