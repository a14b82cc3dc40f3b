use crate::either::{from_nullable, try_catch, Either};
use crate::error::ConfigError;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Where config bytes come from. Tests swap the filesystem for a map.
pub trait FileSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

pub struct Fs;

impl FileSource for Fs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

pub fn read_file<S>(files: &S, path: &Path) -> Either<ConfigError, Vec<u8>>
where
    S: FileSource + ?Sized,
{
    try_catch(|| files.read(path)).map_left(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_json(contents: Vec<u8>) -> Either<ConfigError, Value> {
    try_catch(|| serde_json::from_slice::<Value>(&contents)).map_left(ConfigError::from)
}

pub fn extract_port(config: Value) -> Either<ConfigError, u16> {
    from_nullable(config.get("port").cloned())
        .map_left(|_| ConfigError::MissingPort)
        .chain(|port| {
            from_nullable(port.as_u64().and_then(|p| u16::try_from(p).ok()))
                .map_left(|_| ConfigError::InvalidPort(port.to_string()))
        })
}

/// Reads `path`, parses it and pulls out `port`, keeping whichever stage
/// failed first on the `Left`.
pub fn resolve_port<S>(files: &S, path: &Path) -> Either<ConfigError, u16>
where
    S: FileSource + ?Sized,
{
    read_file(files, path).chain(parse_json).chain(extract_port)
}

/// Like [`resolve_port`], but any failure becomes `fallback`.
pub fn get_port<S>(files: &S, path: &Path, fallback: u16) -> u16
where
    S: FileSource + ?Sized,
{
    resolve_port(files, path).fold(
        |error| {
            debug!("using port {} because {} failed: {}", fallback, path.display(), error);
            fallback
        },
        |port| {
            debug!("read port {} from {}", port, path.display());
            port
        },
    )
}
