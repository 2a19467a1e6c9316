use crate::base;

/// Application filesystem, anchored at a working directory.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are deserialized from a fixed file.
pub trait Io: Default + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for base::Config {
    const FILENAME: &'static str = ".accidents.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Returns the path which `T` will be deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns
    /// `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let path = self.path::<T>();
        match std::fs::read_to_string(&path) {
            Ok(s) => s
                .parse()
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                .map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    log::debug!("'{}' not found, using defaults", path.display());
                    Ok(T::default())
                }
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    /// Loads the dataset at `path`, resolved against the working directory.
    /// The format is chosen by file extension.
    pub fn read_dataset(&self, path: &std::path::Path) -> Result<base::Aggregator, ReadError> {
        let path = self.dir.join(path);
        let format = base::dataset::Format::from_path(&path)?;
        let s = std::fs::read_to_string(&path)?;
        log::debug!("read {} bytes from '{}'", s.len(), path.display());
        Ok(base::dataset::parse(&s, format)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] base::dataset::UnsupportedFormat),
    #[error(transparent)]
    Dataset(#[from] base::dataset::ParseError),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
    // This box can be removed once specialization stabilizes.
}
