use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// Contents of every file in a working directory, keyed by file name.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State(std::collections::BTreeMap<String, String>);

impl State {
    pub fn from_fs(fs: &base::Fs) -> Self {
        let mut files = std::collections::BTreeMap::new();
        for entry in std::fs::read_dir(fs.dir()).unwrap() {
            let path = entry.unwrap().path();
            if path.is_file() {
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                files.insert(name, std::fs::read_to_string(&path).unwrap());
            }
        }
        Self(files)
    }
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    files: Vec<(&'a str, &'a str)>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Adds a file with the given name and contents.
    pub fn with_file(mut self, name: &'a str, s: &'a str) -> Self {
        self.files.push((name, s));
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not a
    /// valid serialization. Other files are written unchecked so that malformed
    /// input can be exercised.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        for (name, s) in &self.files {
            std::fs::write(fs.dir().join(name), s).unwrap()
        }
    }
}
