use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use crate::api::Client;
use crate::api::schema::AddonInfo;
use crate::network::{Transport, TransportError};
use crate::selector::select_file;
use crate::{Error, Result};

/// Create the folder if needed. Parent folders are not created.
/// 
/// Return `true` if the folder didn't exist before
fn ensure_folder(folder: &Path) -> Result<bool> {
    match std::fs::create_dir(folder) {
        Ok(()) => Ok(true),

        Err(err) if err.kind() == ErrorKind::AlreadyExists && folder.is_dir() => Ok(false),

        Err(err) => Err(Error::filesystem(folder, err))
    }
}

/// Server-declared file name must not point outside of the target folder
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();

    !name.contains(|c| c == '/' || c == '\\') &&
        matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

/// Download output which creates the target folder and a temp file
/// in it only when the response body starts arriving
struct PendingFile<'a> {
    folder: &'a Path,
    created_folder: bool,
    temp: Option<NamedTempFile>,

    /// Failure of opening the output, reported instead of the IO error
    error: Option<Error>
}

impl<'a> PendingFile<'a> {
    fn new(folder: &'a Path) -> Self {
        Self {
            folder,
            created_folder: false,
            temp: None,
            error: None
        }
    }

    fn open(&mut self) -> Result<&mut NamedTempFile> {
        let temp = match self.temp.take() {
            Some(temp) => temp,

            None => {
                self.created_folder = ensure_folder(self.folder)?;

                NamedTempFile::new_in(self.folder)
                    .map_err(|err| Error::filesystem(self.folder, err))?
            }
        };

        Ok(self.temp.insert(temp))
    }

    /// Get written temp file, creating it for an empty body
    fn finish(mut self) -> Result<NamedTempFile> {
        self.open()?;

        match self.temp {
            Some(temp) => Ok(temp),
            None => Err(Error::filesystem(self.folder, ErrorKind::NotFound.into()))
        }
    }

    /// Remove everything created so far and convert transport error
    fn fail(self, err: TransportError) -> Error {
        // Temp file is removed on drop
        drop(self.temp);

        if self.created_folder {
            let _ = std::fs::remove_dir(self.folder);
        }

        match (self.error, err) {
            (Some(err), _) => err,
            (None, TransportError::Io(err)) => Error::filesystem(self.folder, err),
            (None, err) => Error::Network(err)
        }
    }
}

impl Write for PendingFile<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.open() {
            Ok(temp) => temp.write(buf),

            Err(err) => {
                let io_err = std::io::Error::new(ErrorKind::Other, err.to_string());

                self.error = Some(err);

                Err(io_err)
            }
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.temp {
            Some(temp) => temp.flush(),
            None => Ok(())
        }
    }
}

impl<T: Transport> Client<T> {
    /// Download first addon file compatible with `version` into the `folder`.
    /// 
    /// When `folder` is `None` or empty, `ClientConfig::default_download_folder` is used.
    /// The folder is created once the server responds, already existing file
    /// with the same name is overwritten.
    /// 
    /// The body is written to a temporary file first, so a failed download
    /// never leaves partially written file or a freshly created empty folder behind.
    /// 
    /// Return path to the downloaded file
    #[tracing::instrument(level = "debug", skip(self, addon), fields(addon = %addon.name))]
    pub fn download_addon(&self, addon: &AddonInfo, version: &str, folder: Option<&Path>) -> Result<PathBuf> {
        let Some(file) = select_file(&addon.files, version) else {
            return Err(Error::VersionNotFound {
                addon: addon.name.clone(),
                version: version.to_string()
            });
        };

        tracing::debug!("Selected file {} for version {version}", file.file_name);

        let folder = match folder {
            Some(folder) if !folder.as_os_str().is_empty() => folder.to_path_buf(),
            _ => PathBuf::from(&self.config().default_download_folder)
        };

        let path = folder.join(&file.file_name);

        if !is_plain_file_name(&file.file_name) {
            return Err(Error::filesystem(path, std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("unsafe file name {:?}", file.file_name)
            )));
        }

        let mut output = PendingFile::new(&folder);

        let temp = match self.transport().download(&file.download_url, &mut output) {
            Ok(size) => {
                tracing::debug!("Downloaded {size} bytes");

                output.finish()?
            }

            Err(err) => return Err(output.fail(err))
        };

        temp.persist(&path)
            .map_err(|err| Error::filesystem(&path, err.error))?;

        tracing::debug!("Saved addon file to {path:?}");

        Ok(path)
    }
}
