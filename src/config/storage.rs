//! Identity file storage
//!
//! A generated key is written as two files, the way `ssh-keygen` does:
//! - `<path>`: the armored private key, mode 0600
//! - `<path>.pub`: the OpenSSH public key line

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EdkeyError, Result};

const SSH_DIR: &str = ".ssh";
const DEFAULT_KEY_FILE: &str = "id_ed25519";
const PUB_SUFFIX: &str = ".pub";

/// Default identity location: `~/.ssh/id_ed25519`
pub fn default_identity_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(EdkeyError::NoHomeDir)?;
    Ok(home.join(SSH_DIR).join(DEFAULT_KEY_FILE))
}

/// Path of the public key file that accompanies `private_path`
pub fn public_key_path(private_path: &Path) -> PathBuf {
    let mut name = OsString::from(private_path.as_os_str());
    name.push(PUB_SUFFIX);
    PathBuf::from(name)
}

/// Ensure the parent directory of `path` exists
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(parent, fs::Permissions::from_mode(0o700))?;
            }
        }
    }
    Ok(())
}

/// Open `path` for writing with owner-only permissions on Unix
fn create_private_file(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options.open(path)?;

    // mode() only applies to newly created files
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(file)
}

/// Write an identity file pair
///
/// Fails with AlreadyExists if either file is present and `force` is not
/// set.
pub fn write_identity(
    private_path: &Path,
    private_pem: &str,
    public_line: &str,
    force: bool,
) -> Result<()> {
    let pub_path = public_key_path(private_path);

    if !force {
        for path in [private_path, pub_path.as_path()] {
            if path.exists() {
                return Err(EdkeyError::AlreadyExists(path.to_path_buf()));
            }
        }
    }

    ensure_parent_dir(private_path)?;

    // Write private key
    let mut file = create_private_file(private_path)?;
    file.write_all(private_pem.as_bytes())?;
    file.sync_all()?;

    // Write public key (plaintext)
    let mut pub_file = File::create(&pub_path)?;
    pub_file.write_all(public_line.as_bytes())?;
    pub_file.write_all(b"\n")?;

    debug!(
        private = %private_path.display(),
        public = %pub_path.display(),
        "wrote identity files"
    );

    Ok(())
}

/// Read an armored private key file
pub fn read_identity(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
