//! Passphrase-based encryption boundary.
//!
//! The engine never implements a cipher. It consumes one through the
//! [`Cipher`] trait; [`AgeCipher`] satisfies it with age's scrypt passphrase
//! recipient and ASCII armor, so blobs on disk are text-safe.
//!
//! Decryption failures collapse into [`VaultError::Decrypt`]. Whether the
//! passphrase was wrong or the blob corrupted is not reported.

use std::io::{Read, Write};
use std::iter;

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use age::secrecy::SecretString;

use crate::error::{Result, VaultError};

/// Password-based encryption capability.
pub trait Cipher: Send + Sync {
    /// Encrypt `plaintext` under `passphrase`, returning armored bytes.
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>>;

    /// Decrypt armored bytes under `passphrase`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Decrypt` for a wrong passphrase and for
    /// corrupted input alike.
    fn decrypt(&self, armored: &[u8], passphrase: &str) -> Result<Vec<u8>>;
}

/// age passphrase encryption with ASCII armor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeCipher;

impl Cipher for AgeCipher {
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>> {
        encrypt(plaintext, passphrase)
    }

    fn decrypt(&self, armored: &[u8], passphrase: &str) -> Result<Vec<u8>> {
        decrypt(armored, passphrase)
    }
}

/// Encrypt data using age passphrase-based encryption.
///
/// # Examples
///
/// ```
/// use pwstore_core::storage::encryption::encrypt;
///
/// let armored = encrypt(b"secret data", "my-secure-passphrase").unwrap();
/// assert!(armored.starts_with(b"-----BEGIN AGE ENCRYPTED FILE-----"));
/// ```
pub fn encrypt(data: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    if passphrase.is_empty() {
        return Err(VaultError::Encrypt("Passphrase cannot be empty".to_string()));
    }

    let encryptor =
        age::Encryptor::with_user_passphrase(SecretString::from(passphrase.to_string()));

    let mut encrypted = Vec::new();
    let armor = ArmoredWriter::wrap_output(&mut encrypted, Format::AsciiArmor)
        .map_err(|e| VaultError::Encrypt(format!("Failed to create armor: {}", e)))?;
    let mut writer = encryptor
        .wrap_output(armor)
        .map_err(|e| VaultError::Encrypt(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(data)
        .map_err(|e| VaultError::Encrypt(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .and_then(|armor| armor.finish())
        .map_err(|e| VaultError::Encrypt(format!("Encryption finish failed: {}", e)))?;

    Ok(encrypted)
}

/// Decrypt armored data using age passphrase-based encryption.
///
/// Binary (unarmored) age input is accepted as well.
///
/// # Errors
///
/// Returns `VaultError::Decrypt` if the passphrase is incorrect, the data is
/// corrupted, or decryption fails for any other reason.
pub fn decrypt(armored: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    let decryptor =
        age::Decryptor::new(ArmoredReader::new(armored)).map_err(|_| VaultError::Decrypt)?;

    let identity = age::scrypt::Identity::new(SecretString::from(passphrase.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|_| VaultError::Decrypt)?;

    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|_| VaultError::Decrypt)?;

    Ok(decrypted)
}
