//! Ed25519 key pair input
//!
//! Key material is held the way OpenSSH stores it:
//! - public key: 32 bytes
//! - private key: 64 bytes, the 32-byte seed followed by the public key
//!
//! Generation and seed expansion are delegated to ed25519-dalek.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use ed25519_dalek::SigningKey;
use rand::{CryptoRng, RngCore};
use ssh_key::public::{Ed25519PublicKey, KeyData};
use ssh_key::{HashAlg, PrivateKey};
use zeroize::Zeroize;

use crate::error::{EdkeyError, Result};
use crate::openssh::wire::{encode_record, Field};

/// SSH algorithm name for Ed25519 keys
pub const KEY_ALGORITHM: &str = "ssh-ed25519";

/// Public key length in bytes
pub const PUBLIC_KEY_LEN: usize = 32;

/// Expanded private key length in bytes (seed || public)
pub const PRIVATE_KEY_LEN: usize = 64;

/// Seed length in bytes
pub const SEED_LEN: usize = 32;

/// An Ed25519 key pair in OpenSSH's expanded representation
pub struct Ed25519KeyPair {
    public: [u8; PUBLIC_KEY_LEN],
    private: [u8; PRIVATE_KEY_LEN],
}

impl Ed25519KeyPair {
    /// Wrap raw key buffers as-is
    ///
    /// No check is made that `private` actually expands to `public`; the
    /// caller owns key validity.
    pub fn new(public: [u8; PUBLIC_KEY_LEN], private: [u8; PRIVATE_KEY_LEN]) -> Self {
        Self { public, private }
    }

    /// Build from the 64-byte expanded private key, taking the public half
    /// from its tail
    pub fn from_expanded(private: [u8; PRIVATE_KEY_LEN]) -> Self {
        let mut public = [0u8; PUBLIC_KEY_LEN];
        public.copy_from_slice(&private[SEED_LEN..]);
        Self { public, private }
    }

    /// Derive the key pair from a 32-byte seed
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        Self::from_signing_key(&SigningKey::from_bytes(seed))
    }

    /// Parse a hex-encoded 32-byte seed
    pub fn from_seed_hex(seed_hex: &str) -> Result<Self> {
        let mut bytes = hex::decode(seed_hex.trim())
            .map_err(|e| EdkeyError::InvalidSeed(e.to_string()))?;

        if bytes.len() != SEED_LEN {
            let len = bytes.len();
            bytes.zeroize();
            return Err(EdkeyError::InvalidSeed(format!(
                "ожидалось {} байт, получено {}",
                SEED_LEN, len
            )));
        }

        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&bytes);
        bytes.zeroize();

        let keypair = Self::from_seed(&seed);
        seed.zeroize();
        Ok(keypair)
    }

    /// Generate a new random key pair
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from_signing_key(&SigningKey::generate(rng))
    }

    pub fn from_signing_key(signing_key: &SigningKey) -> Self {
        Self {
            public: signing_key.verifying_key().to_bytes(),
            private: signing_key.to_keypair_bytes(),
        }
    }

    /// SSH algorithm name of this key
    pub fn algorithm(&self) -> &'static str {
        KEY_ALGORITHM
    }

    pub fn public_key_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public
    }

    pub fn private_key_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.private
    }

    /// Public key blob: string("ssh-ed25519") || string(pub)
    pub fn public_key_blob(&self) -> Vec<u8> {
        encode_record(&[
            Field::Bytes(KEY_ALGORITHM.as_bytes()),
            Field::Bytes(&self.public),
        ])
    }

    /// Get the public key in OpenSSH format
    /// Format: "ssh-ed25519 <base64-encoded-blob> <comment>"
    pub fn public_key_openssh(&self, comment: &str) -> String {
        let encoded = STANDARD.encode(self.public_key_blob());

        if comment.is_empty() {
            format!("{} {}", KEY_ALGORITHM, encoded)
        } else {
            format!("{} {} {}", KEY_ALGORITHM, encoded, comment)
        }
    }

    /// SHA256 fingerprint as printed by `ssh-keygen -l`
    pub fn fingerprint(&self) -> String {
        KeyData::Ed25519(Ed25519PublicKey(self.public))
            .fingerprint(HashAlg::Sha256)
            .to_string()
    }
}

impl TryFrom<&PrivateKey> for Ed25519KeyPair {
    type Error = EdkeyError;

    fn try_from(key: &PrivateKey) -> Result<Self> {
        if key.is_encrypted() {
            return Err(EdkeyError::Unsupported("зашифрованные закрытые ключи".into()));
        }

        let keypair = key
            .key_data()
            .ed25519()
            .ok_or_else(|| EdkeyError::UnsupportedKeyType(key.algorithm().to_string()))?;

        let mut seed = keypair.private.to_bytes();
        let mut private = [0u8; PRIVATE_KEY_LEN];
        private[..SEED_LEN].copy_from_slice(&seed);
        private[SEED_LEN..].copy_from_slice(&keypair.public.0);
        seed.zeroize();

        Ok(Self::new(keypair.public.0, private))
    }
}

impl Zeroize for Ed25519KeyPair {
    fn zeroize(&mut self) {
        self.private.zeroize();
        self.public.zeroize();
    }
}

impl Drop for Ed25519KeyPair {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// Keep private key bytes out of logs and panics
impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public", &hex::encode(self.public))
            .field("private", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;

    #[test]
    fn test_generate_keypair() {
        let keypair = Ed25519KeyPair::generate(&mut OsRng);

        assert_eq!(keypair.public_key_bytes().len(), PUBLIC_KEY_LEN);
        assert_eq!(keypair.private_key_bytes().len(), PRIVATE_KEY_LEN);
        assert_eq!(
            &keypair.private_key_bytes()[SEED_LEN..],
            keypair.public_key_bytes()
        );
    }

    #[test]
    fn test_generate_is_deterministic_for_seeded_rng() {
        let a = Ed25519KeyPair::generate(&mut StdRng::seed_from_u64(1));
        let b = Ed25519KeyPair::generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_from_seed_matches_generated() {
        let original = Ed25519KeyPair::generate(&mut OsRng);
        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&original.private_key_bytes()[..SEED_LEN]);

        let restored = Ed25519KeyPair::from_seed(&seed);

        assert_eq!(restored.public_key_bytes(), original.public_key_bytes());
        assert_eq!(restored.private_key_bytes(), original.private_key_bytes());
    }

    #[test]
    fn test_from_expanded_takes_public_tail() {
        let mut private = [0u8; PRIVATE_KEY_LEN];
        private[SEED_LEN..].fill(0xAB);

        let keypair = Ed25519KeyPair::from_expanded(private);

        assert_eq!(keypair.public_key_bytes(), &[0xAB; PUBLIC_KEY_LEN]);
    }

    #[test]
    fn test_from_seed_hex() {
        let seed_hex = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
        let keypair = Ed25519KeyPair::from_seed_hex(seed_hex).unwrap();

        // RFC 8032 test vector 1
        assert_eq!(
            hex::encode(keypair.public_key_bytes()),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );
    }

    #[test]
    fn test_from_seed_hex_wrong_length() {
        let result = Ed25519KeyPair::from_seed_hex("abcd");
        assert!(matches!(result, Err(EdkeyError::InvalidSeed(_))));
    }

    #[test]
    fn test_from_seed_hex_not_hex() {
        let result = Ed25519KeyPair::from_seed_hex("zz");
        assert!(matches!(result, Err(EdkeyError::InvalidSeed(_))));
    }

    #[test]
    fn test_public_key_blob_layout() {
        let keypair = Ed25519KeyPair::new([7u8; 32], [0u8; 64]);
        let blob = keypair.public_key_blob();

        assert_eq!(blob.len(), 4 + 11 + 4 + 32);
        assert_eq!(&blob[..4], &[0, 0, 0, 11]);
        assert_eq!(&blob[4..15], b"ssh-ed25519");
        assert_eq!(&blob[15..19], &[0, 0, 0, 32]);
        assert_eq!(&blob[19..], &[7u8; 32]);
    }

    #[test]
    fn test_public_key_openssh_format() {
        let keypair = Ed25519KeyPair::generate(&mut OsRng);
        let openssh = keypair.public_key_openssh("test-comment");

        assert!(openssh.starts_with("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAI"));
        assert!(openssh.ends_with(" test-comment"));
    }

    #[test]
    fn test_public_key_openssh_without_comment() {
        let keypair = Ed25519KeyPair::generate(&mut OsRng);
        let openssh = keypair.public_key_openssh("");

        assert_eq!(openssh.split(' ').count(), 2);
    }

    #[test]
    fn test_fingerprint_of_zero_key() {
        let keypair = Ed25519KeyPair::from_expanded([0u8; PRIVATE_KEY_LEN]);
        assert_eq!(
            keypair.fingerprint(),
            "SHA256:kmYcvdi2GkPeWxB6XLjrZB8JHsy2Hm8luHMFp9GMvqk"
        );
    }

    #[test]
    fn test_try_from_ssh_key() {
        let key = PrivateKey::random(&mut OsRng, ssh_key::Algorithm::Ed25519).unwrap();
        let keypair = Ed25519KeyPair::try_from(&key).unwrap();

        let expected = key.public_key().key_data().ed25519().unwrap().0;
        assert_eq!(keypair.public_key_bytes(), &expected);
        assert_eq!(
            keypair.fingerprint(),
            key.fingerprint(HashAlg::Sha256).to_string()
        );
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let mut private = [0x5Au8; PRIVATE_KEY_LEN];
        private[SEED_LEN..].fill(0x11);
        let keypair = Ed25519KeyPair::from_expanded(private);
        let debug = format!("{:?}", keypair);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&hex::encode([0x5Au8; SEED_LEN])));
    }
}
