//! Block alignment for the private key record
//!
//! OpenSSH pads the private section to the cipher block size even when the
//! cipher is "none"; `ssh-keygen` uses 8 for unencrypted keys. The pad is
//! the sequence 1, 2, 3, ... so a parser can tell it consumed exactly the
//! fields it expected.

/// Alignment unit for unencrypted private key blocks
pub const BLOCK_SIZE: usize = 8;

/// Number of pad bytes needed to align `unpadded_len` to [`BLOCK_SIZE`]
pub fn pad_len(unpadded_len: usize) -> usize {
    (BLOCK_SIZE - unpadded_len % BLOCK_SIZE) % BLOCK_SIZE
}

/// The pad itself: `1, 2, ..., len`
pub fn pad_bytes(len: usize) -> Vec<u8> {
    debug_assert!(len < BLOCK_SIZE);
    (1..=len as u8).collect()
}

/// Padding for a record whose encoding is `unpadded_len` bytes long
pub fn padding_for(unpadded_len: usize) -> Vec<u8> {
    pad_bytes(pad_len(unpadded_len))
}

/// Check that `pad` is a valid sequential pad
pub fn is_valid_pad(pad: &[u8]) -> bool {
    pad.len() < BLOCK_SIZE && pad.iter().enumerate().all(|(i, &b)| b as usize == i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_len_aligned_is_zero() {
        assert_eq!(pad_len(0), 0);
        assert_eq!(pad_len(8), 0);
        assert_eq!(pad_len(136), 0);
    }

    #[test]
    fn test_pad_len_every_residue() {
        for residue in 0..BLOCK_SIZE {
            let len = 128 + residue;
            let pad = pad_len(len);
            assert!(pad < BLOCK_SIZE);
            assert_eq!((len + pad) % BLOCK_SIZE, 0, "residue {}", residue);
        }
    }

    #[test]
    fn test_pad_bytes_sequence() {
        assert!(pad_bytes(0).is_empty());
        assert_eq!(pad_bytes(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(pad_bytes(7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_padding_for_smoketest_record() {
        // check1 + check2 + keytype + pub + priv + empty comment = 131 bytes
        assert_eq!(padding_for(131), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_is_valid_pad() {
        assert!(is_valid_pad(&[]));
        assert!(is_valid_pad(&[1, 2, 3]));
        assert!(!is_valid_pad(&[0]));
        assert!(!is_valid_pad(&[1, 3]));
        assert!(!is_valid_pad(&[1, 2, 3, 4, 5, 6, 7, 8]));
    }
}
