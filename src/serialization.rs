//! Fixed-width big-endian encoding and content hashing.
//!
//! Each integer is written as an 8-byte big-endian two's-complement word, so an
//! [`IntVector`] of $`n`$ integers encodes into exactly $`8n`$ bytes.
//! The words are laid out with `zerocopy`'s [`I64`] type, which lets decoding
//! reinterpret a byte buffer as a slice of words without copying.
//!
//! [`IntVector::hash()`] digests the encoding through a [`ContentHasher`];
//! [`Sha256Hasher`] is the default one.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use intvector::IntVector;
//!
//! let iv = IntVector::from(vec![1, -1]);
//! let bytes = iv.encode();
//! assert_eq!(bytes.len(), 16);
//! assert_eq!(bytes[7], 1);
//! assert_eq!(bytes[8], 0xff);
//!
//! let mut other = IntVector::new();
//! other.decode(&bytes, false)?;
//! assert_eq!(iv, other);
//! # Ok(())
//! # }
//! ```
use anybytes::Bytes;
use tracing::{debug, trace};
use zerocopy::byteorder::big_endian::I64;
use zerocopy::{FromBytes, IntoBytes};

use crate::error::{Error, Result};
use crate::int_vectors::IntVector;

/// Number of bytes of an encoded integer.
pub const WORD_LEN: usize = std::mem::size_of::<I64>();

/// Digest function turning encoded bytes into a lowercase hexadecimal string.
pub trait ContentHasher {
    /// Digests `bytes` and returns the digest in lowercase hex.
    fn hex_digest(&self, bytes: &[u8]) -> String;
}

/// SHA-256 implementation of [`ContentHasher`].
#[cfg(feature = "hash")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Hasher;

#[cfg(feature = "hash")]
impl ContentHasher for Sha256Hasher {
    fn hex_digest(&self, bytes: &[u8]) -> String {
        use sha2::{Digest, Sha256};

        hex::encode(Sha256::digest(bytes))
    }
}

impl IntVector {
    /// Encodes the integers as consecutive 8-byte big-endian words.
    ///
    /// # Examples
    ///
    /// ```
    /// use intvector::IntVector;
    ///
    /// let iv: IntVector = (0..10).collect();
    /// let bytes = iv.encode();
    /// assert_eq!(bytes.len(), 80);
    /// assert_eq!(bytes[8 * 3 + 7], 3);
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let words: Vec<I64> = self.iter().map(I64::new).collect();
        words.as_bytes().to_vec()
    }

    /// Encodes the integers into a frozen [`Bytes`] buffer.
    pub fn encode_bytes(&self) -> Bytes {
        Bytes::from_source(self.encode())
    }

    /// Decodes big-endian words from `bytes`.
    ///
    /// When `append` is `false` the vector is cleared first; otherwise the
    /// decoded integers are appended after the current ones.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEncoding`] if `bytes` is empty or its length is not a
    /// multiple of [`WORD_LEN`]. The vector is left untouched in that case.
    pub fn decode(&mut self, bytes: &[u8], append: bool) -> Result<()> {
        let words = words_from_bytes(bytes)?;
        if !append {
            self.clear();
        }
        self.insert_all(words.iter().map(|w| w.get()));
        trace!(decoded = words.len(), len = self.len(), append, "decoded int vector");
        Ok(())
    }

    /// Rebuilds a vector from a frozen [`Bytes`] buffer holding big-endian words.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEncoding`] under the same conditions as [`Self::decode()`],
    /// or [`Error::View`] if the buffer cannot be viewed as words.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from(vec![3, 1, 4]);
    /// let other = IntVector::from_bytes(iv.encode_bytes())?;
    /// assert_eq!(iv, other);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(bytes: Bytes) -> Result<Self> {
        check_encoded_len(bytes.len())?;
        let words = bytes.view::<[I64]>()?;
        Ok(words.iter().map(|w| w.get()).collect())
    }

    /// Returns the SHA-256 digest of [`Self::encode()`] in lowercase hex.
    ///
    /// # Examples
    ///
    /// ```
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::new();
    /// assert_eq!(
    ///     iv.hash(),
    ///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    /// );
    /// ```
    #[cfg(feature = "hash")]
    pub fn hash(&self) -> String {
        self.hash_with(&Sha256Hasher)
    }

    /// Digests [`Self::encode()`] with `hasher`.
    pub fn hash_with<H>(&self, hasher: &H) -> String
    where
        H: ContentHasher + ?Sized,
    {
        hasher.hex_digest(&self.encode())
    }
}

fn check_encoded_len(len: usize) -> Result<()> {
    if len == 0 {
        debug!("rejected empty encoding");
        return Err(Error::invalid_encoding("bytes must not be empty."));
    }
    if len % WORD_LEN != 0 {
        debug!(len, "rejected encoding with a partial word");
        return Err(Error::invalid_encoding(format!(
            "bytes.len() must be a multiple of {WORD_LEN}, but got {len}."
        )));
    }
    Ok(())
}

fn words_from_bytes(bytes: &[u8]) -> Result<&[I64]> {
    check_encoded_len(bytes.len())?;
    <[I64]>::ref_from_bytes(bytes)
        .map_err(|_| Error::invalid_encoding("bytes could not be read as big-endian words."))
}
