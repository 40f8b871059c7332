//! Raw text sources

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// Trait for backends that hold the complete text of an ARFF file
pub trait TextSource {
    /// Get the raw bytes of the file
    fn as_bytes(&self) -> &[u8];

    /// Get the size of the data in bytes
    fn size(&self) -> usize {
        self.as_bytes().len()
    }

    /// Decode the bytes as text
    ///
    /// Borrows when the bytes are valid UTF-8. Otherwise every byte is
    /// decoded as Latin-1, so distinct byte sequences stay distinct.
    fn text(&self) -> Cow<'_, str> {
        let bytes = self.as_bytes();
        match core::str::from_utf8(bytes) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl TextSource for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl TextSource for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl TextSource for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl TextSource for String {
    fn as_bytes(&self) -> &[u8] {
        String::as_bytes(self)
    }
}
