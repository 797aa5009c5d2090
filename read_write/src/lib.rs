use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::prelude::*;
use std::io::{Error, ErrorKind, Result};
use std::mem::size_of;

const WORD_SIZE: usize = size_of::<u32>();

/// object used to extend functionality of File
/// used for reading and writing little endian word vectors to files
pub trait VecIO {
    fn write_words_to_file(&mut self, data: &[u32]) -> Result<()>;
    fn read_words_from_file(&mut self) -> Result<Vec<u32>>;
}

impl VecIO for File {
    /// Writes a slice of words to file as little endian bytes
    fn write_words_to_file(&mut self, data: &[u32]) -> Result<()> {
        write_words(self, data)
    }
    /// Reads the remainder of the file as little endian words
    fn read_words_from_file(&mut self) -> Result<Vec<u32>> {
        read_words(self)
    }
}

/// Reads every remaining byte from `reader` and unpacks it as little endian words
///
/// Fails with `UnexpectedEof` when the byte count is not a multiple of 4
pub fn read_words<R: Read>(reader: &mut R) -> Result<Vec<u32>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    words_from_bytes(&bytes)
}

/// Unpacks a little endian byte buffer into words
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % WORD_SIZE != 0 {
        return Err(Error::new(
            ErrorKind::UnexpectedEof,
            format!(
                "read {} bytes which is not a multiple of word size ({})",
                bytes.len(),
                WORD_SIZE
            ),
        ));
    }
    let mut words = vec![0u32; bytes.len() / WORD_SIZE];
    LittleEndian::read_u32_into(bytes, &mut words);
    Ok(words)
}

/// Writes words to `writer` as little endian bytes
pub fn write_words<W: Write>(writer: &mut W, data: &[u32]) -> Result<()> {
    for word in data {
        writer.write_u32::<LittleEndian>(*word)?;
    }
    writer.flush()
}
