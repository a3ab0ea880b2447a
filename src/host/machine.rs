//! Executable architecture sniffing.
//!
//! The discovery step must reject 32-bit Python installs, so we read just
//! enough of the binary's header to learn its architecture: the PE machine
//! field on Windows images, the ELF class byte elsewhere. Anything that is
//! not a recognisable executable counts as a mismatch.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// PE machine value for x86-64 images.
const IMAGE_FILE_MACHINE_AMD64: u16 = 0x8664;

/// Whether the file at `path` is a 64-bit executable.
///
/// Unreadable, truncated or unrecognised files yield `false`; the caller
/// reports those as an architecture mismatch rather than a separate error.
pub(crate) fn is_64bit_executable(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut magic = [0u8; 4];
    if file.read_exact(&mut magic).is_err() {
        return false;
    }

    if magic[..2] == *b"MZ" {
        return pe_machine(&mut file).is_some_and(|machine| machine == IMAGE_FILE_MACHINE_AMD64);
    }
    if magic == *b"\x7fELF" {
        // ELF class byte: 1 = 32-bit, 2 = 64-bit.
        let mut class = [0u8; 1];
        return file.read_exact(&mut class).is_ok() && class[0] == 2;
    }
    false
}

/// Read the machine field from a PE image: `e_lfanew` at offset 0x3C points
/// at the `PE\0\0` signature, the machine field follows it.
fn pe_machine(file: &mut File) -> Option<u16> {
    let mut e_lfanew = [0u8; 4];
    file.seek(SeekFrom::Start(0x3C)).ok()?;
    file.read_exact(&mut e_lfanew).ok()?;
    let header_offset = u64::from(u32::from_le_bytes(e_lfanew));

    let mut header = [0u8; 6];
    file.seek(SeekFrom::Start(header_offset)).ok()?;
    file.read_exact(&mut header).ok()?;
    if header[..4] != *b"PE\0\0" {
        return None;
    }
    Some(u16::from_le_bytes([header[4], header[5]]))
}
