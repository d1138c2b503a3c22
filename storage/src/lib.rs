/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the non-volatile storage accessor contract consumed by
    the PUF secret reconstruction path, and a RAM-backed implementation
    for tests and emulation.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

use puf_error::{PufError, PufResult};

/// Byte-addressable non-volatile storage accessor
///
/// Abstracts the persistent store holding the public helper data blob
/// (on-chip EEPROM or external serial flash). All calls are blocking and
/// synchronous; the PUF core performs a single `read` during boot and does
/// not retry on failure. The persisted layout carries no header, checksum
/// or version information.
pub trait NvStorage {
    /// Total capacity in bytes
    fn capacity(&self) -> usize;

    /// Read `buf.len()` bytes starting at `offset`
    fn read(&self, offset: usize, buf: &mut [u8]) -> PufResult<()>;

    /// Write `data` starting at `offset`
    ///
    /// The region must have been erased beforehand on devices that require
    /// it; this contract does not model erase-before-write enforcement.
    fn write(&mut self, offset: usize, data: &[u8]) -> PufResult<()>;

    /// Erase `len` bytes starting at `offset`, leaving them reading 0xFF
    fn erase(&mut self, offset: usize, len: usize) -> PufResult<()>;
}

/// RAM-backed `NvStorage` implementation
///
/// Backing for host tests and emulation; starts fully erased.
pub struct RamNvStorage<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Default for RamNvStorage<N> {
    fn default() -> Self {
        Self { data: [0xFF; N] }
    }
}

impl<const N: usize> RamNvStorage<N> {
    /// Create a storage device with the given initial contents
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    fn check_range(&self, offset: usize, len: usize) -> PufResult<()> {
        match offset.checked_add(len) {
            Some(end) if end <= N => Ok(()),
            _ => Err(PufError::STORAGE_OUT_OF_BOUNDS),
        }
    }
}

impl<const N: usize> NvStorage for RamNvStorage<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read(&self, offset: usize, buf: &mut [u8]) -> PufResult<()> {
        self.check_range(offset, buf.len())?;
        buf.copy_from_slice(&self.data[offset..offset + buf.len()]);
        Ok(())
    }

    fn write(&mut self, offset: usize, data: &[u8]) -> PufResult<()> {
        self.check_range(offset, data.len())?;
        self.data[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn erase(&mut self, offset: usize, len: usize) -> PufResult<()> {
        self.check_range(offset, len)?;
        self.data[offset..offset + len].fill(0xFF);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_erased() {
        let storage = RamNvStorage::<16>::default();
        let mut buf = [0u8; 16];
        storage.read(0, &mut buf).unwrap();
        assert_eq!(buf, [0xFF; 16]);
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut storage = RamNvStorage::<32>::default();
        storage.write(4, &[1, 2, 3, 4]).unwrap();

        let mut buf = [0u8; 4];
        storage.read(4, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);

        // Neighbors untouched
        let mut edge = [0u8; 1];
        storage.read(3, &mut edge).unwrap();
        assert_eq!(edge, [0xFF]);
        storage.read(8, &mut edge).unwrap();
        assert_eq!(edge, [0xFF]);
    }

    #[test]
    fn test_erase_restores_blank_state() {
        let mut storage = RamNvStorage::<16>::default();
        storage.write(0, &[0u8; 16]).unwrap();
        storage.erase(2, 4).unwrap();

        let mut buf = [0u8; 16];
        storage.read(0, &mut buf).unwrap();
        assert_eq!(&buf[..2], &[0, 0]);
        assert_eq!(&buf[2..6], &[0xFF; 4]);
        assert_eq!(&buf[6..], &[0u8; 10]);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut storage = RamNvStorage::<8>::default();
        let mut buf = [0u8; 4];
        assert_eq!(
            storage.read(6, &mut buf),
            Err(PufError::STORAGE_OUT_OF_BOUNDS)
        );
        assert_eq!(
            storage.write(8, &[0u8; 1]),
            Err(PufError::STORAGE_OUT_OF_BOUNDS)
        );
        assert_eq!(
            storage.erase(usize::MAX, 2),
            Err(PufError::STORAGE_OUT_OF_BOUNDS)
        );
        assert_eq!(storage.capacity(), 8);
    }
}
