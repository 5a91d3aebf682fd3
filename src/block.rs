use std::mem;
use std::ptr;

/// The in-band header placed immediately before every block's payload,
/// used or free.
///
/// `size` covers the header itself plus the payload and is always a
/// multiple of 8. `next`/`prev` are free-list links and are only
/// meaningful while the block is free; a used block leaves them null.
#[repr(C)]
pub struct BlockHeader {
  pub size: usize,
  pub used: bool,
  pub prev_used: bool,
  pub prev_physical: *mut BlockHeader,
  pub next: *mut BlockHeader,
  pub prev: *mut BlockHeader,
}

impl BlockHeader {
  /// Size of the header itself, in bytes. Every block is at least this
  /// large plus an 8-byte minimum payload.
  pub const HEADER_SIZE: usize = mem::size_of::<BlockHeader>();

  /// The smallest legal block size: a header plus 8 bytes of payload.
  pub const MIN_BLOCK_SIZE: usize = Self::HEADER_SIZE + 8;

  pub fn new(size: usize, used: bool, prev_physical: *mut BlockHeader) -> Self {
    Self {
      size,
      used,
      prev_used: false,
      prev_physical,
      next: ptr::null_mut(),
      prev: ptr::null_mut(),
    }
  }

  /// Address one byte past the end of this block.
  pub unsafe fn end(block: *mut BlockHeader) -> *mut u8 {
    unsafe { (block as *mut u8).add((*block).size) }
  }

  /// The payload pointer handed back to the caller for this block.
  pub unsafe fn payload(block: *mut BlockHeader) -> *mut u8 {
    unsafe { (block as *mut u8).add(Self::HEADER_SIZE) }
  }

  /// Recovers the header from a payload pointer previously returned by
  /// [`Self::payload`].
  pub unsafe fn from_payload(payload: *mut u8) -> *mut BlockHeader {
    unsafe { payload.sub(Self::HEADER_SIZE) as *mut BlockHeader }
  }

  /// The usable payload size of this block: total size minus the header.
  pub unsafe fn payload_size(block: *mut BlockHeader) -> usize {
    unsafe { (*block).size - Self::HEADER_SIZE }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn header_size_is_a_multiple_of_eight() {
    assert_eq!(BlockHeader::HEADER_SIZE % 8, 0);
  }

  #[test]
  fn payload_and_from_payload_round_trip() {
    let mut storage = vec![0u8; BlockHeader::HEADER_SIZE + 64];
    let block = storage.as_mut_ptr() as *mut BlockHeader;

    unsafe {
      ptr::write(
        block,
        BlockHeader::new(BlockHeader::HEADER_SIZE + 64, true, ptr::null_mut()),
      );

      let payload = BlockHeader::payload(block);
      assert_eq!(payload as usize - block as usize, BlockHeader::HEADER_SIZE);
      assert_eq!(BlockHeader::from_payload(payload), block);
      assert_eq!(BlockHeader::payload_size(block), 64);
    }
  }
}
