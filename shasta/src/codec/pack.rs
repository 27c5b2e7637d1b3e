use alloy::primitives::{
    Address, B256,
    aliases::{U24, U48},
};

use super::{CodecError, Result};

/// Big-endian byte writer for the compact wire format.
pub(super) struct Packer {
    data: Vec<u8>,
}

impl Packer {
    pub(super) fn with_capacity(size: usize) -> Self {
        Self {
            data: Vec::with_capacity(size),
        }
    }

    pub(super) fn pack_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    pub(super) fn pack_bool(&mut self, value: bool) {
        self.data.push(u8::from(value));
    }

    pub(super) fn pack_u16(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_be_bytes());
    }

    pub(super) fn pack_u24(&mut self, value: U24) {
        let value: u32 = value.to();
        self.data.extend_from_slice(&value.to_be_bytes()[1..]);
    }

    pub(super) fn pack_u48(&mut self, value: U48) {
        let value: u64 = value.to();
        self.data.extend_from_slice(&value.to_be_bytes()[2..]);
    }

    pub(super) fn pack_address(&mut self, value: &Address) {
        self.data.extend_from_slice(value.as_slice());
    }

    pub(super) fn pack_b256(&mut self, value: &B256) {
        self.data.extend_from_slice(value.as_slice());
    }

    pub(super) fn len(&self) -> usize {
        self.data.len()
    }

    pub(super) fn finish(self) -> Vec<u8> {
        self.data
    }
}

/// Big-endian byte cursor mirroring the unchecked on-chain unpack helpers,
/// with bounds checks instead of undefined reads.
pub(super) struct Unpacker<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Unpacker<'a> {
    pub(super) fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let insufficient = CodecError::InsufficientData {
            needed: len,
            offset: self.offset,
        };
        let end = self.offset.checked_add(len).ok_or(insufficient.clone())?;
        let bytes = self.data.get(self.offset..end).ok_or(insufficient)?;
        self.offset = end;
        Ok(bytes)
    }

    pub(super) fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub(super) fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub(super) fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub(super) fn read_u24(&mut self) -> Result<U24> {
        let bytes = self.read_bytes(3)?;
        let value =
            (u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]);
        Ok(U24::from(value))
    }

    pub(super) fn read_u48(&mut self) -> Result<U48> {
        let bytes = self.read_bytes(6)?;
        let value = (u64::from(bytes[0]) << 40)
            | (u64::from(bytes[1]) << 32)
            | (u64::from(bytes[2]) << 24)
            | (u64::from(bytes[3]) << 16)
            | (u64::from(bytes[4]) << 8)
            | u64::from(bytes[5]);
        Ok(U48::from(value))
    }

    pub(super) fn read_address(&mut self) -> Result<Address> {
        Ok(Address::from_slice(self.read_bytes(20)?))
    }

    pub(super) fn read_b256(&mut self) -> Result<B256> {
        Ok(B256::from_slice(self.read_bytes(32)?))
    }

    /// Ensures the entire buffer has been consumed.
    pub(super) fn finish(&self) -> Result<()> {
        if self.offset == self.data.len() {
            Ok(())
        } else {
            Err(CodecError::TrailingBytes(self.data.len() - self.offset))
        }
    }
}

/// Converts an array length into a 24-bit wire length.
pub(super) fn u24_len(len: usize) -> Result<U24> {
    if len > 0xFF_FFFF {
        return Err(CodecError::LengthExceedsUint24(len));
    }
    Ok(U24::from(len))
}

/// Converts an array length into a 16-bit wire length.
pub(super) fn u16_len(len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| CodecError::LengthExceedsUint16(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_round_trip() {
        let mut packer = Packer::with_capacity(64);
        packer.pack_u8(0xAB);
        packer.pack_bool(true);
        packer.pack_u16(0xBEEF);
        packer.pack_u24(U24::from(0x00AB_CDEFu32));
        packer.pack_u48(U48::from(0x0000_1234_5678_9ABCu64));
        packer.pack_address(&Address::repeat_byte(0x11));
        packer.pack_b256(&B256::repeat_byte(0x22));
        let encoded = packer.finish();
        assert_eq!(encoded.len(), 1 + 1 + 2 + 3 + 6 + 20 + 32);

        let mut unpacker = Unpacker::new(&encoded);
        assert_eq!(unpacker.read_u8().unwrap(), 0xAB);
        assert!(unpacker.read_bool().unwrap());
        assert_eq!(unpacker.read_u16().unwrap(), 0xBEEF);
        assert_eq!(unpacker.read_u24().unwrap(), U24::from(0x00AB_CDEFu32));
        assert_eq!(
            unpacker.read_u48().unwrap(),
            U48::from(0x0000_1234_5678_9ABCu64)
        );
        assert_eq!(unpacker.read_address().unwrap(), Address::repeat_byte(0x11));
        assert_eq!(unpacker.read_b256().unwrap(), B256::repeat_byte(0x22));
        unpacker.finish().unwrap();
    }

    #[test]
    fn short_buffer_reports_needed_bytes() {
        let mut unpacker = Unpacker::new(&[0x00, 0x01]);
        assert_eq!(
            unpacker.read_u48(),
            Err(CodecError::InsufficientData {
                needed: 6,
                offset: 0
            })
        );
    }

    #[test]
    fn unconsumed_bytes_fail_finish() {
        let unpacker = Unpacker::new(&[0x00, 0x01, 0x02]);
        assert_eq!(unpacker.finish(), Err(CodecError::TrailingBytes(3)));
    }

    #[test]
    fn length_bounds_are_enforced() {
        assert_eq!(u16_len(65_535).unwrap(), u16::MAX);
        assert_eq!(
            u16_len(65_536),
            Err(CodecError::LengthExceedsUint16(65_536))
        );
        assert_eq!(u24_len(0xFF_FFFF).unwrap(), U24::from(0xFF_FFFFu32));
        assert_eq!(
            u24_len(0x100_0000),
            Err(CodecError::LengthExceedsUint24(0x100_0000))
        );
    }
}
