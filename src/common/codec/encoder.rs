pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use tracing::debug;

    use super::writer::{pad_remaining_capacity, push_segment, push_terminator};
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{Mode, Segment};
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    /// Encodes `data` into the smallest version that holds it at `ecl`.
    pub fn encode(data: &[u8], ecl: ECLevel) -> QRResult<(BitStream, Version)> {
        let ver = Version::min_for(data.len(), ecl)?;
        debug!(version = *ver, "Selected smallest fitting version");
        let bs = encode_with_version(data, ver, ecl)?;
        Ok((bs, ver))
    }

    /// Byte mode bit stream filling the data capacity of (`ver`, `ecl`) exactly.
    pub fn encode_with_version(data: &[u8], ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
        let len = data.len();
        if len > ver.byte_capacity(ecl) {
            return Err(QRError::CapacityExceeded { len, ec_level: ecl, version: *ver });
        }

        let mode = Mode::Byte;
        let seg = Segment::new(mode, ver.mode_bits(), ver.char_cnt_bits(mode), data);
        let bcap = ver.data_bit_capacity(ecl);
        debug_assert!(seg.bit_len() <= bcap, "Segment overflows capacity despite table check");

        let mut bs = BitStream::new(bcap);
        push_segment(seg, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);

        assert_eq!(bs.len(), bcap, "Encoded stream doesn't fill data capacity");
        Ok(bs)
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{Mode, Segment};
    use crate::common::version_db::PADDING_CODEWORDS;

    pub fn push_segment(seg: Segment, out: &mut BitStream) {
        push_header(&seg, out);
        match seg.mode {
            Mode::Byte => push_byte_data(seg.data, out),
        }
    }

    fn push_header(seg: &Segment, out: &mut BitStream) {
        out.push_bits(seg.mode.indicator(), seg.mode_bits);
        let char_cnt = seg.data.len();
        debug_assert!(
            char_cnt < (1 << seg.len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {}",
            seg.len_bits
        );
        out.push_bits(char_cnt as u16, seg.len_bits);
    }

    fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for &b in data {
            out.push_bits(b, 8);
        }
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0u8, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(
            offset == 0,
            "Bit offset should be zero before padding codewords: {}",
            offset
        );

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

    #[cfg(test)]
    mod writer_tests {
        use super::{
            push_byte_data, push_header, push_padding_bits, push_padding_codewords,
            push_terminator, Mode, Segment, PADDING_CODEWORDS,
        };
        use crate::common::bit_utils::BitStream;
        use crate::common::metadata::{ECLevel, Version};

        #[test]
        fn test_push_header_v1() {
            let ver = Version::new(1).unwrap();
            let bit_capacity = ver.data_bit_capacity(ECLevel::L);
            let mode = Mode::Byte;
            let dummy_vec = vec![0; 255];
            let mut bs = BitStream::new(bit_capacity);
            let seg = Segment::new(mode, ver.mode_bits(), ver.char_cnt_bits(mode), &dummy_vec);
            push_header(&seg, &mut bs);
            assert_eq!(bs.data(), [0b01001111, 0b11110000]);
        }

        #[test]
        fn test_push_header_v10() {
            let ver = Version::new(10).unwrap();
            let bit_capacity = ver.data_bit_capacity(ECLevel::L);
            let mode = Mode::Byte;
            let dummy_vec = vec![0; 65535];
            let mut bs = BitStream::new(bit_capacity);
            let seg = Segment::new(mode, ver.mode_bits(), ver.char_cnt_bits(mode), &dummy_vec);
            push_header(&seg, &mut bs);
            assert_eq!(bs.data(), [0b01001111, 0b11111111, 0b11110000]);
        }

        #[test]
        fn test_push_byte_data() {
            let ver = Version::new(1).unwrap();
            let mut bs = BitStream::new(ver.data_bit_capacity(ECLevel::L));
            push_byte_data("a".as_bytes(), &mut bs);
            assert_eq!(bs.data(), [0b01100001])
        }

        #[test]
        fn test_push_terminator() {
            let mut bs = BitStream::new(16);
            bs.push_bits(0xFFu8, 8);
            push_terminator(&mut bs);
            assert_eq!(bs.len(), 12);
            assert_eq!(bs.data(), [0xFF, 0b00000000]);
        }

        #[test]
        fn test_push_terminator_truncated() {
            let mut bs = BitStream::new(10);
            bs.push_bits(0xFFu8, 8);
            push_terminator(&mut bs);
            assert_eq!(bs.len(), 10);
            push_terminator(&mut bs);
            assert_eq!(bs.len(), 10);
        }

        #[test]
        fn test_push_padding_bits() {
            let mut bs = BitStream::new(16);
            bs.push_bits(0b111u8, 3);
            push_padding_bits(&mut bs);
            assert_eq!(bs.len(), 8);
            assert_eq!(bs.data(), [0b11100000]);
            push_padding_bits(&mut bs);
            assert_eq!(bs.len(), 8);
        }

        #[test]
        fn test_push_padding_codewords() {
            let mut bs = BitStream::new(48);
            bs.push_bits(0b0u8, 8);
            push_padding_codewords(&mut bs);
            assert_eq!(bs.data(), [0, 0xEC, 0x11, 0xEC, 0x11, 0xEC]);
            assert_eq!(PADDING_CODEWORDS, [0xEC, 0x11]);
        }
    }
}
