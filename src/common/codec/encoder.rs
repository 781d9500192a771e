pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use log::debug;

    use super::writer::{pad_remaining_capacity, push_segment, push_terminator};
    use crate::common::codec::Mode;
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::ECLevel;
    use crate::common::tables::MODE_INDICATOR_BITS;
    use crate::common::BitStream;

    /// Encodes `data` into the data codewords of a Version 1 symbol at `ecl`.
    ///
    /// The returned stream is exactly `ecl.data_bit_capacity()` bits long:
    /// header, payload, terminator, bit padding and alternating pad codewords.
    pub fn encode_data(data: &str, ecl: ECLevel) -> QRResult<(BitStream, Mode)> {
        let mode = detect_mode(data)?;
        let chars = data.chars().collect::<Vec<_>>();

        let bcap = ecl.data_bit_capacity();
        let needed = required_bits(mode, chars.len());
        if needed > bcap {
            return Err(QRError::DataTooLong { needed, capacity: bcap });
        }
        debug!("Encoding {} chars in {mode:?} mode: {needed} of {bcap} bits", chars.len());

        let mut bs = BitStream::new(bcap);
        push_segment(mode, &chars, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);

        debug_assert_eq!(bs.len(), bcap, "Encoded stream doesn't fill the capacity");
        Ok((bs, mode))
    }

    pub fn detect_mode(data: &str) -> QRResult<Mode> {
        if data.chars().all(|ch| Mode::Alphanumeric.contains(ch)) {
            return Ok(Mode::Alphanumeric);
        }
        match data.chars().find(|&ch| !Mode::Byte.contains(ch)) {
            Some(ch) => Err(QRError::InvalidChar(ch)),
            None => Ok(Mode::Byte),
        }
    }

    pub fn required_bits(mode: Mode, char_cnt: usize) -> usize {
        MODE_INDICATOR_BITS + mode.char_cnt_bits() + mode.encoded_len(char_cnt)
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::codec::Mode;
    use crate::common::tables::{MODE_INDICATOR_BITS, PADDING_CODEWORDS};
    use crate::common::BitStream;

    pub fn push_segment(mode: Mode, data: &[char], out: &mut BitStream) {
        push_header(mode, data.len(), out);
        match mode {
            Mode::Alphanumeric => push_alphanumeric_data(data, out),
            Mode::Byte => push_byte_data(data, out),
        }
    }

    fn push_header(mode: Mode, char_cnt: usize, out: &mut BitStream) {
        let len_bits = mode.char_cnt_bits();
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(mode.indicator(), MODE_INDICATOR_BITS);
        out.push_bits(char_cnt as u16, len_bits);
    }

    fn push_alphanumeric_data(data: &[char], out: &mut BitStream) {
        for chunk in data.chunks(2) {
            let len = if chunk.len() == 2 { 11 } else { 6 };
            let data = Mode::Alphanumeric.encode_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    fn push_byte_data(data: &[char], out: &mut BitStream) {
        for chunk in data.chunks(1) {
            let data = Mode::Byte.encode_chunk(chunk);
            out.push_bits(data, 8);
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
        debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}
