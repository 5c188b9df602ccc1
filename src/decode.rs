/*!
Decoding of the two-byte accented form.

A lead byte (0xC3) followed by a recognized continuation byte is one accented
Latin-1 letter. Its logical code is the Latin-1 code point, which is the
continuation byte plus 0x40 (`C3 A9` is `0xE9`, "é"). Everything else is
either a printable ASCII character counted as itself, or skipped.
*/

/// Marker announcing that the next byte is a continuation byte
pub const LEAD_BYTE: u8 = 0xC3;

/// Distance from a continuation byte to its Latin-1 code point
const LATIN1_OFFSET: u8 = 0x40;

/// Continuation bytes recognized after [`LEAD_BYTE`]
pub const CONTINUATION_BYTES: [u8; 60] = [
    // lowercase grave
    0xA0, 0xA8, 0xAC, 0xB2, 0xB9,
    // uppercase grave
    0x80, 0x88, 0x8C, 0x92, 0x99,
    // lowercase acute
    0xA1, 0xA9, 0xAD, 0xB3, 0xBA, 0xBD,
    // uppercase acute
    0x81, 0x89, 0x8D, 0x93, 0x9A, 0x9D,
    // lowercase circumflex
    0xA2, 0xAA, 0xAE, 0xB4, 0xBB,
    // uppercase circumflex
    0x82, 0x8A, 0x8E, 0x94, 0x9B,
    // lowercase tilde
    0xA3, 0xB1, 0xB5,
    // uppercase tilde
    0x83, 0x91, 0x95,
    // lowercase diaeresis
    0xA4, 0xAB, 0xAF, 0xB6, 0xBC, 0xBF,
    // uppercase diaeresis (no Y, it is outside Latin-1)
    0x84, 0x8B, 0x8F, 0x96, 0x9C,
    // ring
    0xA5, 0x85,
    // ae AE
    0xA6, 0x86,
    // cedilla
    0xA7, 0x87,
    // eth
    0xB0, 0x90,
    // slashed o
    0xB8, 0x98,
    // sharp s
    0x9F,
];

/// Continuation byte -> logical code, 0 where the byte is not recognized
const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < CONTINUATION_BYTES.len() {
        let byte = CONTINUATION_BYTES[i];
        table[byte as usize] = byte + LATIN1_OFFSET;
        i += 1;
    }
    table
}

/// Look up the logical code for a byte following [`LEAD_BYTE`]
#[inline]
pub fn decode_continuation(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        0 => None,
        code => Some(code),
    }
}

/// True if `code` is produced by a two-byte sequence
#[inline]
pub fn is_accented(code: u8) -> bool {
    code >= LATIN1_OFFSET && DECODE_TABLE[(code - LATIN1_OFFSET) as usize] == code
}

/// External representation of a logical code: the two-byte form for accented
/// letters, the raw byte otherwise
pub fn encode(code: u8) -> Vec<u8> {
    if is_accented(code) {
        vec![LEAD_BYTE, code - LATIN1_OFFSET]
    } else {
        vec![code]
    }
}

/// Result of feeding one byte to the [`Decoder`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// Lead byte consumed, waiting for the continuation byte
    Pending,
    /// One character to count
    Char(u8),
    /// Byte dropped (non-printable, space, or unknown continuation)
    Skip,
}

/// Byte-at-a-time decoder holding the "pending lead byte" state
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    pending_lead: bool,
}

impl Decoder {
    pub fn new() -> Decoder {
        Decoder { pending_lead: false }
    }

    /// Feed the next byte of the current unit
    pub fn feed(&mut self, byte: u8) -> Decoded {
        if self.pending_lead {
            // whatever follows the lead byte is consumed, even another lead byte
            self.pending_lead = false;
            return match decode_continuation(byte) {
                Some(code) => Decoded::Char(code),
                None => Decoded::Skip,
            };
        }
        if byte == LEAD_BYTE {
            self.pending_lead = true;
            return Decoded::Pending;
        }
        // printable ASCII without the space
        if byte.is_ascii_graphic() {
            Decoded::Char(byte)
        } else {
            Decoded::Skip
        }
    }

    /// End the current unit. Returns true if a dangling lead byte was discarded.
    pub fn finish(&mut self) -> bool {
        std::mem::replace(&mut self.pending_lead, false)
    }
}
