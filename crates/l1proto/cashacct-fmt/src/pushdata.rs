//! Push-data scanning of the registration body.
//!
//! After the prefix the script must be nothing but data pushes:
//!
//! ```text
//! 0x01..=0x4b       <n bytes>
//! OP_PUSHDATA1 <u8>     <n bytes>
//! OP_PUSHDATA2 <u16 le> <n bytes>
//! OP_PUSHDATA4 <u32 le> <n bytes>
//! ```

use bitcoin::opcodes::all::{
    OP_PUSHBYTES_1, OP_PUSHBYTES_75, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4,
};

use crate::cursor::{Overrun, ScriptCursor};
use crate::error::{CashAcctError, CashAcctResult};

const PUSHBYTES_MIN: u8 = OP_PUSHBYTES_1.to_u8();
const PUSHBYTES_MAX: u8 = OP_PUSHBYTES_75.to_u8();
const PUSHDATA1: u8 = OP_PUSHDATA1.to_u8();
const PUSHDATA2: u8 = OP_PUSHDATA2.to_u8();
const PUSHDATA4: u8 = OP_PUSHDATA4.to_u8();

/// Byte range of one pushed element within the script.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Part {
    offset: usize,
    len: usize,
}

impl Part {
    /// Returns the bytes of this part within the script it was scanned from.
    pub(crate) fn slice<'b>(&self, script: &'b [u8]) -> &'b [u8] {
        &script[self.offset..self.offset + self.len]
    }
}

/// Splits the script from `start` onwards into pushed parts.
///
/// Scanning stops only when the end of the script is reached exactly.
pub(crate) fn scan_parts(script: &[u8], start: usize) -> CashAcctResult<Vec<Part>> {
    let mut cur = ScriptCursor::new_at(script, start);
    let mut parts = Vec::new();

    while !cur.is_at_end() {
        parts.push(next_part(&mut cur)?);
    }

    Ok(parts)
}

fn next_part(cur: &mut ScriptCursor<'_>) -> CashAcctResult<Part> {
    let op_at = cur.position();
    let truncated = |_: Overrun| CashAcctError::PushDataTruncated { at: op_at };

    let opcode = cur.read_u8().map_err(truncated)?;
    let len = match opcode {
        PUSHBYTES_MIN..=PUSHBYTES_MAX => usize::from(opcode),
        PUSHDATA1 => usize::from(cur.read_u8().map_err(truncated)?),
        PUSHDATA2 => usize::from(u16::from_le_bytes(cur.read_arr().map_err(truncated)?)),
        PUSHDATA4 => {
            let len = u32::from_le_bytes(cur.read_arr().map_err(truncated)?);
            // Can't fit in the address space, so can't fit in the buffer.
            usize::try_from(len).unwrap_or(usize::MAX)
        }
        _ => {
            return Err(CashAcctError::NoPushDataOperator { opcode, at: op_at });
        }
    };

    let offset = cur.position();
    cur.read_slice(len)
        .map_err(|e| CashAcctError::PushDataExceedsBuffer {
            at: e.at,
            len: e.wanted,
            remaining: e.remaining,
        })?;

    Ok(Part { offset, len })
}
