//! Bounded read cursor over a script buffer.

/// Attempt to read past the end of the buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Overrun {
    /// Position the read started at.
    pub(crate) at: usize,

    /// Number of bytes requested.
    pub(crate) wanted: usize,

    /// Number of bytes that were left.
    pub(crate) remaining: usize,
}

/// Forward-only cursor over a borrowed byte slice.
///
/// Every read goes through [`ScriptCursor::read_slice`], which checks the
/// bounds before advancing.  A failed read leaves the cursor where it was.
#[derive(Debug)]
pub(crate) struct ScriptCursor<'b> {
    buf: &'b [u8],
    at: usize,
}

impl<'b> ScriptCursor<'b> {
    /// Constructs a new instance starting at `at`, clamped to the buffer end.
    pub(crate) fn new_at(buf: &'b [u8], at: usize) -> Self {
        Self {
            buf,
            at: at.min(buf.len()),
        }
    }

    /// Returns the current position.
    pub(crate) fn position(&self) -> usize {
        self.at
    }

    /// Returns the total number of remaining bytes that can be read.
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.at
    }

    /// Returns if there is nothing left to read.
    pub(crate) fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads exactly `n` bytes, advancing past them.
    pub(crate) fn read_slice(&mut self, n: usize) -> Result<&'b [u8], Overrun> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(Overrun {
                at: self.at,
                wanted: n,
                remaining,
            });
        }

        let start = self.at;
        self.at += n;
        Ok(&self.buf[start..self.at])
    }

    /// Reads exactly `N` bytes into an array.
    pub(crate) fn read_arr<const N: usize>(&mut self) -> Result<[u8; N], Overrun> {
        let mut arr = [0; N];
        arr.copy_from_slice(self.read_slice(N)?);
        Ok(arr)
    }

    /// Reads a single byte.
    pub(crate) fn read_u8(&mut self) -> Result<u8, Overrun> {
        let [b] = self.read_arr::<1>()?;
        Ok(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let buf = [1, 2, 3, 4, 5, 6];
        let mut cur = ScriptCursor::new_at(&buf, 1);
        assert_eq!(cur.read_u8(), Ok(2));
        assert_eq!(cur.read_arr::<2>(), Ok([3, 4]));
        assert_eq!(cur.position(), 4);
        assert_eq!(cur.read_slice(2), Ok(&buf[4..]));
        assert!(cur.is_at_end());
    }

    #[test]
    fn test_overrun_does_not_advance() {
        let buf = [1, 2, 3];
        let mut cur = ScriptCursor::new_at(&buf, 1);
        let err = cur.read_arr::<4>().unwrap_err();
        assert_eq!(
            err,
            Overrun {
                at: 1,
                wanted: 4,
                remaining: 2
            }
        );
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.read_slice(2), Ok(&buf[1..]));
    }

    #[test]
    fn test_read_at_end() {
        let buf = [9];
        let mut cur = ScriptCursor::new_at(&buf, 5);
        assert!(cur.is_at_end());
        assert!(cur.read_u8().is_err());
        assert_eq!(cur.read_slice(0), Ok(&[][..]));
    }
}
