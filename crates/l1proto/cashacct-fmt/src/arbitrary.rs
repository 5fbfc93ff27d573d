use arbitrary::{Arbitrary, Unstructured};

use crate::name::{MAX_NAME_LEN, MIN_NAME_LEN};
use crate::{AccountName, PayloadType};

const NAME_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

impl<'a> Arbitrary<'a> for AccountName {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(MIN_NAME_LEN..=MAX_NAME_LEN)?;
        // Map each random byte onto the name alphabet.
        let name = (0..len)
            .map(|_| Ok(*u.choose(NAME_ALPHABET)?))
            .collect::<arbitrary::Result<Vec<u8>>>()?;
        AccountName::try_from(name.as_slice()).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

impl<'a> Arbitrary<'a> for PayloadType {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(*u.choose(&PayloadType::ALL)?)
    }
}
