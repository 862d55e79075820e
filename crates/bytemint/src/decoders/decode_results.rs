//! # `TokenDecoder` Result Types

use core::fmt::Debug;

/// The result of decoding tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult<V>
where
    V: Debug,
{
    /// The number of tokens left undecoded after an end-of-text stop.
    pub remaining: Option<usize>,

    /// The decoded result.
    pub value: V,
}

impl<V> DecodeResult<V>
where
    V: Debug,
{
    /// Construct a new result.
    pub fn new(
        value: V,
        remaining: Option<usize>,
    ) -> Self {
        let remaining = remaining.filter(|&r| r > 0);
        Self { value, remaining }
    }

    /// Returns `true` if every token was decoded.
    pub fn is_complete(&self) -> bool {
        self.remaining.is_none()
    }

    /// Take the decoded value, discarding the remaining count.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Convert the result using a conversion function.
    pub fn convert<F, U>(
        self,
        f: F,
    ) -> DecodeResult<U>
    where
        F: FnOnce(V) -> U,
        U: Debug,
    {
        DecodeResult {
            remaining: self.remaining,
            value: f(self.value),
        }
    }

    /// Convert the result using a fallible conversion function.
    pub fn try_convert<F, U, E>(
        self,
        f: F,
    ) -> Result<DecodeResult<U>, E>
    where
        F: FnOnce(V) -> Result<U, E>,
        U: Debug,
    {
        Ok(DecodeResult {
            remaining: self.remaining,
            value: f(self.value)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_remaining_is_complete() {
        let res = DecodeResult::new(vec![1u8], Some(0));
        assert!(res.is_complete());
        assert_eq!(res.remaining, None);

        let res = DecodeResult::new(vec![1u8], Some(3));
        assert!(!res.is_complete());
        assert_eq!(res.convert(|v| v.len()), DecodeResult::new(1, Some(3)));
    }

    #[test]
    fn test_try_convert() {
        let res = DecodeResult::new(vec![0xffu8], None);
        assert!(res.try_convert(String::from_utf8).is_err());

        let res = DecodeResult::new(b"ok".to_vec(), Some(1));
        let res = res.try_convert(String::from_utf8).unwrap();
        assert_eq!(res.value, "ok");
        assert_eq!(res.remaining, Some(1));
    }
}
