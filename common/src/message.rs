//! Bounded append-only message buffer.

use heapless::String;

use crate::config::MESSAGE_CAPACITY;

/// The composed message: at most [`MESSAGE_CAPACITY`] ASCII characters.
///
/// Characters can only be appended. Appending to a full message is a no-op.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Message {
    text: String<MESSAGE_CAPACITY>,
}

impl Message {
    /// Create an empty message.
    pub const fn new() -> Self { Self { text: String::new() } }

    /// Append a character. Returns `false` (and leaves the message unchanged)
    /// when the message is full or the character is not ASCII.
    pub fn push(
        &mut self,
        c: char,
    ) -> bool {
        if self.is_full() || !c.is_ascii() {
            return false;
        }
        self.text.push(c).is_ok()
    }

    /// Number of characters (one byte each).
    #[inline]
    pub fn len(&self) -> usize { self.text.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    #[inline]
    pub fn is_full(&self) -> bool { self.text.len() >= MESSAGE_CAPACITY }

    #[inline]
    pub fn as_str(&self) -> &str { self.text.as_str() }
}

impl core::fmt::Display for Message {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_is_empty() {
        let message = Message::new();
        assert!(message.is_empty());
        assert!(!message.is_full());
        assert_eq!(message.as_str(), "");
    }

    #[test]
    fn test_push_until_full() {
        let mut message = Message::new();
        for c in "HELLO123".chars() {
            assert!(message.push(c));
        }
        assert!(message.is_full());
        assert_eq!(message.len(), MESSAGE_CAPACITY);

        assert!(!message.push('X'));
        assert_eq!(message.as_str(), "HELLO123");
    }

    #[test]
    fn test_rejects_non_ascii() {
        let mut message = Message::new();
        assert!(!message.push('é'));
        assert!(message.is_empty());
    }

    #[test]
    fn test_display() {
        let mut message = Message::new();
        message.push('H');
        message.push('I');
        assert_eq!(format!("{message}"), "HI");
    }
}
