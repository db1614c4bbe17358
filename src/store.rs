use crate::chat_message::ChatMessage;

/// Ordered, append-only transcript of one widget session.
///
/// Insertion order is conversation order is render order. There is no API to
/// mutate or remove an entry; a new session gets a new store.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(greeting: ChatMessage) -> Self {
        Self {
            messages: vec![greeting],
        }
    }

    /// Appends a message and returns the new length.
    pub fn append(&mut self, message: ChatMessage) -> usize {
        self.messages.push(message);
        self.messages.len()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Author;

    #[test]
    fn test_append_preserves_order() {
        let mut store = MessageStore::seeded(ChatMessage::assistant("hello", Vec::new()));
        assert_eq!(store.append(ChatMessage::user("first")), 2);
        assert_eq!(store.append(ChatMessage::assistant("reply", Vec::new())), 3);

        let texts: Vec<&str> = store.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["hello", "first", "reply"]);
        assert_eq!(store.last().map(|m| m.author()), Some(Author::Assistant));
    }

    #[test]
    fn test_earlier_entries_are_untouched_by_append() {
        let mut store = MessageStore::new();
        store.append(ChatMessage::user("one"));
        let first_id = store.messages()[0].id();
        let first_ts = store.messages()[0].timestamp();

        store.append(ChatMessage::user("two"));
        assert_eq!(store.messages()[0].id(), first_id);
        assert_eq!(store.messages()[0].timestamp(), first_ts);
        assert_eq!(store.messages()[0].text(), "one");
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut store = MessageStore::new();
        for i in 0..5 {
            store.append(ChatMessage::user(format!("m{}", i)));
        }
        let stamps: Vec<_> = store.iter().map(|m| m.timestamp()).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
