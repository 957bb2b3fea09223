//! Player-facing message history.

use strum::Display;

/// Category of a message; renderers map it to a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    Welcome,
    Info,
    Impossible,
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
    HealthRecovered,
    StatusEffect,
    Descend,
    LevelUp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    pub count: u32,
}

impl Message {
    /// Text with a repeat suffix when the message was stacked.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Append-only log; identical consecutive messages stack into one entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>, kind: MessageKind) {
        let text = text.into();
        if let Some(last) = self.messages.last_mut()
            && last.text == text
            && last.kind == kind
        {
            last.count += 1;
            return;
        }
        self.messages.push(Message {
            text,
            kind,
            count: 1,
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_messages_stack() {
        let mut log = MessageLog::new();
        log.add("You wait.", MessageKind::Info);
        log.add("You wait.", MessageKind::Info);
        log.add("Orc attacks.", MessageKind::EnemyAttack);
        log.add("You wait.", MessageKind::Info);

        assert_eq!(log.len(), 3);
        assert_eq!(log.messages()[0].count, 2);
        assert_eq!(log.messages()[0].full_text(), "You wait. (x2)");
        assert_eq!(log.messages()[2].full_text(), "You wait.");
    }
}
