//! Narrative message log.
//!
//! The log is part of the resolved game state rather than a rendering
//! concern: actions and the turn engine append to it, frontends only read.
//! Tests assert on it to pin down narrative ordering.

/// Semantic color tag; frontends map these to actual palette entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageColor {
    White,
    Welcome,
    PlayerAttack,
    EnemyAttack,
    PlayerDie,
    EnemyDie,
    AllyMine,
    EnemyMine,
    HealthRecovered,
    StatusApplied,
    Descend,
    Impossible,
    Invalid,
}

impl MessageColor {
    /// Reference RGB values for frontends without a palette of their own.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            MessageColor::White => (0xFF, 0xFF, 0xFF),
            MessageColor::Welcome => (0x20, 0xA0, 0xFF),
            MessageColor::PlayerAttack => (0xE0, 0xE0, 0xE0),
            MessageColor::EnemyAttack => (0xFF, 0xC0, 0xC0),
            MessageColor::PlayerDie => (0xFF, 0x30, 0x30),
            MessageColor::EnemyDie => (0xFF, 0xA0, 0x30),
            MessageColor::AllyMine => (0x40, 0xFF, 0x40),
            MessageColor::EnemyMine => (0xFF, 0x80, 0x40),
            MessageColor::HealthRecovered => (0x00, 0xFF, 0x00),
            MessageColor::StatusApplied => (0x3F, 0xFF, 0x3F),
            MessageColor::Descend => (0x9F, 0x3F, 0xFF),
            MessageColor::Impossible => (0x80, 0x80, 0x80),
            MessageColor::Invalid => (0xFF, 0xFF, 0x00),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: MessageColor,
    /// Consecutive repeats folded into this entry.
    pub count: u32,
}

impl Message {
    pub fn new(text: impl Into<String>, color: MessageColor) -> Self {
        Self {
            text: text.into(),
            color,
            count: 1,
        }
    }

    /// Text with the repeat count appended when above one.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Append-only message log; order is resolution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, folding an exact repeat into the previous entry.
    pub fn add_message(&mut self, text: impl Into<String>, color: MessageColor) {
        let text = text.into();
        if let Some(last) = self.messages.last_mut()
            && last.text == text
            && last.color == color
        {
            last.count += 1;
            return;
        }
        self.messages.push(Message::new(text, color));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// True when any entry carries exactly this text.
    pub fn contains(&self, text: &str) -> bool {
        self.messages.iter().any(|message| message.text == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_fold_into_one_entry() {
        let mut log = MessageLog::new();
        log.add_message("That way is blocked", MessageColor::Impossible);
        log.add_message("That way is blocked", MessageColor::Impossible);
        log.add_message("You descend the staircase.", MessageColor::Descend);

        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next().unwrap().full_text(), "That way is blocked (x2)");
    }
}
