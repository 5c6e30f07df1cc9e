//! Question record types.

use question_desk_core::{Broker, BrokerId, QuestionId};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A question record.
///
/// Instances are only ever produced by the store; `id` is assigned on
/// creation and never changes afterwards. Email is kept as a free string
/// here - syntactic validation happens at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub broker: BrokerId,
    pub message: String,
}

impl Question {
    /// Case-insensitive substring match over the display fields.
    ///
    /// The needle is matched against the canonicalized concatenation of
    /// name, phone and email (the columns shown in the table). An empty or
    /// whitespace-only needle matches every record.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack = format!("{} {} {}", self.name, self.phone, self.email).to_lowercase();
        haystack.contains(&needle)
    }
}

/// A question without an id: the input to [`QuestionStore::add`].
///
/// [`QuestionStore::add`]: crate::QuestionStore::add
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub broker: BrokerId,
    pub message: String,
}

impl QuestionDraft {
    /// Check the field constraints the store enforces.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] for an empty or
    /// whitespace-only name, [`ValidationError::UnknownBroker`] for a
    /// broker outside the fixed set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !Broker::is_known(self.broker) {
            return Err(ValidationError::UnknownBroker(self.broker));
        }
        Ok(())
    }

    pub(crate) fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            broker: self.broker,
            message: self.message,
        }
    }
}

/// A partial update applied to an existing record by id.
///
/// Every field is optional: `None` means "not supplied, keep the current
/// value"; `Some("")` on a clearable field means "explicitly cleared".
/// `id` is not part of a patch - it can never be altered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub broker: Option<BrokerId>,
    pub message: Option<String>,
}

impl QuestionPatch {
    /// Check the field constraints on the supplied fields only.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QuestionDraft::validate`], applied to fields
    /// that are present in the patch.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ValidationError::EmptyName);
        }
        if let Some(broker) = self.broker
            && !Broker::is_known(broker)
        {
            return Err(ValidationError::UnknownBroker(broker));
        }
        Ok(())
    }

    pub(crate) fn apply(self, record: &mut Question) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(phone) = self.phone {
            record.phone = phone;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(broker) = self.broker {
            record.broker = broker;
        }
        if let Some(message) = self.message {
            record.message = message;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: QuestionId::new(1),
            name: "Ana Acosta".to_string(),
            phone: "555-123-4567".to_string(),
            email: "ana@example.com".to_string(),
            broker: BrokerId::new(1),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_matches_empty_needle() {
        assert!(sample().matches(""));
        assert!(sample().matches("   "));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(sample().matches("ANA"));
        assert!(sample().matches("aCoStA"));
    }

    #[test]
    fn test_matches_phone_and_email() {
        assert!(sample().matches("123-45"));
        assert!(sample().matches("@example"));
    }

    #[test]
    fn test_matches_ignores_message() {
        assert!(!sample().matches("Hello there"));
    }

    #[test]
    fn test_draft_validate_empty_name() {
        let draft = QuestionDraft {
            name: "  ".to_string(),
            phone: String::new(),
            email: String::new(),
            broker: BrokerId::new(1),
            message: String::new(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_draft_validate_unknown_broker() {
        let draft = QuestionDraft {
            name: "Ana".to_string(),
            phone: String::new(),
            email: String::new(),
            broker: BrokerId::new(5),
            message: String::new(),
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::UnknownBroker(BrokerId::new(5)))
        );
    }

    #[test]
    fn test_patch_validate_skips_absent_fields() {
        assert_eq!(QuestionPatch::default().validate(), Ok(()));
    }

    #[test]
    fn test_patch_apply_touches_only_supplied_fields() {
        let mut record = sample();
        let patch = QuestionPatch {
            name: Some("Updated".to_string()),
            message: Some(String::new()),
            ..QuestionPatch::default()
        };
        patch.apply(&mut record);

        assert_eq!(record.name, "Updated");
        assert_eq!(record.message, "");
        assert_eq!(record.phone, "555-123-4567");
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.broker, BrokerId::new(1));
    }
}
