//! Synthetic question generator.
//!
//! Seeds the store with plausible-looking records: a full name, a phone
//! number, an email derived from the name, a broker drawn uniformly from
//! the fixed set, and a short lorem message.

use question_desk_core::{Broker, BrokerId, QuestionId};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::question::Question;

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elena", "Facundo", "Gabriela", "Hernan", "Ines", "Joaquin",
    "Lucia", "Martin", "Nadia", "Oscar", "Paula", "Ramiro", "Sofia", "Tomas", "Valentina", "Walter",
];

const LAST_NAMES: &[&str] = &[
    "Acosta", "Benitez", "Castro", "Dominguez", "Espinoza", "Fernandez", "Gimenez", "Herrera",
    "Ibarra", "Juarez", "Ledesma", "Molina", "Navarro", "Ortiz", "Pereyra", "Quiroga", "Rios",
    "Sosa", "Torres", "Vega",
];

const MAIL_DOMAINS: &[&str] = &["example.com", "mail.example", "inbox.example", "post.example"];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud",
];

/// Generate `count` synthetic questions with sequential ids `1..=count`.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn synthetic_questions(count: u32) -> Vec<Question> {
    let mut rng = rand::rng();
    (1..=count)
        .map(|id| synthetic_question(&mut rng, QuestionId::new(id as i32)))
        .collect()
}

fn synthetic_question<R: Rng + ?Sized>(rng: &mut R, id: QuestionId) -> Question {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ana");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Acosta");
    let domain = MAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
    let broker = Broker::all()
        .choose(rng)
        .map_or(BrokerId::new(1), |b| b.id);

    Question {
        id,
        name: format!("{first} {last}"),
        phone: format!(
            "{}-{:03}-{:04}",
            rng.random_range(200..=999),
            rng.random_range(0..=999),
            rng.random_range(0..=9999),
        ),
        email: format!(
            "{}.{}@{domain}",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        broker,
        message: lorem_sentence(rng),
    }
}

fn lorem_sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(8..=24);
    let words: Vec<&str> = (0..len)
        .map(|_| LOREM_WORDS.choose(rng).copied().unwrap_or("lorem"))
        .collect();

    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let records = synthetic_questions(10);
        let ids: Vec<i32> = records.iter().map(|q| q.id.as_i32()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i32>>());
    }

    #[test]
    fn test_brokers_from_fixed_set() {
        for record in synthetic_questions(50) {
            assert!(Broker::is_known(record.broker), "broker {}", record.broker);
        }
    }

    #[test]
    fn test_fields_are_populated() {
        for record in synthetic_questions(20) {
            assert!(!record.name.trim().is_empty());
            assert!(!record.phone.is_empty());
            assert!(record.email.contains('@'));
            assert!(record.message.ends_with('.'));
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(synthetic_questions(0).is_empty());
    }
}
