// ============================================================
// Layer 4 — Built-in Komodo Tour Table
// ============================================================
// The default corpus: frequently asked questions about guided
// tours in Komodo National Park. Order is significant (it
// decides tie-breaks), so entries must only ever be appended.
//
// BuiltinCorpus wraps the table in the CorpusSource trait so
// the CLI can treat it exactly like a corpus loaded from JSON.

use anyhow::Result;

use crate::domain::{corpus::QaCorpus, qa_pair::QaPair};
use crate::domain::traits::CorpusSource;

/// (question, answer) rows of the built-in table.
const KOMODO_QA: &[(&str, &str)] = &[
    (
        "Do I need to book a guided ticket?",
        "It is mandatory, because if you do not book a guided ticket you will not be able to track within the Komodo National Park area.",
    ),
    (
        "Do Nusabadjo tour guides speak English?",
        "Most of our guides speak good English.",
    ),
    (
        "Can I book my ticket on the same day?",
        "Yes, the guide tickets available do not have a booking limit.",
    ),
    (
        "How old are children required to purchase tickets?",
        "Children who are 6 years old are required to purchase a ticket.",
    ),
    (
        "Is there a special price for children?",
        "There is no special price for children.",
    ),
    (
        "Can I cancel my booking?",
        "You cannot cancel a paid ticket booking.",
    ),
    (
        "Can I change my booking date?",
        "You can make changes to the departure date up to H-1 before the departure date.",
    ),
    (
        "What is the limit to change the departure date?",
        "You can only change the departure date once.",
    ),
    (
        "Does the guide ticket include entrance ticket to Komodo National Park?",
        "The guide ticket does not include the entrance ticket to Komodo National Park.",
    ),
    (
        "What should I bring on the guided tour?",
        "We recommend that you bring sunblock, a hat, comfortable shoes, drinking water, and weather-appropriate clothing.",
    ),
    (
        "Can I interact directly with the Komodo dragons?",
        "Visitors are strictly prohibited from interacting directly with the dragons.",
    ),
    (
        "Is there a risk of bad weather during the tour?",
        "We always monitor the weather conditions and will inform you if there are any changes that affect the tour.",
    ),
    (
        "Do the tour guides carry first aid equipment?",
        "Yes, our guides are equipped with first aid kits for emergency situations.",
    ),
    (
        "How to maintain safety while trekking on the island?",
        "Our guides will provide clear instructions on how to keep safe while trekking on the island, including choosing safe trails and keeping a distance from wild animals.",
    ),
    (
        "Are tours to Komodo National Park available every day?",
        "Yes, we provide tours every day, but it is recommended to book in advance, especially in high season.",
    ),
    (
        "How to reach Komodo National Park from Labuan Bajo?",
        "You can reach Komodo National Park by boat from Labuan Bajo, which takes about 2-3 hours depending on your destination.",
    ),
    (
        "Is there a place to camp in Komodo National Park?",
        "Camping is one of the prohibited activities in Komodo National Park.",
    ),
    (
        "Is the tour conducted in bad weather?",
        "Visitor safety is our priority. In case of bad weather, tours may be canceled or rescheduled to maintain safety.",
    ),
    (
        "Are there any medical facilities around Komodo National Park?",
        "There are medical facilities within Komodo National Park for first aid, but we strongly recommend that you bring your own medication during the tour.",
    ),
    (
        "Are the guided tours in Komodo National Park suitable for the elderly?",
        "We have more relaxed tours for the elderly with shorter routes and lighter activities. Please let the guide know so we can adjust accordingly.",
    ),
    (
        "What is Nusabadjo doing to support the conservation of Komodo National Park?",
        "Nusabadjo works closely with local authorities to support conservation programs, including educating visitors about the importance of nature conservation.",
    ),
    (
        "Can I do other activities besides trekking, such as photography or bird watching?",
        "Of course, Komodo National Park has a wide variety of flora and fauna suitable for photography and bird watching. Our guides will help you find the best spots.",
    ),
];

/// Build a fresh corpus from the built-in Komodo tour table.
pub fn komodo_corpus() -> QaCorpus {
    KOMODO_QA
        .iter()
        .map(|&(question, answer)| QaPair::new(question, answer))
        .collect::<Vec<_>>()
        .into()
}

/// CorpusSource over the built-in table; never fails.
pub struct BuiltinCorpus;

impl CorpusSource for BuiltinCorpus {
    fn load(&self) -> Result<QaCorpus> {
        let corpus = komodo_corpus();
        tracing::debug!("Using built-in Komodo corpus ({} pairs)", corpus.len());
        Ok(corpus)
    }
}
