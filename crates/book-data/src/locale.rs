//! Locale profiles: template tables and lexical generators per language.
//!
//! A locale code resolves to one immutable [`LocaleProfile`]. Adding a
//! language means adding a table entry; codes without an entry fall back to
//! English. Profiles only substitute words into templates, they make no
//! attempt at grammatical agreement.

use fake::Fake;
use fake::faker::address::raw::CityName;
use fake::faker::company::raw::CompanyName;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::{DE_DE, EN, FR_FR};
use rand::Rng;

use crate::seed::SeededRng;

/// Source of person, company, and place names for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexicon {
    /// `fake` English data.
    English,
    /// `fake` French data.
    French,
    /// `fake` German data.
    German,
}

impl Lexicon {
    /// Draws a full person name, first name before last name.
    pub(crate) fn person_name(self, rng: &mut SeededRng) -> String {
        let (first, last): (String, String) = match self {
            Self::English => (FirstName(EN).fake_with_rng(rng), LastName(EN).fake_with_rng(rng)),
            Self::French => (
                FirstName(FR_FR).fake_with_rng(rng),
                LastName(FR_FR).fake_with_rng(rng),
            ),
            Self::German => (
                FirstName(DE_DE).fake_with_rng(rng),
                LastName(DE_DE).fake_with_rng(rng),
            ),
        };
        format!("{first} {last}")
    }

    pub(crate) fn company_name(self, rng: &mut SeededRng) -> String {
        match self {
            Self::English => CompanyName(EN).fake_with_rng(rng),
            Self::French => CompanyName(FR_FR).fake_with_rng(rng),
            Self::German => CompanyName(DE_DE).fake_with_rng(rng),
        }
    }

    pub(crate) fn city_name(self, rng: &mut SeededRng) -> String {
        match self {
            Self::English => CityName(EN).fake_with_rng(rng),
            Self::French => CityName(FR_FR).fake_with_rng(rng),
            Self::German => CityName(DE_DE).fake_with_rng(rng),
        }
    }
}

/// Placeholders recognised inside templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Adjective,
    Noun,
    Verb,
    Place,
}

impl Slot {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "Adjective" => Some(Self::Adjective),
            "Noun" => Some(Self::Noun),
            "Verb" => Some(Self::Verb),
            "Place" => Some(Self::Place),
            _ => None,
        }
    }
}

/// How adjective draws are cased when filled into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Casing {
    /// Keep the word list's capitalisation (titles).
    AsListed,
    /// Lower-case adjectives (running review prose).
    LowerAdjectives,
}

/// Immutable template and word tables for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleProfile {
    name: &'static str,
    languages: &'static [&'static str],
    lexicon: Lexicon,
    title_templates: [&'static str; 5],
    review_templates: [&'static str; 5],
    adjectives: &'static [&'static str],
    nouns: &'static [&'static str],
    verbs: &'static [&'static str],
}

static ENGLISH: LocaleProfile = LocaleProfile {
    name: "English",
    languages: &["en"],
    lexicon: Lexicon::English,
    title_templates: [
        "{Adjective} {Noun}",
        "{Noun} of {Noun}",
        "{Verb} the {Noun}",
        "{Noun} in {Place}",
        "The {Adjective} {Noun}",
    ],
    review_templates: [
        "This book is absolutely {Adjective}!",
        "A {Adjective} read from start to finish.",
        "The plot feels {Adjective} and the characters are {Adjective}.",
        "I found the ending rather {Adjective}.",
        "Truly {Adjective} writing with a {Adjective} sense of pace.",
    ],
    adjectives: &[
        "Small",
        "Ergonomic",
        "Rustic",
        "Intelligent",
        "Gorgeous",
        "Incredible",
        "Fantastic",
        "Practical",
        "Sleek",
        "Awesome",
        "Generic",
        "Handcrafted",
        "Handmade",
        "Licensed",
        "Refined",
        "Unbranded",
        "Tasty",
        "Elegant",
        "Bespoke",
        "Modern",
    ],
    nouns: &[
        "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Table",
        "Shoes", "Hat", "Towels", "Soap", "Cheese", "Pizza", "Garden", "River", "Lantern",
        "Mirror", "Clock",
    ],
    verbs: &[
        "Discover", "Remember", "Build", "Find", "Follow", "Chase", "Answer", "Protect",
        "Embrace", "Forget", "Reclaim", "Navigate",
    ],
};

static FRENCH: LocaleProfile = LocaleProfile {
    name: "French",
    languages: &["fr"],
    lexicon: Lexicon::French,
    title_templates: [
        "{Adjective} {Noun}",
        "{Noun} de {Noun}",
        "{Verb} le {Noun}",
        "{Noun} à {Place}",
        "Le {Adjective} {Noun}",
    ],
    review_templates: [
        "Ce livre est vraiment {Adjective} !",
        "Une lecture {Adjective} du début à la fin.",
        "L'intrigue est {Adjective} et les personnages sont {Adjective}.",
        "J'ai trouvé la fin plutôt {Adjective}.",
        "Une écriture {Adjective} avec un rythme {Adjective}.",
    ],
    adjectives: &[
        "Petit",
        "Ergonomique",
        "Rustique",
        "Intelligent",
        "Magnifique",
        "Incroyable",
        "Fantastique",
        "Pratique",
        "Élégant",
        "Génial",
        "Artisanal",
        "Raffiné",
        "Moderne",
        "Délicieux",
    ],
    nouns: &[
        "Chaise",
        "Voiture",
        "Ordinateur",
        "Clavier",
        "Vélo",
        "Ballon",
        "Table",
        "Chapeau",
        "Fromage",
        "Jardin",
        "Rivière",
        "Lanterne",
        "Miroir",
        "Horloge",
    ],
    verbs: &[
        "Découvrir",
        "Retrouver",
        "Construire",
        "Suivre",
        "Protéger",
        "Oublier",
        "Conquérir",
        "Explorer",
    ],
};

static GERMAN: LocaleProfile = LocaleProfile {
    name: "German",
    languages: &["de"],
    lexicon: Lexicon::German,
    title_templates: [
        "{Adjective} {Noun}",
        "{Noun} von {Noun}",
        "{Verb} den {Noun}",
        "{Noun} in {Place}",
        "Der {Adjective} {Noun}",
    ],
    review_templates: [
        "Dieses Buch ist einfach {Adjective}!",
        "Eine {Adjective} Lektüre von Anfang bis Ende.",
        "Die Handlung wirkt {Adjective} und die Figuren sind {Adjective}.",
        "Das Ende fand ich eher {Adjective}.",
        "Wirklich {Adjective} geschrieben, mit {Adjective} Tempo.",
    ],
    adjectives: &[
        "Klein",
        "Ergonomisch",
        "Rustikal",
        "Intelligent",
        "Wunderschön",
        "Unglaublich",
        "Fantastisch",
        "Praktisch",
        "Elegant",
        "Großartig",
        "Handgefertigt",
        "Raffiniert",
        "Modern",
        "Lecker",
    ],
    nouns: &[
        "Stuhl", "Wagen", "Computer", "Tastatur", "Fahrrad", "Ball", "Tisch", "Hut", "Käse",
        "Garten", "Fluss", "Laterne", "Spiegel", "Uhr",
    ],
    verbs: &[
        "Entdecke", "Finde", "Baue", "Folge", "Schütze", "Vergiss", "Erobere", "Erkunde",
    ],
};

/// Profiles consulted by [`LocaleProfile::lookup`], in priority order.
static PROFILES: [&LocaleProfile; 3] = [&ENGLISH, &FRENCH, &GERMAN];

impl LocaleProfile {
    /// Resolves a locale code to its profile.
    ///
    /// Matching uses the language part of the code (before `_` or `-`),
    /// case-insensitively. Unknown languages fall back to English.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::LocaleProfile;
    ///
    /// assert_eq!(LocaleProfile::lookup("fr_FR").name(), "French");
    /// assert_eq!(LocaleProfile::lookup("DE-at").name(), "German");
    /// assert_eq!(LocaleProfile::lookup("pt_BR").name(), "English");
    /// ```
    #[must_use]
    pub fn lookup(code: &str) -> &'static Self {
        let language = code
            .trim()
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        PROFILES
            .iter()
            .copied()
            .find(|profile| profile.languages.iter().any(|lang| *lang == language))
            .unwrap_or(&ENGLISH)
    }

    /// Returns the fallback profile used for unknown locales.
    #[must_use]
    pub fn fallback() -> &'static Self {
        &ENGLISH
    }

    /// Returns the profile's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name generators backing the profile.
    #[must_use]
    pub const fn lexicon(&self) -> Lexicon {
        self.lexicon
    }

    /// Returns the five title templates.
    #[must_use]
    pub const fn title_templates(&self) -> &[&'static str; 5] {
        &self.title_templates
    }

    /// Returns the five review sentence templates.
    #[must_use]
    pub const fn review_templates(&self) -> &[&'static str; 5] {
        &self.review_templates
    }

    /// Draws a title: one template choice, then each slot left to right.
    pub(crate) fn title(&self, rng: &mut SeededRng) -> String {
        let template = pick(rng, &self.title_templates);
        self.fill(template, rng, Casing::AsListed)
    }

    /// Fills every review template once, in table order.
    pub(crate) fn review_sentences(&self, rng: &mut SeededRng) -> Vec<String> {
        self.review_templates
            .iter()
            .map(|template| self.fill(template, rng, Casing::LowerAdjectives))
            .collect()
    }

    fn fill(&self, template: &str, rng: &mut SeededRng, casing: Casing) -> String {
        let mut out = String::with_capacity(template.len() * 2);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            let (literal, tail) = rest.split_at(open);
            out.push_str(literal);
            let Some(close) = tail.find('}') else {
                out.push_str(tail);
                return out;
            };
            let (placeholder, after) = tail.split_at(close + 1);
            let name = placeholder.trim_start_matches('{').trim_end_matches('}');
            match Slot::parse(name) {
                Some(slot) => out.push_str(&self.draw(slot, rng, casing)),
                None => out.push_str(placeholder),
            }
            rest = after;
        }
        out.push_str(rest);
        out
    }

    fn draw(&self, slot: Slot, rng: &mut SeededRng, casing: Casing) -> String {
        match (slot, casing) {
            (Slot::Adjective, Casing::AsListed) => pick(rng, self.adjectives).to_owned(),
            (Slot::Adjective, Casing::LowerAdjectives) => pick(rng, self.adjectives).to_lowercase(),
            (Slot::Noun, _) => pick(rng, self.nouns).to_owned(),
            (Slot::Verb, _) => pick(rng, self.verbs).to_owned(),
            (Slot::Place, _) => self.lexicon.city_name(rng),
        }
    }
}

/// Picks one entry uniformly; an empty table yields an empty string.
fn pick(rng: &mut SeededRng, words: &[&'static str]) -> &'static str {
    if words.is_empty() {
        return "";
    }
    let index = rng.random_range(0..words.len());
    words.get(index).copied().unwrap_or_default()
}
