//! Process-wide reference data: country and state alias tables plus
//! international dialing prefixes. Built once, read-only thereafter.
//!
//! Aliases are stored pre-folded (lowercase, unaccented, dashes opened into
//! spaces) so they can be matched directly against `text::fold` output.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

#[derive(Debug)]
pub struct CountryEntry {
    /// Canonical code the remote API accepts.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Folded free-text synonyms, multi-language.
    pub aliases: &'static [&'static str],
    /// International dialing prefix, digits only.
    pub dialing: &'static str,
}

#[derive(Debug)]
pub struct StateEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Table iteration order is declaration order; the first match wins.
pub static COUNTRIES: &[CountryEntry] = &[
    CountryEntry { code: "FR", name: "France", aliases: &["france"], dialing: "33" },
    CountryEntry { code: "BE", name: "Belgium", aliases: &["belgium", "belgique", "belgien", "belgica"], dialing: "32" },
    CountryEntry { code: "CH", name: "Switzerland", aliases: &["switzerland", "suisse", "schweiz", "suiza", "svizzera"], dialing: "41" },
    CountryEntry { code: "DE", name: "Germany", aliases: &["germany", "allemagne", "deutschland", "alemania"], dialing: "49" },
    CountryEntry { code: "ES", name: "Spain", aliases: &["spain", "espagne", "spanien", "espana"], dialing: "34" },
    CountryEntry { code: "IT", name: "Italy", aliases: &["italy", "italie", "italien", "italia"], dialing: "39" },
    CountryEntry { code: "GB", name: "United Kingdom", aliases: &["united kingdom", "great britain", "royaume uni", "grande bretagne", "england", "angleterre", "uk"], dialing: "44" },
    CountryEntry { code: "US", name: "United States", aliases: &["united states", "united states of america", "usa", "etats unis", "etats unis d amerique", "vereinigte staaten", "estados unidos"], dialing: "1" },
    CountryEntry { code: "CA", name: "Canada", aliases: &["canada", "kanada"], dialing: "1" },
    CountryEntry { code: "AU", name: "Australia", aliases: &["australia", "australie", "australien"], dialing: "61" },
    CountryEntry { code: "NL", name: "Netherlands", aliases: &["netherlands", "the netherlands", "holland", "pays bas", "hollande", "niederlande", "paises bajos"], dialing: "31" },
    CountryEntry { code: "PT", name: "Portugal", aliases: &["portugal"], dialing: "351" },
    CountryEntry { code: "AT", name: "Austria", aliases: &["austria", "autriche", "osterreich"], dialing: "43" },
    CountryEntry { code: "IE", name: "Ireland", aliases: &["ireland", "irlande", "irland", "eire"], dialing: "353" },
    CountryEntry { code: "LU", name: "Luxembourg", aliases: &["luxembourg", "luxemburg", "luxemburgo"], dialing: "352" },
    CountryEntry { code: "MC", name: "Monaco", aliases: &["monaco"], dialing: "377" },
    CountryEntry { code: "DK", name: "Denmark", aliases: &["denmark", "danemark", "danmark", "dinamarca"], dialing: "45" },
    CountryEntry { code: "SE", name: "Sweden", aliases: &["sweden", "suede", "schweden", "suecia"], dialing: "46" },
    CountryEntry { code: "NO", name: "Norway", aliases: &["norway", "norvege", "norwegen", "noruega"], dialing: "47" },
    CountryEntry { code: "FI", name: "Finland", aliases: &["finland", "finlande", "finnland", "finlandia", "suomi"], dialing: "358" },
    CountryEntry { code: "IS", name: "Iceland", aliases: &["iceland", "islande", "island", "islandia"], dialing: "354" },
    CountryEntry { code: "PL", name: "Poland", aliases: &["poland", "pologne", "polen", "polonia", "polska"], dialing: "48" },
    CountryEntry { code: "CZ", name: "Czech Republic", aliases: &["czech republic", "czechia", "republique tcheque", "tschechien", "chequia"], dialing: "420" },
    CountryEntry { code: "SK", name: "Slovakia", aliases: &["slovakia", "slovaquie", "slowakei", "eslovaquia"], dialing: "421" },
    CountryEntry { code: "HU", name: "Hungary", aliases: &["hungary", "hongrie", "ungarn", "hungria"], dialing: "36" },
    CountryEntry { code: "RO", name: "Romania", aliases: &["romania", "roumanie", "rumanien", "rumania"], dialing: "40" },
    CountryEntry { code: "BG", name: "Bulgaria", aliases: &["bulgaria", "bulgarie", "bulgarien"], dialing: "359" },
    CountryEntry { code: "GR", name: "Greece", aliases: &["greece", "grece", "griechenland", "grecia"], dialing: "30" },
    CountryEntry { code: "TR", name: "Turkey", aliases: &["turkey", "turquie", "turkei", "turquia"], dialing: "90" },
    CountryEntry { code: "RU", name: "Russia", aliases: &["russia", "russian federation", "russie", "russland", "rusia"], dialing: "7" },
    CountryEntry { code: "UA", name: "Ukraine", aliases: &["ukraine", "ucrania"], dialing: "380" },
    CountryEntry { code: "MA", name: "Morocco", aliases: &["morocco", "maroc", "marokko", "marruecos"], dialing: "212" },
    CountryEntry { code: "DZ", name: "Algeria", aliases: &["algeria", "algerie", "algerien", "argelia"], dialing: "213" },
    CountryEntry { code: "TN", name: "Tunisia", aliases: &["tunisia", "tunisie", "tunesien", "tunez"], dialing: "216" },
    CountryEntry { code: "SN", name: "Senegal", aliases: &["senegal"], dialing: "221" },
    CountryEntry { code: "CI", name: "Ivory Coast", aliases: &["ivory coast", "cote d'ivoire", "cote divoire"], dialing: "225" },
    CountryEntry { code: "CM", name: "Cameroon", aliases: &["cameroon", "cameroun", "kamerun", "camerun"], dialing: "237" },
    CountryEntry { code: "MG", name: "Madagascar", aliases: &["madagascar"], dialing: "261" },
    CountryEntry { code: "RE", name: "Reunion", aliases: &["reunion", "la reunion"], dialing: "262" },
    CountryEntry { code: "ZA", name: "South Africa", aliases: &["south africa", "afrique du sud", "sudafrika", "sudafrica"], dialing: "27" },
    CountryEntry { code: "EG", name: "Egypt", aliases: &["egypt", "egypte", "agypten", "egipto"], dialing: "20" },
    CountryEntry { code: "IL", name: "Israel", aliases: &["israel"], dialing: "972" },
    CountryEntry { code: "JP", name: "Japan", aliases: &["japan", "japon"], dialing: "81" },
    CountryEntry { code: "CN", name: "China", aliases: &["china", "chine"], dialing: "86" },
    CountryEntry { code: "IN", name: "India", aliases: &["india", "inde", "indien"], dialing: "91" },
    CountryEntry { code: "KR", name: "South Korea", aliases: &["south korea", "coree du sud", "sudkorea", "corea del sur"], dialing: "82" },
    CountryEntry { code: "SG", name: "Singapore", aliases: &["singapore", "singapour", "singapur"], dialing: "65" },
    CountryEntry { code: "HK", name: "Hong Kong", aliases: &["hong kong"], dialing: "852" },
    CountryEntry { code: "NZ", name: "New Zealand", aliases: &["new zealand", "nouvelle zelande", "neuseeland", "nueva zelanda"], dialing: "64" },
    CountryEntry { code: "BR", name: "Brazil", aliases: &["brazil", "bresil", "brasilien", "brasil"], dialing: "55" },
    CountryEntry { code: "AR", name: "Argentina", aliases: &["argentina", "argentine", "argentinien"], dialing: "54" },
    CountryEntry { code: "MX", name: "Mexico", aliases: &["mexico", "mexique", "mexiko"], dialing: "52" },
    CountryEntry { code: "CL", name: "Chile", aliases: &["chile", "chili"], dialing: "56" },
];

static US_STATES: &[StateEntry] = &[
    StateEntry { code: "AL", name: "Alabama", aliases: &["alabama"] },
    StateEntry { code: "AK", name: "Alaska", aliases: &["alaska"] },
    StateEntry { code: "AZ", name: "Arizona", aliases: &["arizona"] },
    StateEntry { code: "AR", name: "Arkansas", aliases: &["arkansas"] },
    StateEntry { code: "CA", name: "California", aliases: &["california", "californie"] },
    StateEntry { code: "CO", name: "Colorado", aliases: &["colorado"] },
    StateEntry { code: "CT", name: "Connecticut", aliases: &["connecticut"] },
    StateEntry { code: "DE", name: "Delaware", aliases: &["delaware"] },
    StateEntry { code: "DC", name: "District of Columbia", aliases: &["district of columbia", "washington dc"] },
    StateEntry { code: "FL", name: "Florida", aliases: &["florida", "floride"] },
    StateEntry { code: "GA", name: "Georgia", aliases: &["georgia", "georgie"] },
    StateEntry { code: "HI", name: "Hawaii", aliases: &["hawaii"] },
    StateEntry { code: "ID", name: "Idaho", aliases: &["idaho"] },
    StateEntry { code: "IL", name: "Illinois", aliases: &["illinois"] },
    StateEntry { code: "IN", name: "Indiana", aliases: &["indiana"] },
    StateEntry { code: "IA", name: "Iowa", aliases: &["iowa"] },
    StateEntry { code: "KS", name: "Kansas", aliases: &["kansas"] },
    StateEntry { code: "KY", name: "Kentucky", aliases: &["kentucky"] },
    StateEntry { code: "LA", name: "Louisiana", aliases: &["louisiana", "louisiane"] },
    StateEntry { code: "ME", name: "Maine", aliases: &["maine"] },
    StateEntry { code: "MD", name: "Maryland", aliases: &["maryland"] },
    StateEntry { code: "MA", name: "Massachusetts", aliases: &["massachusetts"] },
    StateEntry { code: "MI", name: "Michigan", aliases: &["michigan"] },
    StateEntry { code: "MN", name: "Minnesota", aliases: &["minnesota"] },
    StateEntry { code: "MS", name: "Mississippi", aliases: &["mississippi"] },
    StateEntry { code: "MO", name: "Missouri", aliases: &["missouri"] },
    StateEntry { code: "MT", name: "Montana", aliases: &["montana"] },
    StateEntry { code: "NE", name: "Nebraska", aliases: &["nebraska"] },
    StateEntry { code: "NV", name: "Nevada", aliases: &["nevada"] },
    StateEntry { code: "NH", name: "New Hampshire", aliases: &["new hampshire"] },
    StateEntry { code: "NJ", name: "New Jersey", aliases: &["new jersey"] },
    StateEntry { code: "NM", name: "New Mexico", aliases: &["new mexico", "nouveau mexique"] },
    StateEntry { code: "NY", name: "New York", aliases: &["new york"] },
    StateEntry { code: "NC", name: "North Carolina", aliases: &["north carolina", "caroline du nord"] },
    StateEntry { code: "ND", name: "North Dakota", aliases: &["north dakota", "dakota du nord"] },
    StateEntry { code: "OH", name: "Ohio", aliases: &["ohio"] },
    StateEntry { code: "OK", name: "Oklahoma", aliases: &["oklahoma"] },
    StateEntry { code: "OR", name: "Oregon", aliases: &["oregon"] },
    StateEntry { code: "PA", name: "Pennsylvania", aliases: &["pennsylvania", "pennsylvanie"] },
    StateEntry { code: "RI", name: "Rhode Island", aliases: &["rhode island"] },
    StateEntry { code: "SC", name: "South Carolina", aliases: &["south carolina", "caroline du sud"] },
    StateEntry { code: "SD", name: "South Dakota", aliases: &["south dakota", "dakota du sud"] },
    StateEntry { code: "TN", name: "Tennessee", aliases: &["tennessee"] },
    StateEntry { code: "TX", name: "Texas", aliases: &["texas"] },
    StateEntry { code: "UT", name: "Utah", aliases: &["utah"] },
    StateEntry { code: "VT", name: "Vermont", aliases: &["vermont"] },
    // West Virginia sits before Virginia: the first match wins and the
    // bare "virginia" alias would otherwise shadow it.
    StateEntry { code: "WV", name: "West Virginia", aliases: &["west virginia", "virginie occidentale"] },
    StateEntry { code: "VA", name: "Virginia", aliases: &["virginia", "virginie"] },
    StateEntry { code: "WA", name: "Washington", aliases: &["washington"] },
    StateEntry { code: "WI", name: "Wisconsin", aliases: &["wisconsin"] },
    StateEntry { code: "WY", name: "Wyoming", aliases: &["wyoming"] },
];

static CA_PROVINCES: &[StateEntry] = &[
    StateEntry { code: "AB", name: "Alberta", aliases: &["alberta"] },
    StateEntry { code: "BC", name: "British Columbia", aliases: &["british columbia", "colombie britannique"] },
    StateEntry { code: "MB", name: "Manitoba", aliases: &["manitoba"] },
    StateEntry { code: "NB", name: "New Brunswick", aliases: &["new brunswick", "nouveau brunswick"] },
    StateEntry { code: "NL", name: "Newfoundland and Labrador", aliases: &["newfoundland and labrador", "newfoundland", "terre neuve et labrador", "terre neuve"] },
    StateEntry { code: "NS", name: "Nova Scotia", aliases: &["nova scotia", "nouvelle ecosse"] },
    StateEntry { code: "NT", name: "Northwest Territories", aliases: &["northwest territories", "territoires du nord ouest"] },
    StateEntry { code: "NU", name: "Nunavut", aliases: &["nunavut"] },
    StateEntry { code: "ON", name: "Ontario", aliases: &["ontario"] },
    StateEntry { code: "PE", name: "Prince Edward Island", aliases: &["prince edward island", "ile du prince edouard"] },
    StateEntry { code: "QC", name: "Quebec", aliases: &["quebec"] },
    StateEntry { code: "SK", name: "Saskatchewan", aliases: &["saskatchewan"] },
    StateEntry { code: "YT", name: "Yukon", aliases: &["yukon"] },
];

static AU_STATES: &[StateEntry] = &[
    StateEntry { code: "ACT", name: "Australian Capital Territory", aliases: &["australian capital territory"] },
    StateEntry { code: "NSW", name: "New South Wales", aliases: &["new south wales", "nouvelle galles du sud"] },
    StateEntry { code: "NT", name: "Northern Territory", aliases: &["northern territory", "territoire du nord"] },
    StateEntry { code: "QLD", name: "Queensland", aliases: &["queensland"] },
    StateEntry { code: "SA", name: "South Australia", aliases: &["south australia", "australie meridionale"] },
    StateEntry { code: "TAS", name: "Tasmania", aliases: &["tasmania", "tasmanie"] },
    StateEntry { code: "VIC", name: "Victoria", aliases: &["victoria"] },
    StateEntry { code: "WA", name: "Western Australia", aliases: &["western australia", "australie occidentale"] },
];

static STATE_TABLES: &[(&str, &[StateEntry])] =
    &[("US", US_STATES), ("CA", CA_PROVINCES), ("AU", AU_STATES)];

/// How `first_match` compares input against a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Case-insensitive equality against the canonical code.
    Exact,
    /// Whole-word, case-insensitive match against the alias set.
    WholeWord,
}

/// One table entry with its alias patterns pre-compiled for whole-word
/// matching.
pub struct AliasMatcher {
    code: &'static str,
    patterns: Vec<Regex>,
}

impl AliasMatcher {
    fn new(code: &'static str, aliases: &'static [&'static str]) -> Self {
        let patterns = aliases
            .iter()
            .map(|alias| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(alias)))
                    .expect("static alias pattern")
            })
            .collect();
        Self { code, patterns }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

/// First code in `matchers` that matches `input` under `policy`, in table
/// iteration order.
pub fn first_match(
    matchers: &[AliasMatcher],
    input: &str,
    policy: MatchPolicy,
) -> Option<&'static str> {
    match policy {
        MatchPolicy::Exact => matchers
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(input))
            .map(AliasMatcher::code),
        MatchPolicy::WholeWord => matchers
            .iter()
            .find(|m| m.patterns.iter().any(|p| p.is_match(input)))
            .map(AliasMatcher::code),
    }
}

static COUNTRY_MATCHERS: Lazy<Vec<AliasMatcher>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .map(|c| AliasMatcher::new(c.code, c.aliases))
        .collect()
});

static STATE_MATCHERS: Lazy<HashMap<&'static str, Vec<AliasMatcher>>> = Lazy::new(|| {
    STATE_TABLES
        .iter()
        .map(|(country, entries)| {
            let matchers = entries
                .iter()
                .map(|s| AliasMatcher::new(s.code, s.aliases))
                .collect();
            (*country, matchers)
        })
        .collect()
});

pub fn country_matchers() -> &'static [AliasMatcher] {
    &COUNTRY_MATCHERS
}

pub fn state_matchers(country: &str) -> Option<&'static [AliasMatcher]> {
    STATE_MATCHERS
        .get(country.to_ascii_uppercase().as_str())
        .map(Vec::as_slice)
}

pub fn country_entry(code: &str) -> Option<&'static CountryEntry> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

pub fn dialing_prefix(code: &str) -> Option<&'static str> {
    country_entry(code).map(|c| c.dialing)
}

pub fn states_for(country: &str) -> Option<&'static [StateEntry]> {
    STATE_TABLES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(country))
        .map(|(_, entries)| *entries)
}

/// Registered display name for a state code, scoped to a country.
pub fn state_display_name(country: &str, state_code: &str) -> Option<&'static str> {
    states_for(country)?
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(state_code))
        .map(|s| s.name)
}
