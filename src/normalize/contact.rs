use crate::normalize::{normalize_country, normalize_phone, normalize_state};
use crate::tables;
use crate::text;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Individual vs. organization contact classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyForm {
    Ind,
    Org,
}

impl BodyForm {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Ind => "IND",
            Self::Org => "ORG",
        }
    }
}

/// Response language accepted by the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// "fr" in any casing selects French; everything else, including
    /// unrecognized values, falls back to English.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("fr") => Self::Fr,
            _ => Self::En,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

/// Free-text contact fields exactly as supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContact {
    pub first_name: String,
    pub last_name: String,
    /// Organization name; non-empty marks the contact as an organization.
    pub organisation: String,
    pub address1: String,
    pub address2: String,
    pub zip: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    /// "en" or "fr"; anything else defaults to English.
    pub language: Option<String>,
    pub is_owner: bool,
    pub trademark_number: Option<String>,
    pub company_number: Option<String>,
    pub vat_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_city: Option<String>,
    /// Free-form key/value data passed through to the remote side.
    #[serde(default)]
    pub additional: HashMap<String, String>,
}

/// A contact whose every field has passed through the relevant normalizer,
/// ready to be marshaled into a remote operation argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedContact {
    pub first_name: String,
    pub last_name: String,
    pub organisation: String,
    pub address1: String,
    pub address2: String,
    pub zip: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub body_form: BodyForm,
    pub language: Language,
    pub is_owner: bool,
    pub trademark_number: Option<String>,
    pub company_number: Option<String>,
    pub vat_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_city: Option<String>,
    pub additional: HashMap<String, String>,
}

impl NormalizedContact {
    /// Builds a normalized contact from raw caller input.
    ///
    /// The country is resolved first since state and phone normalization
    /// depend on it; `default_country` fills in only when the raw country
    /// field is blank.
    pub fn from_raw(raw: &RawContact, default_country: Option<&str>) -> Self {
        let country_input = if raw.country.trim().is_empty() {
            default_country.unwrap_or("")
        } else {
            raw.country.as_str()
        };
        let country = normalize_country(country_input);

        let organisation = text::cleanup(raw.organisation.trim());
        let body_form = if organisation.is_empty() {
            BodyForm::Ind
        } else {
            BodyForm::Org
        };

        Self {
            first_name: text::cleanup(raw.first_name.trim()),
            last_name: text::cleanup(raw.last_name.trim()),
            organisation,
            address1: text::cleanup(raw.address1.trim()),
            address2: text::cleanup(raw.address2.trim()),
            zip: raw.zip.trim().to_string(),
            city: text::cleanup(raw.city.trim()),
            state: normalize_state(&raw.state, &country),
            phone: normalize_phone(&raw.phone, &country),
            fax: normalize_phone(&raw.fax, &country),
            country,
            email: raw.email.trim().to_string(),
            body_form,
            language: Language::from_raw(raw.language.as_deref()),
            is_owner: raw.is_owner,
            trademark_number: raw.trademark_number.clone(),
            company_number: raw.company_number.clone(),
            vat_number: raw.vat_number.clone(),
            birth_date: raw.birth_date,
            birth_city: raw.birth_city.as_deref().map(|c| text::cleanup(c.trim())),
            additional: raw.additional.clone(),
        }
    }

    /// Re-normalizes the phone number against this contact's country.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = normalize_phone(raw, &self.country);
    }

    /// Re-normalizes the fax number against this contact's country.
    pub fn set_fax(&mut self, raw: &str) {
        self.fax = normalize_phone(raw, &self.country);
    }

    /// Re-normalizes the state against this contact's country.
    pub fn set_state(&mut self, raw: &str) {
        self.state = normalize_state(raw, &self.country);
    }

    /// Replaces the country. Previously normalized state and phone are NOT
    /// re-normalized; callers that change the country re-set those fields
    /// themselves.
    pub fn set_country(&mut self, raw: &str) {
        self.country = normalize_country(raw);
    }

    /// Re-derives the body form after an organisation change.
    pub fn set_organisation(&mut self, raw: &str) {
        self.organisation = text::cleanup(raw.trim());
        self.body_form = if self.organisation.is_empty() {
            BodyForm::Ind
        } else {
            BodyForm::Org
        };
    }

    /// Inverse state lookup for display and export: the registered display
    /// name of the normalized state code. Phone and text transforms are not
    /// reversed.
    pub fn denormalized_state(&self) -> Option<&'static str> {
        tables::state_display_name(&self.country, &self.state)
    }

    /// Marshals the contact into the fixed wire argument order.
    pub fn to_args(&self) -> Vec<Value> {
        let optional = |field: &Option<String>| match field {
            Some(value) => Value::String(value.clone()),
            None => Value::Null,
        };

        vec![
            Value::String(self.first_name.clone()),
            Value::String(self.last_name.clone()),
            Value::String(self.body_form.as_wire().to_string()),
            Value::String(self.organisation.clone()),
            Value::String(self.address1.clone()),
            Value::String(self.address2.clone()),
            Value::String(self.zip.clone()),
            Value::String(self.state.clone()),
            Value::String(self.city.clone()),
            Value::String(self.country.clone()),
            Value::String(self.phone.clone()),
            Value::String(self.fax.clone()),
            Value::String(self.email.clone()),
            Value::String(self.language.as_wire().to_string()),
            Value::Bool(self.is_owner),
            optional(&self.trademark_number),
            optional(&self.company_number),
            optional(&self.vat_number),
            match self.birth_date {
                Some(date) => Value::String(date.format("%Y-%m-%d").to_string()),
                None => Value::Null,
            },
            optional(&self.birth_city),
            serde_json::to_value(&self.additional).unwrap_or(Value::Null),
        ]
    }
}
