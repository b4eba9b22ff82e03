//! The constants registry.
//! Built once, shared through an `Arc`, never mutated afterwards.

use crate::constants::{self, errors};
use crate::error::{ConstantsError, ConstantsErrorExt, Result};
use crate::key::{ConstantKey, ErrorKind};
use crate::value::ConstantValue;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};
use strum::IntoEnumIterator;
use tracing::{debug, trace, warn};

static GLOBAL: LazyLock<ConstantsRegistry> = LazyLock::new(ConstantsRegistry::new);

/// Builds the `SYSTEM` error message for the given support email.
///
/// ```rust
/// use parkpasses_constants::system_error_message;
///
/// assert!(system_error_message("help@example.org").ends_with("contact us at: help@example.org"));
/// ```
#[must_use]
pub fn system_error_message(support_email: &str) -> String {
    format!("{}{support_email}", errors::SYSTEM_TEMPLATE)
}

/// Overrides applied on top of the built-in values.
///
/// Keys are uppercased on deserialization, so `gst` and `GST` name the same override; a
/// source spelling one key twice is rejected.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    #[serde(deserialize_with = "uppercase_keys")]
    pub overrides: BTreeMap<String, ConstantValue>,
}

impl RegistryConfig {
    /// Layers `other` on top of `self`; its overrides win.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.overrides.extend(other.overrides);
        self
    }
}

fn uppercase_keys<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, ConstantValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, ConstantValue>::deserialize(deserializer)?;
    let mut overrides = BTreeMap::new();
    for (key, value) in raw {
        let upper = key.to_ascii_uppercase();
        if overrides.contains_key(&upper) {
            return Err(de::Error::custom(format!("duplicate override for {upper}")));
        }
        overrides.insert(upper, value);
    }
    Ok(overrides)
}

#[derive(Debug)]
struct RegistryInner {
    // indexed by `ConstantKey as usize`
    entries: Vec<ConstantValue>,
}

/// Immutable mapping from [`ConstantKey`] to [`ConstantValue`], plus the `ERRORS` group.
///
/// Cloning is cheap; clones share the same entries.
#[derive(Debug, Clone)]
pub struct ConstantsRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for ConstantsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantsRegistry {
    /// A registry holding the built-in values.
    #[must_use]
    pub fn new() -> Self {
        Self::from_entries(ConstantKey::iter().map(default_value).collect())
    }

    /// The process-wide registry with the built-in values.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    #[must_use = "The builder must be built to produce a registry."]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    fn from_entries(entries: Vec<ConstantValue>) -> Self {
        Self { inner: Arc::new(RegistryInner { entries }) }
    }

    /// Looks up an entry by its front-end name.
    ///
    /// Flat entries are borrowed; `ERRORS` resolves to a [`ConstantValue::Group`] built at
    /// call time, so its `SYSTEM` message reflects the current support email.
    ///
    /// # Errors
    /// Returns [`ConstantsError::UnknownKey`] if `key` names no entry.
    pub fn get(&self, key: &str) -> Result<Cow<'_, ConstantValue>> {
        if key == ConstantKey::ERRORS {
            trace!(key, "error group lookup");
            return Ok(Cow::Owned(ConstantValue::Group(self.errors())));
        }
        let parsed = ConstantKey::from_str(key)
            .map_err(|_| ConstantsError::unknown_key(key.to_owned()))?;
        trace!(key, "constant lookup");
        Ok(Cow::Borrowed(self.value(parsed)))
    }

    /// Typed lookup; every key has a value.
    #[must_use]
    pub fn value(&self, key: ConstantKey) -> &ConstantValue {
        &self.inner.entries[key as usize]
    }

    /// Looks up an error message by its name in the `ERRORS` group.
    ///
    /// # Errors
    /// Returns [`ConstantsError::UnknownKey`] for anything other than `NETWORK`, `SYSTEM`
    /// or `CRITICAL`.
    pub fn get_error(&self, kind: &str) -> Result<Cow<'static, str>> {
        let parsed = ErrorKind::from_str(kind)
            .map_err(|_| ConstantsError::unknown_key(kind.to_owned()))
            .context(ConstantKey::ERRORS)?;
        trace!(kind, "error message lookup");
        Ok(self.error(parsed))
    }

    /// The message for `kind`. `SYSTEM` is rebuilt from the current support email on every call.
    #[must_use]
    pub fn error(&self, kind: ErrorKind) -> Cow<'static, str> {
        match kind {
            ErrorKind::Network => Cow::Borrowed(errors::NETWORK),
            ErrorKind::System => Cow::Owned(system_error_message(self.support_email())),
            ErrorKind::Critical => Cow::Borrowed(errors::CRITICAL),
        }
    }

    /// The resolved `ERRORS` group.
    #[must_use]
    pub fn errors(&self) -> BTreeMap<ErrorKind, Cow<'static, str>> {
        ErrorKind::iter().map(|kind| (kind, self.error(kind))).collect()
    }

    #[must_use]
    pub fn support_email(&self) -> &str {
        self.value(ConstantKey::ParkPassesSupportEmail)
            .as_str()
            .unwrap_or(constants::PARK_PASSES_SUPPORT_EMAIL)
    }

    #[must_use]
    pub fn gst(&self) -> i64 {
        self.value(ConstantKey::Gst).as_int().unwrap_or(constants::GST)
    }

    /// Flat entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ConstantKey, &ConstantValue)> {
        ConstantKey::iter().map(|key| (key, self.value(key)))
    }

    /// Serializes the registry in the shape the front-end imports: flat keys followed by
    /// the nested `ERRORS` object.
    ///
    /// # Errors
    /// Returns [`ConstantsError::Serialize`] if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json =
            if pretty { serde_json::to_string_pretty(self) } else { serde_json::to_string(self) };
        json.context("Exporting constants")
    }
}

impl Serialize for ConstantsRegistry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.inner.entries.len() + 1))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.serialize_entry(ConstantKey::ERRORS, &self.errors())?;
        map.end()
    }
}

/// Applies overrides to the built-in values before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    overrides: Vec<(String, ConstantValue)>,
}

impl RegistryBuilder {
    /// Replaces one flat entry. Later overrides of the same key win.
    #[must_use = "The builder must be built to produce a registry."]
    pub fn override_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<ConstantValue>,
    ) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Shorthand for overriding `PARK_PASSES_SUPPORT_EMAIL`.
    #[must_use = "The builder must be built to produce a registry."]
    pub fn support_email(self, email: impl Into<String>) -> Self {
        self.override_value(ConstantKey::ParkPassesSupportEmail.as_str(), email.into())
    }

    /// Queues every override from `config`.
    #[must_use = "The builder must be built to produce a registry."]
    pub fn config(mut self, config: &RegistryConfig) -> Self {
        self.overrides.extend(config.overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Freezes the registry.
    ///
    /// # Errors
    /// Returns [`ConstantsError::UnknownKey`] if an override names no flat entry and
    /// [`ConstantsError::TypeMismatch`] if it cannot be expressed in the entry's type.
    pub fn build(self) -> Result<ConstantsRegistry> {
        let mut entries: Vec<ConstantValue> = ConstantKey::iter().map(default_value).collect();

        for (raw_key, value) in self.overrides {
            let Ok(key) = ConstantKey::from_str(&raw_key.to_ascii_uppercase()) else {
                warn!(key = %raw_key, "rejected override for unknown constant");
                return Err(ConstantsError::UnknownKey {
                    key: raw_key.into(),
                    context: Some("Applying override".into()),
                });
            };
            let slot = &mut entries[key as usize];
            let found = value.type_name();
            let Some(value) = coerce(value, slot) else {
                warn!(%key, "rejected override with mismatched type");
                return Err(ConstantsError::TypeMismatch {
                    key: Cow::Borrowed(key.as_str()),
                    expected: slot.type_name(),
                    found,
                    context: Some("Applying override".into()),
                });
            };
            debug!(%key, %value, "constant overridden");
            *slot = value;
        }

        Ok(ConstantsRegistry::from_entries(entries))
    }
}

// Environment overlays deliver every value as text, so numeric strings are accepted for
// integer entries and integers are accepted for string entries.
fn coerce(value: ConstantValue, current: &ConstantValue) -> Option<ConstantValue> {
    if value.same_type(current) {
        return Some(value);
    }
    match value {
        ConstantValue::Integer(v) => Some(ConstantValue::from(v.to_string())),
        ConstantValue::Text(v) => v.trim().parse::<i64>().ok().map(ConstantValue::Integer),
        ConstantValue::Group(_) => None,
    }
}

const fn default_value(key: ConstantKey) -> ConstantValue {
    use ConstantKey as K;

    let text = match key {
        K::Gst => return ConstantValue::Integer(constants::GST),
        K::ParkpassesAppLabel => constants::PARKPASSES_APP_LABEL,
        K::ParkpassesModelsUseraction => constants::PARKPASSES_MODELS_USERACTION,
        K::ParkpassesModelsPass => constants::PARKPASSES_MODELS_PASS,
        K::ParkpassesModelsDiscountCodeBatch => constants::PARKPASSES_MODELS_DISCOUNT_CODE_BATCH,
        K::ParkpassesModelsPricingWindow => constants::PARKPASSES_MODELS_PRICING_WINDOW,
        K::ParkpassesDefaultPricingWindowName => constants::PARKPASSES_DEFAULT_PRICING_WINDOW_NAME,
        K::TitleSuffix => constants::TITLE_SUFFIX,
        K::DayEntryPassName => constants::DAY_ENTRY_PASS_NAME,
        K::HolidayPassName => constants::HOLIDAY_PASS_NAME,
        K::PinjarPassName => constants::PINJAR_PASS_NAME,
        K::PersonnelPassName => constants::PERSONNEL_PASS_NAME,
        K::GoldStarPassName => constants::GOLD_STAR_PASS_NAME,
        K::AnnualLocalPassName => constants::ANNUAL_LOCAL_PASS_NAME,
        K::DefaultSoldVia => constants::DEFAULT_SOLD_VIA,
        K::PicaLabel => constants::PICA_LABEL,
        K::PassReminderDaysPrior => constants::PASS_REMINDER_DAYS_PRIOR,
        K::PassProcessingStatusCancelled => constants::PASS_PROCESSING_STATUS_CANCELLED,
        K::PassStatusExpired => constants::PASS_STATUS_EXPIRED,
        K::DiscountCodeBatchStatusInvalidated => constants::DISCOUNT_CODE_BATCH_STATUS_INVALIDATED,
        K::DatatableProcessingHtml => constants::DATATABLE_PROCESSING_HTML,
        K::ParkPassesSupportEmail => constants::PARK_PASSES_SUPPORT_EMAIL,
    };
    ConstantValue::Text(Cow::Borrowed(text))
}
