use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Every flat key of the registry, spelled the way the front-end imports it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstantKey {
    Gst,
    ParkpassesAppLabel,
    ParkpassesModelsUseraction,
    ParkpassesModelsPass,
    ParkpassesModelsDiscountCodeBatch,
    ParkpassesModelsPricingWindow,
    ParkpassesDefaultPricingWindowName,
    TitleSuffix,
    DayEntryPassName,
    HolidayPassName,
    PinjarPassName,
    PersonnelPassName,
    GoldStarPassName,
    AnnualLocalPassName,
    DefaultSoldVia,
    PicaLabel,
    PassReminderDaysPrior,
    PassProcessingStatusCancelled,
    PassStatusExpired,
    DiscountCodeBatchStatusInvalidated,
    DatatableProcessingHtml,
    ParkPassesSupportEmail,
}

/// Keys of the nested `ERRORS` mapping.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The client could not reach the API.
    Network,
    /// The API answered with an error; derived from the support email.
    System,
    /// The backend flagged a failure for the administrators.
    Critical,
}

impl ConstantKey {
    /// Name of the nested error mapping in the export.
    pub const ERRORS: &'static str = "ERRORS";

    /// The front-end spelling of this key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ErrorKind {
    /// The front-end spelling of this key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
