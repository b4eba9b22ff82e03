//! Literal values shared with the front-end.
//! The names match the keys the front-end imports, so `GST` here is `GST` there.

/// Goods and services tax, in percent.
pub const GST: i64 = 10;

// app and model labels
pub const PARKPASSES_APP_LABEL: &str = "parkpasses";
pub const PARKPASSES_MODELS_USERACTION: &str = "useraction";
pub const PARKPASSES_MODELS_PASS: &str = "pass";
pub const PARKPASSES_MODELS_DISCOUNT_CODE_BATCH: &str = "discountcodebatch";
pub const PARKPASSES_MODELS_PRICING_WINDOW: &str = "passtypepricingwindow";

pub const PARKPASSES_DEFAULT_PRICING_WINDOW_NAME: &str = "Default";

pub const TITLE_SUFFIX: &str =
    " - Park Passes - Department of Biodiversity, Conservation and Attractions";

// pass types
pub const DAY_ENTRY_PASS_NAME: &str = "DAY_ENTRY_PASS";
pub const HOLIDAY_PASS_NAME: &str = "HOLIDAY_PASS";
pub const PINJAR_PASS_NAME: &str = "PINJAR_OFF_ROAD_VEHICLE_AREA_ANNUAL_PASS";
pub const PERSONNEL_PASS_NAME: &str = "PERSONNEL_PASS";
pub const GOLD_STAR_PASS_NAME: &str = "GOLD_STAR_PASS";
pub const ANNUAL_LOCAL_PASS_NAME: &str = "ANNUAL_LOCAL_PASS";

pub const DEFAULT_SOLD_VIA: &str = "Department of Biodiversity, Conservation and Attractions";

pub const PICA_LABEL: &str = "PICA (Online Sales)";

/// Kept as a string; the front-end concatenates it into queries.
pub const PASS_REMINDER_DAYS_PRIOR: &str = "7";

// statuses
pub const PASS_PROCESSING_STATUS_CANCELLED: &str = "CA";
pub const PASS_STATUS_EXPIRED: &str = "Expired";
pub const DISCOUNT_CODE_BATCH_STATUS_INVALIDATED: &str = "Invalidated";

pub const DATATABLE_PROCESSING_HTML: &str = r#"<div class="spinner-border org-primary align-items-center" style="width: 3rem; height: 3rem; margin-top:45px;" role="status"><span class="visually-hidden">Loading...</span></div>"#;

pub const PARK_PASSES_SUPPORT_EMAIL: &str = "park.passes@dbca.wa.gov.au";

/// User-facing error messages.
///
/// `SYSTEM` is not stored here: it depends on the support email and is produced by
/// [`crate::system_error_message`].
pub mod errors {
    pub const NETWORK: &str =
        "NETWORK ERROR: Make sure your internet connection is working and try again.";

    /// Prefix of the `SYSTEM` message; the support email follows it directly.
    pub const SYSTEM_TEMPLATE: &str = "SYSTEM ERROR: An error has occured accessing the Park Passes API. Please try again in an hour and if the problem persists contact us at: ";

    /// Shown when the backend reports a failure that needs the system administrators.
    pub const CRITICAL: &str =
        "SYSTEM ERROR: Our System Administrators have been notified. Please try again in an hour.";
}
