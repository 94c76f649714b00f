//! The seven wizard steps and their validation schemas

mod acknowledgment;
mod additional;
mod availability;
mod background;
mod contact;
mod identity;
mod physical;

pub use acknowledgment::AcknowledgmentForm;
pub use additional::AdditionalInfoForm;
pub use availability::AvailabilityForm;
pub use background::BackgroundForm;
pub use contact::ContactForm;
pub use identity::IdentityForm;
pub use physical::PhysicalForm;

use super::draft::RegistrationDraft;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Identity = 1,
    Contact = 2,
    Physical = 3,
    Background = 4,
    Availability = 5,
    AdditionalInfo = 6,
    Acknowledgment = 7,
}

impl Step {
    pub const COUNT: u8 = 7;

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Step::Identity),
            2 => Some(Step::Contact),
            3 => Some(Step::Physical),
            4 => Some(Step::Background),
            5 => Some(Step::Availability),
            6 => Some(Step::AdditionalInfo),
            7 => Some(Step::Acknowledgment),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Identity => "Player",
            Step::Contact => "Guardian & Address",
            Step::Physical => "Sizes",
            Step::Background => "Soccer Background",
            Step::Availability => "Availability",
            Step::AdditionalInfo => "Additional Info",
            Step::Acknowledgment => "Acknowledgment",
        }
    }

    pub fn all() -> [Step; 7] {
        [
            Step::Identity,
            Step::Contact,
            Step::Physical,
            Step::Background,
            Step::Availability,
            Step::AdditionalInfo,
            Step::Acknowledgment,
        ]
    }
}

/// One wizard step: a slice of the draft plus the rules it must pass
pub trait StepForm: Clone {
    const STEP: Step;

    /// Current draft values, used as the form's initial state
    fn from_draft(draft: &RegistrationDraft) -> Self;

    fn validate(&self) -> Result<(), FieldErrors>;

    /// Replace the owned slice of the draft
    fn write_to(self, draft: &mut RegistrationDraft);
}

pub const GENDER_OPTIONS: &[(&str, &str)] = &[("male", "Male"), ("female", "Female")];

pub const SIZE_OPTIONS: &[(&str, &str)] = &[
    ("YXS", "Youth XS"),
    ("YS", "Youth S"),
    ("YM", "Youth M"),
    ("YL", "Youth L"),
    ("AS", "Adult S"),
    ("AM", "Adult M"),
    ("AL", "Adult L"),
    ("AXL", "Adult XL"),
];

pub const SKILL_LEVEL_OPTIONS: &[(&str, &str)] = &[
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
];

pub const OTHER_POSITION: &str = "other";

pub const POSITION_OPTIONS: &[(&str, &str)] = &[
    ("goalkeeper", "Goalkeeper"),
    ("defender", "Defender"),
    ("midfielder", "Midfielder"),
    ("forward", "Forward"),
    (OTHER_POSITION, "Other"),
];

pub const DAY_OPTIONS: &[(&str, &str)] = &[
    ("weekdays", "Weekdays"),
    ("saturday", "Saturday"),
    ("sunday", "Sunday"),
    ("any", "Any day"),
];

pub const TIME_OPTIONS: &[(&str, &str)] = &[
    ("morning", "Morning"),
    ("afternoon", "Afternoon"),
    ("evening", "Evening"),
];
