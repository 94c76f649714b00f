//! Valid sample values for every step

use contracts::domain::registration::DocumentRef;

use super::draft::RegistrationDraft;
use super::steps::{
    AcknowledgmentForm, AdditionalInfoForm, AvailabilityForm, BackgroundForm, ContactForm,
    IdentityForm, PhysicalForm, StepForm,
};
use super::wizard::RegistrationWizard;

pub fn identity() -> IdentityForm {
    IdentityForm {
        full_name: "Maya Chen".to_string(),
        date_of_birth: "2013-08-21".to_string(),
        gender: "female".to_string(),
    }
}

pub fn contact() -> ContactForm {
    ContactForm {
        guardian_name: "Lin Chen".to_string(),
        phone: "(416) 555-0134".to_string(),
        email: "lin.chen@example.com".to_string(),
        address: "12 Elm St".to_string(),
        city: "Toronto".to_string(),
        province: "ON".to_string(),
        postal_code: "M4B 1B3".to_string(),
        emergency_contact_name: "Wei Chen".to_string(),
        emergency_contact_phone: "416-555-0199".to_string(),
    }
}

pub fn physical() -> PhysicalForm {
    PhysicalForm {
        height_cm: "152".to_string(),
        weight_kg: "41.5".to_string(),
        jersey_size: "YL".to_string(),
        shorts_size: "YM".to_string(),
        sock_size: "YM".to_string(),
        jacket_size: "AS".to_string(),
    }
}

pub fn background() -> BackgroundForm {
    BackgroundForm {
        skill_level: "intermediate".to_string(),
        position: "midfielder".to_string(),
        custom_position: String::new(),
    }
}

pub fn availability() -> AvailabilityForm {
    AvailabilityForm {
        day: "saturday".to_string(),
        time_of_day: "morning".to_string(),
    }
}

pub fn document(name: &str) -> DocumentRef {
    DocumentRef {
        file_name: name.to_string(),
        content_type: "image/jpeg".to_string(),
        data_base64: "/9j/4AAQSkZJRg==".to_string(),
    }
}

pub fn additional() -> AdditionalInfoForm {
    AdditionalInfoForm {
        medical_notes: "Mild asthma, carries inhaler".to_string(),
        comments: String::new(),
        photo: Some(document("photo.jpg")),
        id_card: Some(document("id-card.jpg")),
    }
}

pub fn acknowledgment() -> AcknowledgmentForm {
    AcknowledgmentForm { consent: true }
}

pub fn complete_draft() -> RegistrationDraft {
    let mut draft = RegistrationDraft::new();
    identity().write_to(&mut draft);
    contact().write_to(&mut draft);
    physical().write_to(&mut draft);
    background().write_to(&mut draft);
    availability().write_to(&mut draft);
    additional().write_to(&mut draft);
    acknowledgment().write_to(&mut draft);
    draft
}

/// A wizard walked through all seven steps with valid input
pub fn completed_wizard(division: &str) -> RegistrationWizard {
    let mut wizard = RegistrationWizard::new(division);
    wizard.submit_step(identity()).expect("identity");
    wizard.submit_step(contact()).expect("contact");
    wizard.submit_step(physical()).expect("physical");
    wizard.submit_step(background()).expect("background");
    wizard.submit_step(availability()).expect("availability");
    wizard.submit_step(additional()).expect("additional");
    wizard.submit_step(acknowledgment()).expect("acknowledgment");
    wizard
}
