//! Identity blocks attached to survey records: where the survey was taken and by whom.

use super::{FieldValue, set_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Kitchen identity used by spice and ready-to-eat surveys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenSite {
    /// Kitchen name
    pub kitchen_name: String,
    /// Kitchen address
    pub address: String,
    /// Person in charge at the kitchen
    pub person_in_charge: String,
    /// Surveying officer
    pub surveyor: String,
    /// Survey date as entered
    pub date: String,
    /// Survey time as entered
    pub time: String,
}

/// Editable fields of [`KitchenSite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitchenSiteField {
    /// `kitchen_name`
    KitchenName,
    /// `address`
    Address,
    /// `person_in_charge`
    PersonInCharge,
    /// `surveyor`
    Surveyor,
    /// `date`
    Date,
    /// `time`
    Time,
}

impl KitchenSite {
    pub(crate) fn set_field(&mut self, field: KitchenSiteField, value: FieldValue) -> Result<()> {
        match field {
            KitchenSiteField::KitchenName => set_text(&mut self.kitchen_name, "kitchen_name", value),
            KitchenSiteField::Address => set_text(&mut self.address, "address", value),
            KitchenSiteField::PersonInCharge => {
                set_text(&mut self.person_in_charge, "person_in_charge", value)
            }
            KitchenSiteField::Surveyor => set_text(&mut self.surveyor, "surveyor", value),
            KitchenSiteField::Date => set_text(&mut self.date, "date", value),
            KitchenSiteField::Time => set_text(&mut self.time, "time", value),
        }
    }
}

/// Hotel identity used by tenant and expedition surveys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelSite {
    /// Hotel name
    pub hotel_name: String,
    /// Hotel location or sector
    pub location: String,
    /// Person in charge at the hotel
    pub person_in_charge: String,
    /// Surveying officer
    pub surveyor: String,
    /// Survey date as entered
    pub date: String,
    /// Survey time as entered
    pub time: String,
}

/// Editable fields of [`HotelSite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelSiteField {
    /// `hotel_name`
    HotelName,
    /// `location`
    Location,
    /// `person_in_charge`
    PersonInCharge,
    /// `surveyor`
    Surveyor,
    /// `date`
    Date,
    /// `time`
    Time,
}

impl HotelSite {
    pub(crate) fn set_field(&mut self, field: HotelSiteField, value: FieldValue) -> Result<()> {
        match field {
            HotelSiteField::HotelName => set_text(&mut self.hotel_name, "hotel_name", value),
            HotelSiteField::Location => set_text(&mut self.location, "location", value),
            HotelSiteField::PersonInCharge => {
                set_text(&mut self.person_in_charge, "person_in_charge", value)
            }
            HotelSiteField::Surveyor => set_text(&mut self.surveyor, "surveyor", value),
            HotelSiteField::Date => set_text(&mut self.date, "date", value),
            HotelSiteField::Time => set_text(&mut self.time, "time", value),
        }
    }
}

/// Pilgrim respondent identity used by the telecom survey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Respondent {
    /// Respondent name
    pub respondent_name: String,
    /// Flight group code, e.g. `JKG-01`
    pub kloter: String,
    /// Embarkation point
    pub embarkation: String,
    /// Home province
    pub province: String,
    /// Surveying officer
    pub surveyor: String,
    /// Survey date as entered
    pub date: String,
    /// Survey time as entered
    pub time: String,
}

/// Editable fields of [`Respondent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespondentField {
    /// `respondent_name`
    RespondentName,
    /// `kloter`
    Kloter,
    /// `embarkation`
    Embarkation,
    /// `province`
    Province,
    /// `surveyor`
    Surveyor,
    /// `date`
    Date,
    /// `time`
    Time,
}

impl Respondent {
    pub(crate) fn set_field(&mut self, field: RespondentField, value: FieldValue) -> Result<()> {
        match field {
            RespondentField::RespondentName => {
                set_text(&mut self.respondent_name, "respondent_name", value)
            }
            RespondentField::Kloter => set_text(&mut self.kloter, "kloter", value),
            RespondentField::Embarkation => set_text(&mut self.embarkation, "embarkation", value),
            RespondentField::Province => set_text(&mut self.province, "province", value),
            RespondentField::Surveyor => set_text(&mut self.surveyor, "surveyor", value),
            RespondentField::Date => set_text(&mut self.date, "date", value),
            RespondentField::Time => set_text(&mut self.time, "time", value),
        }
    }
}
