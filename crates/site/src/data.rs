//! Static demo datasets.
//!
//! In-memory lists backing the demo pages. These stand in for a real data
//! source; nothing here is persisted or fetched.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Appointment lifecycle state shown on the card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Scheduled,
    Pending,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Pending => "Pending",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub doctor: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Date formatted for display, e.g. `Feb 25, 2024`.
    pub fn date_display(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }

    /// Time formatted for display, e.g. `10:00 AM`.
    pub fn time_display(&self) -> String {
        self.time.format("%l:%M %p").to_string().trim_start().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
    pub rating: String,
    pub reviews: u32,
    pub experience: String,
    pub avatar: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub quantity: String,
    pub price_cents: u32,
    pub icon: String,
    pub in_stock: bool,
}

impl Medication {
    /// Price formatted for display, e.g. `$15.99`.
    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub title: String,
    pub value: String,
    pub unit: String,
    pub badge: String,
    pub description: String,
    pub indicator: String,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static date is valid")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("static time is valid")
}

fn appointment(
    doctor: &str,
    specialty: &str,
    when: (NaiveDate, NaiveTime),
    location: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        doctor: doctor.to_string(),
        specialty: specialty.to_string(),
        date: when.0,
        time: when.1,
        location: location.to_string(),
        status,
    }
}

/// Upcoming appointments.
pub fn appointments() -> Vec<Appointment> {
    vec![
        appointment(
            "Dr. Sarah Johnson",
            "Cardiology",
            (date(2024, 2, 25), time(10, 0)),
            "Clinic A, Room 101",
            AppointmentStatus::Confirmed,
        ),
        appointment(
            "Dr. Michael Chen",
            "Neurology",
            (date(2024, 3, 5), time(14, 30)),
            "Clinic B, Room 205",
            AppointmentStatus::Scheduled,
        ),
        appointment(
            "Dr. Emily Rodriguez",
            "Dermatology",
            (date(2024, 3, 12), time(11, 0)),
            "Clinic C, Room 103",
            AppointmentStatus::Pending,
        ),
    ]
}

fn doctor(
    name: &str,
    specialty: &str,
    rating: &str,
    reviews: u32,
    years: u32,
    avatar: &str,
    bio: &str,
) -> Doctor {
    Doctor {
        name: name.to_string(),
        specialty: specialty.to_string(),
        rating: rating.to_string(),
        reviews,
        experience: format!("{years} years of experience"),
        avatar: avatar.to_string(),
        bio: bio.to_string(),
    }
}

/// The doctor directory.
pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "Dr. Sarah Johnson",
            "Cardiology",
            "★★★★★",
            248,
            15,
            "👩‍⚕️",
            "Specialist in heart diseases and cardiovascular treatment",
        ),
        doctor(
            "Dr. Michael Chen",
            "Neurology",
            "★★★★★",
            186,
            12,
            "👨‍⚕️",
            "Expert in neurological disorders and treatment",
        ),
        doctor(
            "Dr. Emily Rodriguez",
            "Dermatology",
            "★★★★☆",
            342,
            10,
            "👩‍⚕️",
            "Specialized in skin care and cosmetic dermatology",
        ),
        doctor(
            "Dr. James Wilson",
            "Orthopedics",
            "★★★★★",
            215,
            18,
            "👨‍⚕️",
            "Expert in bone and joint disorders",
        ),
        doctor(
            "Dr. Lisa Anderson",
            "Pediatrics",
            "★★★★★",
            289,
            14,
            "👩‍⚕️",
            "Dedicated to children's health and wellness",
        ),
        doctor(
            "Dr. David Kumar",
            "General Medicine",
            "★★★★☆",
            421,
            20,
            "👨‍⚕️",
            "Primary healthcare and general medical consultation",
        ),
    ]
}

fn medication(
    name: &str,
    dosage: &str,
    frequency: &str,
    quantity: &str,
    price_cents: u32,
    icon: &str,
    in_stock: bool,
) -> Medication {
    Medication {
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        quantity: quantity.to_string(),
        price_cents,
        icon: icon.to_string(),
        in_stock,
    }
}

/// The pharmacy catalogue.
pub fn medications() -> Vec<Medication> {
    vec![
        medication("Lisinopril", "10mg", "Once daily", "30 tablets", 1599, "💊", true),
        medication("Atorvastatin", "20mg", "Once at bedtime", "30 tablets", 2250, "💊", true),
        medication("Metformin", "500mg", "Twice daily", "60 tablets", 1299, "💊", true),
        medication("Ibuprofen", "200mg", "As needed", "50 tablets", 899, "💊", true),
        medication("Amoxicillin", "500mg", "Three times daily", "21 capsules", 1850, "💊", false),
        medication("Vitamin D3", "2000 IU", "Once daily", "60 capsules", 1099, "🔶", true),
    ]
}

fn metric(
    title: &str,
    value: &str,
    unit: &str,
    badge: &str,
    description: &str,
    indicator: &str,
) -> HealthMetric {
    HealthMetric {
        title: title.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        badge: badge.to_string(),
        description: description.to_string(),
        indicator: indicator.to_string(),
    }
}

/// Dashboard health metrics.
pub fn metrics() -> Vec<HealthMetric> {
    vec![
        metric(
            "Blood Pressure",
            "120/80",
            "mmHg",
            "NORMAL",
            "Last measured: 2 hours ago",
            "Healthy Range",
        ),
        metric("Heart Rate", "72", "bpm", "GOOD", "Resting heart rate", "Normal Range"),
        metric(
            "BMI",
            "24.5",
            "kg/m²",
            "HEALTHY",
            "Weight: 75kg, Height: 175cm",
            "Healthy Weight",
        ),
        metric(
            "Blood Glucose",
            "95",
            "mg/dL",
            "NORMAL",
            "Fasting glucose level",
            "Healthy Level",
        ),
        metric(
            "Sleep Duration",
            "7.5",
            "hours",
            "GOOD",
            "Last night's sleep",
            "Optimal Sleep",
        ),
        metric(
            "Stress Level",
            "4/10",
            "scale",
            "LOW",
            "Current stress level",
            "Well Managed",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_display_formats() {
        let appts = appointments();
        assert_eq!(appts[0].date_display(), "Feb 25, 2024");
        assert_eq!(appts[0].time_display(), "10:00 AM");
        assert_eq!(appts[1].time_display(), "2:30 PM");
    }

    #[test]
    fn medication_price_display() {
        let meds = medications();
        assert_eq!(meds[0].price_display(), "$15.99");
        assert_eq!(meds[3].price_display(), "$8.99");
    }

    #[test]
    fn datasets_are_non_empty() {
        assert_eq!(doctors().len(), 6);
        assert_eq!(appointments().len(), 3);
        assert_eq!(medications().len(), 6);
        assert_eq!(metrics().len(), 6);
    }
}
