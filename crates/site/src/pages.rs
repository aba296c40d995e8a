//! Page composition.
//!
//! Builds complete standalone HTML documents from the datasets and the
//! built-in cards. The ambient theme is a `:root` block declaring the custom
//! properties the card templates consume; everything else a card needs is
//! carried inside its own scoped subtree.

use crate::data;
use crate::error::SiteResult;
use cardkit_core::{escape_html, Registry};
use cardkit_cards::{appointment, doctor, indicator, medication, metric};

/// Ambient theme tokens, the only styling surface the cards inherit.
const THEME: &str = "\
:root { --primary: #3b5cc4; --accent: #008b9f; --foreground: #1a1a1a; \
--background: #f7f8fa; --card: #ffffff; --border: #e5e7eb; }";

const PAGE_STYLE: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: var(--background); \
color: var(--foreground); } \
header { background: var(--primary); color: white; padding: 32px 24px; } \
header h1 { margin: 0 0 8px; font-size: 28px; } \
header p { margin: 0; opacity: 0.9; } \
main { max-width: 1100px; margin: 0 auto; padding: 32px 24px; } \
h2 { font-size: 20px; margin: 32px 0 16px; } \
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 16px; } \
.stack { display: grid; gap: 8px; } \
nav a { color: var(--primary); font-weight: 600; margin-right: 16px; }";

fn document(title: &str, subtitle: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{THEME} {PAGE_STYLE}</style>\n</head>\n<body>\n\
         <header><h1>{title}</h1><p>{subtitle}</p></header>\n<main>\n{body}\n</main>\n\
         </body>\n</html>\n",
        title = escape_html(title),
        subtitle = escape_html(subtitle),
    )
}

/// Landing page linking to the demo pages.
pub fn index() -> String {
    let body = "\
<nav>\
<a href=\"dashboard.html\">Dashboard</a>\
<a href=\"doctors.html\">Doctors</a>\
<a href=\"pharmacy.html\">Pharmacy</a>\
</nav>";
    document("HealthCare Plus", "Your health, one place", body)
}

/// Health overview: metric cards with nested indicators, upcoming
/// appointments, current medications, and one deep composition (metric card
/// embedding a medication card embedding an indicator).
pub fn dashboard(registry: &Registry) -> SiteResult<String> {
    let mut body = String::new();

    body.push_str("<h2>Your Health Metrics</h2><div class=\"grid\">");
    for entry in data::metrics() {
        let badge = indicator::render(
            registry,
            &indicator::IndicatorParams {
                text: entry.indicator.clone(),
            },
        )?;
        let card = metric::render(
            registry,
            &metric::MetricCardParams {
                title: entry.title,
                value: entry.value,
                unit: Some(entry.unit),
                badge: Some(entry.badge),
                description: Some(entry.description),
            },
            Some(badge),
        )?;
        body.push_str(card.as_html());
    }
    body.push_str("</div>");

    body.push_str("<h2>Upcoming Appointments</h2><div class=\"stack\">");
    for entry in data::appointments() {
        let card = appointment::render(
            registry,
            &appointment::AppointmentCardParams {
                doctor: entry.doctor.clone(),
                date: entry.date_display(),
                time: entry.time_display(),
                location: entry.location.clone(),
                status: Some(entry.status.to_string()),
            },
            None,
        )?;
        body.push_str(card.as_html());
    }
    body.push_str("</div>");

    body.push_str("<h2>Current Medications</h2><div class=\"stack\">");
    for entry in data::medications().into_iter().take(2) {
        let card = medication::render(
            registry,
            &medication::MedicationCardParams {
                name: entry.name,
                dosage: entry.dosage,
                frequency: entry.frequency,
                quantity: entry.quantity,
                icon: Some(entry.icon),
            },
            None,
        )?;
        body.push_str(card.as_html());
    }
    body.push_str("</div>");

    // Deepest composition on the site: metric > medication > indicator.
    let on_track = indicator::render(
        registry,
        &indicator::IndicatorParams {
            text: "On Track".to_string(),
        },
    )?;
    let lisinopril = data::medications().into_iter().next();
    if let Some(entry) = lisinopril {
        let med_card = medication::render(
            registry,
            &medication::MedicationCardParams {
                name: entry.name,
                dosage: entry.dosage,
                frequency: entry.frequency,
                quantity: entry.quantity,
                icon: Some(entry.icon),
            },
            Some(on_track),
        )?;
        let adherence = metric::render(
            registry,
            &metric::MetricCardParams {
                title: "Medication Adherence".to_string(),
                value: "96".to_string(),
                unit: Some("%".to_string()),
                badge: Some("GOOD".to_string()),
                description: Some("Last 30 days".to_string()),
            },
            Some(med_card),
        )?;
        body.push_str("<h2>Adherence</h2>");
        body.push_str(adherence.as_html());
    }

    Ok(document(
        "Welcome Back!",
        "Here's your health overview for today",
        &body,
    ))
}

/// Doctor directory: one card per doctor, bio below each card.
pub fn doctors_directory(registry: &Registry) -> SiteResult<String> {
    let mut body = String::new();
    body.push_str("<h2>Our Doctors</h2><div class=\"grid\">");
    for entry in data::doctors() {
        let card = doctor::render(
            registry,
            &doctor::DoctorCardParams {
                name: entry.name,
                specialty: entry.specialty,
                rating: entry.rating,
                reviews: entry.reviews,
                experience: entry.experience,
                avatar: Some(entry.avatar),
            },
        )?;
        body.push_str("<div>");
        body.push_str(card.as_html());
        body.push_str(&format!("<p>{}</p>", escape_html(&entry.bio)));
        body.push_str("</div>");
    }
    body.push_str("</div>");
    Ok(document(
        "Find Your Doctor",
        "Browse our network of certified healthcare professionals",
        &body,
    ))
}

/// Pharmacy catalogue: medication cards with stock indicators and prices.
pub fn pharmacy(registry: &Registry) -> SiteResult<String> {
    let mut body = String::new();
    body.push_str("<h2>Medications</h2><div class=\"stack\">");
    for entry in data::medications() {
        let stock = if entry.in_stock {
            Some(indicator::render(
                registry,
                &indicator::IndicatorParams {
                    text: "In Stock".to_string(),
                },
            )?)
        } else {
            None
        };
        let price = entry.price_display();
        let card = medication::render(
            registry,
            &medication::MedicationCardParams {
                name: entry.name,
                dosage: entry.dosage,
                frequency: entry.frequency,
                quantity: entry.quantity,
                icon: Some(entry.icon),
            },
            stock,
        )?;
        body.push_str("<div>");
        body.push_str(card.as_html());
        body.push_str(&format!("<p>{}</p>", escape_html(&price)));
        body.push_str("</div>");
    }
    body.push_str("</div>");
    Ok(document(
        "Online Pharmacy",
        "Browse and order medications with home delivery",
        &body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardkit_cards::builtins;

    #[test]
    fn dashboard_contains_metrics_and_nesting() {
        let html = dashboard(builtins()).unwrap();
        assert!(html.contains("Blood Pressure"));
        assert!(html.contains("Healthy Range"));
        assert!(html.contains("Dr. Sarah Johnson"));
        // Deep composition: metric scope wrapping medication scope wrapping
        // indicator scope, each with its own namespace.
        assert!(html.contains("ck-metric-card"));
        assert!(html.contains("ck-medication-card"));
        assert!(html.contains("On Track"));
    }

    #[test]
    fn doctors_page_lists_every_doctor() {
        let html = doctors_directory(builtins()).unwrap();
        for entry in data::doctors() {
            assert!(html.contains(&entry.name), "missing {}", entry.name);
        }
        // Bio text passes through escaping.
        assert!(html.contains("children&#39;s health"));
    }

    #[test]
    fn pharmacy_marks_stock_and_prices() {
        let html = pharmacy(builtins()).unwrap();
        assert!(html.contains("Lisinopril"));
        assert!(html.contains("$15.99"));
        assert!(html.contains("In Stock"));
        // Amoxicillin is out of stock; no indicator follows it, but the card
        // itself is present.
        assert!(html.contains("Amoxicillin"));
    }

    #[test]
    fn pages_declare_the_ambient_theme() {
        let html = index();
        assert!(html.contains("--primary: #3b5cc4"));
        assert!(html.contains("--accent: #008b9f"));
    }
}
