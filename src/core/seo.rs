//! Search engine metadata
//!
//! Page title, description and the schema.org `Organization` record that the
//! landing page embeds as JSON-LD.

use serde::Serialize;

use crate::core::content::{BRAND_NAME, CONTACT_EMAIL, LEGAL_NAME, SITE_URL};

pub const PAGE_TITLE: &str = "Grupo Alborvia | Global Trading & Logistics";

pub const PAGE_DESCRIPTION: &str = "Uniendo la riqueza natural de México con la tecnología del futuro. \
     Trading global, expansión internacional y logística 4.0 con inteligencia artificial.";

/// schema.org `Organization`
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    #[serde(rename = "legalName")]
    pub legal_name: &'static str,
    pub url: &'static str,
    pub email: &'static str,
    pub description: &'static str,
    #[serde(rename = "areaServed")]
    pub area_served: Vec<&'static str>,
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            context: "https://schema.org",
            kind: "Organization",
            name: BRAND_NAME,
            legal_name: LEGAL_NAME,
            url: SITE_URL,
            email: CONTACT_EMAIL,
            description: PAGE_DESCRIPTION,
            area_served: vec!["MX", "US"],
        }
    }
}

impl Organization {
    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
