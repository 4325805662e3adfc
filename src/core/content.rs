//! Static page content
//!
//! Everything the page renders that is data rather than layout lives here:
//! navigation links, backdrop shapes, service offerings, stats and brand
//! strings. All tables are immutable and ordered; components key their
//! entries by position.

use derive_more::Display;

/// Company name shown in the navbar, footer and metadata
pub const BRAND_NAME: &str = "Grupo Alborvia";

/// Legal entity name used in the copyright line
pub const LEGAL_NAME: &str = "Grupo Alborvia S.A. de C.V.";

/// Recipient of every message composed through the contact form
pub const CONTACT_EMAIL: &str = "karen@alborvia.com";

/// Office locations listed next to the contact form
pub const OFFICES: &str = "CDMX • San Francisco";

/// Public site URL, used for canonical and Open Graph tags
pub const SITE_URL: &str = "https://alborvia.com/";

/// Footer copyright line for the given calendar year
pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {LEGAL_NAME}")
}

/// Section anchors, in page order
pub mod anchors {
    pub const SERVICES: &str = "divisiones";
    pub const ABOUT: &str = "nosotros";
    pub const CONTACT: &str = "contact-form";
}

/// In-page navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Soluciones",
        href: "#divisiones",
    },
    NavLink {
        label: "Nosotros",
        href: "#nosotros",
    },
];

/// Call-to-action link shared by the navbar, hero and about sections
pub const CONTACT_HREF: &str = "#contact-form";

/// Hero link down to the services grid
pub const SERVICES_HREF: &str = "#divisiones";

/// Decorative backdrop shape
///
/// Anchors are CSS lengths; an unset anchor is left to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub width: u32,
    pub height: u32,
    pub top: Option<&'static str>,
    pub left: Option<&'static str>,
    pub right: Option<&'static str>,
    pub bottom: Option<&'static str>,
    /// Length of one animation loop in seconds
    pub duration: f64,
    pub class: &'static str,
}

impl Shape {
    /// Inline style carrying size and position
    pub fn style(&self) -> String {
        let mut style = format!("width: {}px; height: {}px;", self.width, self.height);
        let anchors = [
            ("top", self.top),
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
        ];
        for (side, value) in anchors {
            if let Some(value) = value {
                style.push_str(&format!(" {side}: {value};"));
            }
        }
        style
    }
}

const fn shape(width: u32, height: u32, duration: f64, class: &'static str) -> Shape {
    Shape {
        width,
        height,
        top: None,
        left: None,
        right: None,
        bottom: None,
        duration,
        class,
    }
}

pub const SHAPES: [Shape; 8] = [
    Shape {
        top: Some("8%"),
        left: Some("5%"),
        ..shape(120, 120, 25.0, "geo-shape geo-square")
    },
    Shape {
        top: Some("30%"),
        right: Some("-15%"),
        ..shape(400, 400, 20.0, "geo-shape geo-orb-blue")
    },
    Shape {
        bottom: Some("15%"),
        left: Some("10%"),
        ..shape(150, 150, 30.0, "geo-shape geo-triangle")
    },
    Shape {
        top: Some("25%"),
        right: Some("18%"),
        ..shape(24, 24, 12.0, "geo-shape geo-dot-gold")
    },
    Shape {
        bottom: Some("35%"),
        left: Some("35%"),
        ..shape(18, 18, 15.0, "geo-shape geo-dot-orange")
    },
    Shape {
        top: Some("60%"),
        right: Some("8%"),
        ..shape(100, 100, 35.0, "geo-shape geo-hexagon")
    },
    Shape {
        top: Some("15%"),
        right: Some("30%"),
        ..shape(80, 80, 22.0, "geo-shape geo-diamond")
    },
    Shape {
        bottom: Some("20%"),
        right: Some("25%"),
        ..shape(200, 200, 40.0, "geo-shape geo-circles")
    },
];

/// Icons the page knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Glyph {
    #[display("trending-up")]
    TrendingUp,
    #[display("globe")]
    Globe,
    #[display("cpu")]
    Cpu,
    #[display("arrow-right")]
    ArrowRight,
    #[display("menu")]
    Menu,
    #[display("x")]
    Close,
    #[display("mail")]
    Mail,
    #[display("chevron-down")]
    ChevronDown,
    #[display("send")]
    Send,
    #[display("user")]
    User,
    #[display("message-square")]
    MessageSquare,
}

/// One of the business lines shown in the services grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub accent_color: &'static str,
}

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        glyph: Glyph::TrendingUp,
        title: "Trading Global",
        description: "Gestión y arbitraje de materias primas. Conectamos recursos naturales con la demanda industrial global.",
        accent_color: "rgba(245, 158, 11, 0.15)",
    },
    ServiceOffering {
        glyph: Glyph::Globe,
        title: "Expansión Internacional",
        description: "Socio local para marcas globales. Soft-landing estratégico y cumplimiento normativo en mercados emergentes.",
        accent_color: "rgba(59, 130, 246, 0.15)",
    },
    ServiceOffering {
        glyph: Glyph::Cpu,
        title: "Logística 4.0 & AI",
        description: "Optimización de rutas y predicción de demanda mediante algoritmos avanzados de Inteligencia Artificial.",
        accent_color: "rgba(168, 85, 247, 0.15)",
    },
];

/// Headline figure in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatEntry {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [StatEntry; 4] = [
    StatEntry {
        value: "3",
        label: "Continentes",
    },
    StatEntry {
        value: "24/7",
        label: "Operaciones",
    },
    StatEntry {
        value: "10+",
        label: "Años",
    },
    StatEntry {
        value: "AI",
        label: "Tecnología",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_point_at_sections() {
        assert_eq!(NAV_LINKS[0].href, format!("#{}", anchors::SERVICES));
        assert_eq!(NAV_LINKS[1].href, format!("#{}", anchors::ABOUT));
        assert_eq!(CONTACT_HREF, format!("#{}", anchors::CONTACT));
        assert_eq!(SERVICES_HREF, NAV_LINKS[0].href);
    }

    #[test]
    fn test_copyright_notice() {
        assert_eq!(
            copyright_notice(2026),
            "© 2026 Grupo Alborvia S.A. de C.V."
        );
    }

    #[test]
    fn test_shape_style_includes_only_set_anchors() {
        let style = SHAPES[0].style();

        assert_eq!(style, "width: 120px; height: 120px; top: 8%; left: 5%;");
        assert!(!style.contains("right"));
        assert!(!style.contains("bottom"));
    }

    #[test]
    fn test_shape_style_negative_offset() {
        let style = SHAPES[1].style();

        assert!(style.contains("right: -15%;"));
        assert!(style.contains("width: 400px;"));
    }

    #[test]
    fn test_every_shape_has_a_positive_duration() {
        assert!(SHAPES.iter().all(|s| s.duration > 0.0));
        assert!(SHAPES.iter().all(|s| s.class.starts_with("geo-shape ")));
    }

    #[test]
    fn test_services_order_and_glyphs() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Trading Global", "Expansión Internacional", "Logística 4.0 & AI"]
        );

        assert_eq!(SERVICES[0].glyph, Glyph::TrendingUp);
        assert_eq!(SERVICES[1].glyph, Glyph::Globe);
        assert_eq!(SERVICES[2].glyph, Glyph::Cpu);
    }

    #[test]
    fn test_stats_table() {
        assert_eq!(STATS.len(), 4);
        assert_eq!(STATS[1], StatEntry { value: "24/7", label: "Operaciones" });
    }

    #[test]
    fn test_glyph_display_names() {
        assert_eq!(Glyph::Close.to_string(), "x");
        assert_eq!(Glyph::MessageSquare.to_string(), "message-square");
    }
}
