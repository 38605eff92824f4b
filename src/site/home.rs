//! Home page copy and data tables.

use serde::Serialize;

use crate::motion::counter::CountUp;
use crate::widgets::orbit::{OrbitError, OrbitSelector};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeroCopy {
    pub eyebrow: &'static str,
    /// Headline lines; each animates letter by letter.
    pub headline: [&'static str; 2],
    pub call_to_action: &'static str,
    pub nav_cta: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    eyebrow: "Signature Roofing Architecture",
    headline: ["Precision-crafted", "roofing for modern estates."],
    call_to_action: "View Our Process",
    nav_cta: "Get Estimate",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeaturedProject {
    pub name: &'static str,
    pub area: &'static str,
    pub materials: &'static str,
    pub status: &'static str,
}

pub const FEATURED_PROJECT: FeaturedProject = FeaturedProject {
    name: "The Ascendant",
    area: "12,500 SQ FT",
    materials: "Slate & Zinc",
    status: "Completed 2024",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        step: "01",
        title: "Diagnostic & Vision",
        description: "We begin with an exhaustive structural analysis and aesthetic consultation. Every material limitation and architectural opportunity is mapped out before design begins.",
        image: "https://picsum.photos/seed/diagnostic/1000/800",
    },
    ProcessStep {
        step: "02",
        title: "Engineering & Procurement",
        description: "Our engineers design a bespoke membrane and structural plan. Only the highest echelon of materials, from custom-milled zinc to liquid elastomers, are procured.",
        image: "https://picsum.photos/seed/engineering/1000/800",
    },
    ProcessStep {
        step: "03",
        title: "Surgical Installation",
        description: "Execution is paramount. Our master craftsmen operate with surgical precision, ensuring weather-tight integrity without disrupting the estate's ongoing operations.",
        image: "https://picsum.photos/seed/installation/1000/800",
    },
    ProcessStep {
        step: "04",
        title: "Generational Turnover",
        description: "Upon final inspection, the system is turned over with our uncompromising warranty. The roof is not just replaced; it is architecturally elevated for generations.",
        image: "https://picsum.photos/seed/turnover/1000/800",
    },
];

/// Scroll edges for each process step: entering, centred, leaving.
pub const PROCESS_STEP_OFFSETS: [&str; 3] = ["start 80%", "center center", "end 20%"];
/// Band in which a step counts as the active one.
pub const PROCESS_ACTIVE_MARGIN: &str = "-40% 0px -40% 0px";

pub const TRUST_BADGES: [&str; 6] = [
    "Google 5-Star",
    "Yelp Verified",
    "BBB Accredited",
    "HomeAdvisor Pro",
    "Trustpilot",
    "Angie's List",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValueProp {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const VALUES: [ValueProp; 3] = [
    ValueProp {
        title: "Uncompromising Aesthetics",
        description: "We build with the absolute highest standards to ensure your property not only performs flawlessly but looks cinematic.",
        image: "https://picsum.photos/seed/aesthetics/600/450",
    },
    ValueProp {
        title: "Seamless Waterproofing",
        description: "Our liquid elastomeric membrane conforms to every detail, creating a watertight, hyper-durable shield against extreme weather.",
        image: "https://picsum.photos/seed/waterproof/600/450",
    },
    ValueProp {
        title: "Generation-Spanning Life",
        description: "Avoid expensive tear-offs. Our premium coatings add decades to your roof's lifespan, backed by uncompromising warranty options.",
        image: "https://picsum.photos/seed/longevity/600/450",
    },
];

/// `(label, detail)` for each orbit node, clockwise from the top.
pub const ORBIT_SERVICES: [(&str, &str); 5] = [
    ("Liquid Elastomers", "Seamless, monolithic rapid-cure membranes engineered for ultimate weather resistance."),
    ("Custom Fabrication", "In-house copper and zinc architectural standing seam fabrication."),
    ("Thermal Modeling", "Infrared diagnostic mapping to isolate efficiency leaks instantly."),
    ("Structural Engineering", "Comprehensive load-bearing analysis for heavy estate roofing."),
    ("Generational Warranty", "Uncompromising 25-50 year full coverage for complete peace of mind."),
];

pub fn orbit_selector() -> Result<OrbitSelector, OrbitError> {
    OrbitSelector::new(&ORBIT_SERVICES)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Expertise {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: [&'static str; 3],
}

pub const EXPERTISE: [Expertise; 3] = [
    Expertise {
        title: "Commercial Systems",
        description: "Engineered solutions for large-scale enterprise infrastructure. Utilizing advanced membrane technologies and structural integrations for maximum durability.",
        image: "https://picsum.photos/seed/commercial/900/675",
        features: ["TPO & EPDM Solutions", "Thermal Efficiency", "25-Year Warranty"],
    },
    Expertise {
        title: "Modern Estates",
        description: "Bespoke architectural roofing designed for luxury residential properties. Merging aesthetic brilliance with uncompromising weather protection.",
        image: "https://picsum.photos/seed/estates/900/675",
        features: ["Slate & Tile", "Architectural Shingles", "Custom Flashing"],
    },
    Expertise {
        title: "Metal Fabrication",
        description: "Precision-crafted custom metalwork. From standing seam roofs to intricate architectural details, our metal shop delivers perfection.",
        image: "https://picsum.photos/seed/metalwork/900/675",
        features: ["Standing Seam", "Copper Work", "Zinc Finishes"],
    },
];

pub const CALCULATOR_BENEFITS: [&str; 3] = [
    "Fully tax-deductible in year one",
    "Lower energy bills (highly reflective)",
    "Backed by uncompromising warranties",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Michael Chen",
        role: "Property Asset Manager",
        quote: "The level of precision Verrazano brought to our estate's roof replacement was unprecedented. They operate with a rare architectural sensibility.",
        rating: 5,
    },
    Testimonial {
        name: "Sarah Jenkins",
        role: "Architectural Designer",
        quote: "When specifying complex standing seam metal systems, I only trust their fabrication team. Flawless execution. Every single time.",
        rating: 5,
    },
    Testimonial {
        name: "David Ross",
        role: "Estate Owner",
        quote: "The entire process was practically invisible to us, yet the final result transformed the aesthetic of our entire property. Truly exceptional.",
        rating: 5,
    },
    Testimonial {
        name: "Elena Rostova",
        role: "Commercial Developer",
        quote: "Their ability to fuse extreme weather resilience with breathtaking modern design completely elevated our latest high-rise project.",
        rating: 5,
    },
    Testimonial {
        name: "Marcus Thorne",
        role: "Heritage Restoration",
        quote: "Restoring century-old slate requires true artisans. The Verrazano team matched the original quarry stone perfectly. A flawless integration.",
        rating: 5,
    },
    Testimonial {
        name: "Julianne Moore",
        role: "Boutique Hotelier",
        quote: "We needed a roofing system that looked like a piece of art from the penthouse suites. They delivered a copper masterpiece that will age beautifully.",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: 2500, suffix: "+", label: "Projects Completed", description: "Across residential and commercial" },
    Stat { value: 25, suffix: " Yrs", label: "Industry Experience", description: "Of uncompromising excellence" },
    Stat { value: 98, suffix: "%", label: "On-Time Delivery", description: "Surgical scheduling precision" },
    Stat { value: 400, suffix: "+", label: "Enterprise Clients", description: "Who trust our craftsmanship" },
];

/// One idle counter per statistic, started together when the band reveals.
pub fn stat_counters() -> Vec<CountUp> {
    STATS.iter().map(|s| CountUp::new(s.value, s.suffix)).collect()
}

/// Latest-articles strip on the home page.
pub const LATEST_ARTICLES: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll::ScrollBinding;
    use crate::motion::reveal::ViewportMargin;

    #[test]
    fn orbit_matches_service_list() {
        let orbit = orbit_selector().unwrap();
        assert_eq!(orbit.len(), 5);
        assert_eq!(orbit.nodes()[4].angle_degrees, 288.0);
        assert_eq!(orbit.selected_node().label, "Liquid Elastomers");
    }

    #[test]
    fn counters_land_on_stats() {
        let mut counters = stat_counters();
        for c in &mut counters {
            c.start(0.0);
        }
        let labels: Vec<String> = counters.iter().map(|c| c.label_at(5.0)).collect();
        assert_eq!(labels, vec!["2,500+", "25 Yrs", "98%", "400+"]);
    }

    #[test]
    fn process_offsets_parse() {
        let binding = ScrollBinding::parse(&PROCESS_STEP_OFFSETS).unwrap();
        assert_eq!(binding.edges().len(), 3);
        let margin = ViewportMargin::parse(PROCESS_ACTIVE_MARGIN);
        assert_ne!(margin, ViewportMargin::NONE);
    }
}
