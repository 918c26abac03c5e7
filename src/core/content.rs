//! Static brochure copy: studio details, services, joinery and portfolio.

use super::view::ServiceKind;

/// Studio identity shown in the hero, booking column and footer.
pub struct Studio {
    pub name: &'static str,
    pub established: &'static str,
    pub address: &'static [&'static str],
    pub email: &'static str,
    pub instagram: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
}

pub const STUDIO: Studio = Studio {
    name: "Nirvana Interiors",
    established: "Est. 2026 — Modern Living Systems",
    address: &[
        "Shop No. 436-A, Ground Floor",
        "C-2 Block, Phase-IV, Kilokri",
        "Aya Nagar Extension",
        "New Delhi – 110047, India",
    ],
    email: "gamerfreakin6@gmail.com",
    instagram: "https://www.instagram.com/nirvanainteriorstudio/",
    privacy: "We collect and protect your personal information in accordance with Indian data \
              protection laws. Your contact details are used solely for project inquiries and \
              will never be shared with third parties.",
    terms: "By contacting Nirvana Interiors, you agree to our service terms. All designs and \
            concepts remain our intellectual property until full payment is received. Project \
            timelines and costs will be provided in detailed quotations.",
};

pub struct Hero {
    pub headline: &'static [&'static str],
    pub lead: &'static str,
}

pub const HERO: Hero = Hero {
    headline: &["Design Beyond", "Expectations."],
    lead: "We curate spaces that breathe. Specializing in luxury modular kitchens, avant-garde \
           TV panels, and bespoke home decor.",
};

/// Anchors on the home page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Joinery,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Services,
        Self::Joinery,
        Self::Portfolio,
        Self::Contact,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Joinery => "Joinery",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Summary card on the home page linking to a service page.
pub struct ServiceCard {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES_HEADING: &str = "Refined Living Systems.";
pub const SERVICES_LEAD: &str = "Established in 2026, we redefine the modern home with \
    precision-engineered modular solutions and high-end aesthetic finishes.";

pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        kind: ServiceKind::Kitchens,
        title: "Modular Culinary",
        tag: "Kitchens",
        description: "Functional art for the heart of the home. We design intelligent, sleek \
                      modular kitchens featuring matte finishes and automated cabinetry.",
        features: &[
            "Custom Island Designs",
            "Hidden Appliances",
            "Stone & Marble Countertops",
            "Smart Storage Solutions",
        ],
    },
    ServiceCard {
        kind: ServiceKind::MediaPanels,
        title: "Media & Panels",
        tag: "TV Systems",
        description: "Elevate your entertainment zone. Floating TV panels with integrated \
                      lighting, hidden wiring, and textured backdrops.",
        features: &[
            "Floating Units",
            "Backlit Onyx/Stone",
            "Acoustic Wood Paneling",
            "Concealed Consoles",
        ],
    },
    ServiceCard {
        kind: ServiceKind::InteriorDecor,
        title: "Interior Decor",
        tag: "Walls & Ceilings",
        description: "Complete spatial transformation through architectural ceiling designs, \
                      textured feature walls, and bespoke furnishing.",
        features: &[
            "False Ceiling Concepts",
            "Textured Wall Finishes",
            "Custom Tables & Cabinets",
            "Ambient Lighting",
        ],
    },
];

pub struct Joinery {
    pub heading: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const JOINERY: Joinery = Joinery {
    heading: "Statement Joinery & Decor.",
    description: "True luxury lies in the details. We craft custom cabinetry, dining tables, and \
                  architectural wall paneling that act as the centerpiece of your room. Using \
                  premium hardwoods, fluted glass, and metal accents.",
    highlights: &[
        "Custom Dining Tables",
        "TV Unit Paneling",
        "Architectural Cabinets",
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Residential,
    Commercial,
}

impl ProjectCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Obsidian Loft",
        category: ProjectCategory::Residential,
    },
    Project {
        title: "Gilded Lounge",
        category: ProjectCategory::Commercial,
    },
    Project {
        title: "Matte Kitchen",
        category: ProjectCategory::Residential,
    },
    Project {
        title: "Stone Bath",
        category: ProjectCategory::Residential,
    },
    Project {
        title: "The Onyx Hall",
        category: ProjectCategory::Commercial,
    },
    Project {
        title: "Minimal Study",
        category: ProjectCategory::Residential,
    },
];

/// Portfolio filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PortfolioFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl PortfolioFilter {
    pub const ALL: [Self; 3] = [
        Self::All,
        Self::Only(ProjectCategory::Residential),
        Self::Only(ProjectCategory::Commercial),
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }

    /// Projects visible under this filter, in gallery order.
    pub fn apply(self) -> impl Iterator<Item = &'static Project> {
        PROJECTS.iter().filter(move |p| self.matches(p))
    }
}

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Content of a dedicated service page.
pub struct ServicePage {
    pub category: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
    pub capabilities: &'static [&'static str],
    pub process: [ProcessStep; 4],
}

const KITCHENS: ServicePage = ServicePage {
    category: "Kitchens",
    title: "Modular Culinary Spaces",
    subtitle: "Where function meets artistry in the heart of your home",
    paragraphs: &[
        "The kitchen is no longer just a space for preparation—it is the architectural core of \
         modern living. We approach each project with the understanding that a well-designed \
         kitchen must balance precision engineering with timeless aesthetics.",
        "Our modular systems are built around intelligent storage, seamless integration of \
         appliances, and materials that age with grace. Every surface, every mechanism, every \
         joint is considered.",
        "From matte lacquer finishes to natural stone countertops, we work exclusively with \
         materials that meet our standards for durability, beauty, and environmental \
         responsibility.",
    ],
    capabilities: &[
        "Custom Island Configurations",
        "Hidden & Integrated Appliances",
        "Stone & Marble Countertops",
        "Soft-Close Cabinetry Systems",
        "Smart Storage Solutions",
        "Integrated Ambient Lighting",
        "Handleless Design Options",
    ],
    process: [
        ProcessStep {
            number: "01",
            title: "Consultation",
            description: "We begin with an in-depth conversation about your lifestyle, cooking \
                          habits, and spatial requirements.",
        },
        ProcessStep {
            number: "02",
            title: "Design Development",
            description: "Our team creates detailed 3D visualizations and technical drawings for \
                          your approval.",
        },
        ProcessStep {
            number: "03",
            title: "Material Selection",
            description: "Together, we curate the perfect combination of finishes, hardware, and \
                          surfaces.",
        },
        ProcessStep {
            number: "04",
            title: "Installation",
            description: "Our craftsmen execute the installation with precision, ensuring every \
                          detail is perfect.",
        },
    ],
};

const MEDIA_PANELS: ServicePage = ServicePage {
    category: "TV Systems & Theatre Rooms",
    title: "Media & Panel Systems",
    subtitle: "Architectural entertainment design for the modern home",
    paragraphs: &[
        "Entertainment spaces deserve more than a screen on a wall. Our media panel systems \
         transform your living area into a seamless composition of technology and design, where \
         every wire is hidden and every surface tells a story.",
        "For those with the space to dream bigger, we design complete private theatre rooms—\
         immersive cinematic experiences engineered for your home. Theatre installations require \
         a dedicated room of adequate size to achieve proper acoustics, seating arrangement, and \
         screen proportions.",
        "From floating TV units that appear to defy gravity to backlit stone panels that create \
         ambient atmospheres, each installation is engineered to accommodate future technology \
         upgrades while maintaining its architectural integrity for years to come.",
    ],
    capabilities: &[
        "Private Theatre Room Design",
        "Floating TV Unit Systems",
        "Backlit Onyx & Stone Panels",
        "Acoustic Wood Paneling",
        "Concealed Cable Management",
        "Integrated Soundbar Housing",
        "LED Ambient Lighting",
    ],
    process: [
        ProcessStep {
            number: "01",
            title: "Space Assessment",
            description: "We evaluate your room dimensions, viewing angles, and existing \
                          electrical infrastructure.",
        },
        ProcessStep {
            number: "02",
            title: "Panel Design",
            description: "Custom designs are created to complement your interior while \
                          maximizing functionality.",
        },
        ProcessStep {
            number: "03",
            title: "Technical Planning",
            description: "All wiring, mounting systems, and lighting are meticulously planned \
                          before execution.",
        },
        ProcessStep {
            number: "04",
            title: "Installation",
            description: "Our specialists install the complete system with attention to every \
                          concealed detail.",
        },
    ],
};

const INTERIOR_DECOR: ServicePage = ServicePage {
    category: "Walls & Ceilings",
    title: "Interior Decor",
    subtitle: "Spatial transformation through architectural detail",
    paragraphs: &[
        "True interior design lives in the details—the way light falls across a textured wall, \
         the quiet confidence of a well-proportioned ceiling, the subtle interplay between \
         furniture and space.",
        "We approach interior decor as an exercise in restraint and intention. Our work \
         encompasses false ceiling designs that add dimension without overwhelm, wall treatments \
         that create atmosphere, and custom furniture that belongs exactly where it stands.",
        "Every element is considered in relation to the whole, creating spaces that feel both \
         curated and effortless.",
    ],
    capabilities: &[
        "False Ceiling Concepts",
        "Textured Wall Finishes",
        "Custom Tables & Cabinets",
        "Ambient Lighting Design",
        "Architectural Feature Walls",
        "Crown Molding & Trim",
        "Bespoke Furniture Pieces",
    ],
    process: [
        ProcessStep {
            number: "01",
            title: "Vision Mapping",
            description: "We explore your aesthetic preferences, functional needs, and the \
                          character you envision.",
        },
        ProcessStep {
            number: "02",
            title: "Material Consultation",
            description: "Hands-on sessions with finishes, fabrics, and samples to define the \
                          material palette.",
        },
        ProcessStep {
            number: "03",
            title: "Design Finalization",
            description: "Comprehensive plans and mood boards ensure alignment before any work \
                          begins.",
        },
        ProcessStep {
            number: "04",
            title: "Execution",
            description: "Our artisans bring the vision to life with craftsmanship and precision.",
        },
    ],
};

#[must_use]
pub const fn service_page(kind: ServiceKind) -> &'static ServicePage {
    match kind {
        ServiceKind::Kitchens => &KITCHENS,
        ServiceKind::MediaPanels => &MEDIA_PANELS,
        ServiceKind::InteriorDecor => &INTERIOR_DECOR,
    }
}

pub struct BookingCopy {
    pub headline: &'static [&'static str],
    pub lead: &'static str,
    pub confirmation_title: &'static str,
    pub confirmation_body: &'static str,
}

pub const BOOKING: BookingCopy = BookingCopy {
    headline: &["Begin the", "Transformation."],
    lead: "Share your vision with us. Whether it's a complete architectural overhaul or a \
           curated room refinement, we approach every inquiry with the same dedication to detail.",
    confirmation_title: "Request Received",
    confirmation_body: "Thank you for entrusting us with your vision. Our concierge team will \
                        review your details and reach out within 24 hours.",
};
