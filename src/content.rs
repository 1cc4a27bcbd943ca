// Hardcoded display statistics
//
// The dashboard presents a mix of parsed and fixed findings. The fixed ones
// below were produced by the analysis pipeline for the published report and
// are shown verbatim; they are display copy, not live data.

/// A label/value/note triple shown as one metric card.
#[derive(Debug, Clone, Copy)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// One row of the suspicious-vendor table in the sidebar.
#[derive(Debug, Clone, Copy)]
pub struct VendorRow {
    pub vendor: &'static str,
    pub ghost_trips: u32,
    pub avg_speed_mph: u32,
}

/// Per-fleet border-effect findings for the map tab.
#[derive(Debug, Clone, Copy)]
pub struct BorderFindings {
    pub fleet: &'static str,
    pub avg_change_pct: f64,
    pub zones_analyzed: u32,
    pub border_zones: u32,
    pub max_increase_pct: f64,
    pub max_decrease_pct: f64,
}

// ============================================================================
// SIDEBAR
// ============================================================================

pub const PROJECT_OVERVIEW: &[(&str, &str)] = &[
    ("Analysis Period", "2024-2025"),
    ("Implementation Date", "Jan 5, 2025"),
    ("Data Source", "NYC TLC Trip Record Data"),
    ("Congestion Zone", "Manhattan South of 60th St"),
];

pub const EXECUTIVE_SUMMARY: &[KeyMetric] = &[
    KeyMetric {
        label: "Estimated Revenue",
        value: "$183.2M",
        note: "",
    },
    KeyMetric {
        label: "Compliance Rate",
        value: "92.4%",
        note: "",
    },
    KeyMetric {
        label: "Rain Elasticity",
        value: "-0.15",
        note: "Inelastic",
    },
    KeyMetric {
        label: "Ghost Trips",
        value: "0.34%",
        note: "",
    },
];

pub const SUSPICIOUS_VENDORS: &[VendorRow] = &[
    VendorRow {
        vendor: "Vendor A",
        ghost_trips: 142,
        avg_speed_mph: 72,
    },
    VendorRow {
        vendor: "Vendor B",
        ghost_trips: 89,
        avg_speed_mph: 68,
    },
    VendorRow {
        vendor: "Vendor C",
        ghost_trips: 76,
        avg_speed_mph: 71,
    },
    VendorRow {
        vendor: "Vendor D",
        ghost_trips: 65,
        avg_speed_mph: 69,
    },
    VendorRow {
        vendor: "Vendor E",
        ghost_trips: 54,
        avg_speed_mph: 70,
    },
];

// ============================================================================
// TAB 1 — THE MAP (BORDER EFFECT)
// ============================================================================

pub const YELLOW_BORDER: BorderFindings = BorderFindings {
    fleet: "Yellow Taxi",
    avg_change_pct: -0.7,
    zones_analyzed: 60,
    border_zones: 51,
    max_increase_pct: 50.0,
    max_decrease_pct: -43.3,
};

pub const GREEN_BORDER: BorderFindings = BorderFindings {
    fleet: "Green Taxi",
    avg_change_pct: 2.7,
    zones_analyzed: 60,
    border_zones: 51,
    max_increase_pct: 46.7,
    max_decrease_pct: -19.6,
};

pub const BORDER_INSIGHTS: &[KeyMetric] = &[
    KeyMetric {
        label: "Border Zone Avg Change",
        value: "+0.0%",
        note: "Both taxi types",
    },
    KeyMetric {
        label: "Max Border Increase",
        value: "+50.0%",
        note: "Zone X - Yellow Taxis",
    },
    KeyMetric {
        label: "Max Border Decrease",
        value: "-43.3%",
        note: "Zone Y - Yellow Taxis",
    },
];

// ============================================================================
// TAB 2 — THE FLOW (VELOCITY)
// ============================================================================

pub const SPEED_METRICS: &[KeyMetric] = &[
    KeyMetric {
        label: "Yellow 2024",
        value: "13.39 MPH",
        note: "Before",
    },
    KeyMetric {
        label: "Yellow 2025",
        value: "13.16 MPH",
        note: "-1.73%",
    },
    KeyMetric {
        label: "Green 2024",
        value: "12.31 MPH",
        note: "Before",
    },
    KeyMetric {
        label: "Green 2025",
        value: "12.61 MPH",
        note: "+2.39%",
    },
];

// ============================================================================
// TAB 3 — THE ECONOMICS (TIP VS SURCHARGE)
// ============================================================================

pub const CORRELATION_METRICS: &[KeyMetric] = &[
    KeyMetric {
        label: "Yellow Correlation",
        value: "+0.390",
        note: "Strong Positive",
    },
    KeyMetric {
        label: "Green Correlation",
        value: "+0.006",
        note: "No Correlation",
    },
    KeyMetric {
        label: "Yellow Avg Tip",
        value: "40.66%",
        note: "$2.19 avg surcharge",
    },
    KeyMetric {
        label: "Green Avg Tip",
        value: "34.85%",
        note: "$0.91 avg surcharge",
    },
];

// ============================================================================
// TAB 4 — THE WEATHER (RAIN ELASTICITY)
// ============================================================================

pub const WEATHER_SOURCE_LINES: &[&str] = &[
    "API: Open-Meteo Historical",
    "Location: Central Park, NYC",
    "Coordinates: 40.7812\u{b0} N, 73.9665\u{b0} W",
    "Period: Jan 1 - Dec 31, 2025",
    "Total Precipitation: 1083 mm",
];

pub const TAXI_DATA_LINES: &[&str] = &[
    "Source: NYC TLC Processed Data",
    "Total Trips Analyzed: 43.2M",
    "Average Daily Trips: 121,124",
    "Date Range: 2025-01-01 to 2025-11-30",
    "Rainy Day Trips: +7.1% higher",
];

pub const RAINY_DAYS: KeyMetric = KeyMetric {
    label: "Rainy Days",
    value: "169",
    note: "47.3% of days",
};
