// src/lib.rs

// Congestion Pricing Audit Dashboard
//
// Renders a four-tab HTML audit report (border-effect maps, velocity
// heatmaps, tip economics, rain elasticity) from artifacts that an external
// analysis pipeline has already written to disk: PNG charts and plain-text
// report files. The library performs one explicit, idempotent render pass;
// artifact problems degrade to warning notices, never failures.

pub mod artifacts;
pub mod config;
pub mod content;
pub mod metrics;
pub mod render;
pub mod widgets;

pub use artifacts::{ArtifactStore, EmbeddedImage, Warnings};
pub use config::{ConfigError, DashboardConfig, WeatherDefaults};
pub use metrics::{extract_metrics, MetricSet, MetricValue};
pub use render::{render_dashboard, write_dashboard, Dashboard, OutputError};
