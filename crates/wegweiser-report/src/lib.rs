//! wegweiser-report — Rendering of assessments and simulation outcomes.

pub mod html;
pub mod markdown;

pub use html::{generate_html, write_html_report};
pub use markdown::{
    assessment_markdown, simulation_markdown, write_markdown_report, write_simulation_markdown,
};
