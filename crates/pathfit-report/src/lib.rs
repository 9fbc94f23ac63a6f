//! pathfit-report — HTML rendering of assessment reports.

pub mod html;
