//! Scroll-progress indicator

use crate::config::SiteConfig;
use crate::dom::Document;

/// Scroll geometry of the document element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }
}

/// Percentage of the page scrolled, `0` when the page cannot scroll
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Writes the scroll fraction into the progress bar width
#[derive(Debug, Clone)]
pub struct ScrollIndicator {
    bar_class: String,
}

impl ScrollIndicator {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            bar_class: config.dom.progress_bar_class.clone(),
        }
    }

    /// Recompute the bar width; returns the percentage written, if any
    pub fn update(&self, doc: &mut Document, metrics: ScrollMetrics) -> Option<f64> {
        let bar = doc.element_by_class_mut(&self.bar_class)?;
        let scrolled = progress_percent(metrics);
        bar.set_style("width", &format!("{}%", scrolled));
        Some(scrolled)
    }
}
