use masterclass_core::model::Catalog;
use masterclass_core::{Direction, Navigator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavFooterVm {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// One entry per lesson, true at the current position.
    pub dots: Vec<bool>,
}

#[must_use]
pub fn map_nav_footer(navigator: &Navigator, catalog: &Catalog) -> NavFooterVm {
    let (current, len) = navigator.position(catalog);
    NavFooterVm {
        can_go_back: navigator.can_step(catalog, Direction::Backward),
        can_go_forward: navigator.can_step(catalog, Direction::Forward),
        dots: (0..len).map(|idx| idx == current).collect(),
    }
}
