//! Scroll-triggered reveal animation.
//!
//! Cards get the reveal class the first time they scroll into view. The
//! class stays when they leave, so each card animates once per page load.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::rc::Rc;

use crate::config::RevealConfig;
use crate::dom::Dom;

/// Start observing the configured targets. Returns how many elements are
/// being watched.
pub fn init_scroll_reveal<D: Dom + 'static>(dom: &Rc<D>, config: &RevealConfig) -> usize {
    let targets = config.targets.iter().map(String::as_str).collect::<Vec<_>>();
    let nodes = dom.elements_with_any_class(&targets);
    if nodes.is_empty() {
        return 0;
    }

    let owner = Rc::clone(dom);
    let class = config.class.clone();
    dom.observe_visibility(
        &nodes,
        config.threshold,
        Rc::new(move |node: &D::Node, intersecting: bool| {
            if intersecting {
                owner.add_class(node, &class);
            }
        }),
    );
    log::debug!("scroll reveal watching {} elements", nodes.len());
    nodes.len()
}
