//! Capture Group Enumeration

use core::convert::Infallible;

use regex_syntax::hir::{self, Hir, HirKind, Visitor};

/// List the capture group names of `hir`, in the order of their opening parentheses.
///
/// Unnamed groups appear as `""`, so that entry `i` is always group `i + 1`.
pub fn capture_names(hir: &Hir) -> Vec<String> {
    hir::visit(hir, CaptureNameCollector::default()).unwrap_or_else(|never| match never {})
}

#[derive(Debug, Default)]
struct CaptureNameCollector {
    names: Vec<String>,
}

impl Visitor for CaptureNameCollector {
    type Output = Vec<String>;
    type Err = Infallible;

    fn finish(self) -> Result<Self::Output, Self::Err> {
        Ok(self.names)
    }

    fn visit_pre(
        &mut self,
        hir: &Hir,
    ) -> Result<(), Self::Err> {
        // Pre-order is opening-parenthesis order.
        if let HirKind::Capture(capture) = hir.kind() {
            self.names
                .push(capture.name.as_deref().unwrap_or_default().to_string());
        }
        Ok(())
    }
}
