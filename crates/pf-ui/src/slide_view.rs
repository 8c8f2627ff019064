//! The area that presents the active slide

use std::sync::Arc;
use std::time::Instant;
use egui::{Pos2, Rect, ScrollArea};
use pf_core::{ScrollMetrics, SlideNavigator};
use pf_data::PortfolioView;

use crate::contact_form::ContactFormState;
use crate::sections::{slide_ui, Slide, SlideAction};
use crate::theme;
use crate::transition::TransitionTracker;
use crate::widget_utils::{ScrollAreaExt, WidgetId};

/// Draws the active slide inside its own scroll area
///
/// The scroll geometry of the last frame is kept so wheel events of the next
/// frame can be checked against it before the slide is drawn again.
pub struct SlideView {
    transitions: Arc<TransitionTracker>,
    last_container: Option<(Rect, ScrollMetrics)>,
}

impl SlideView {
    pub fn new(transitions: Arc<TransitionTracker>) -> Self {
        Self {
            transitions,
            last_container: None,
        }
    }

    /// Scroll geometry of the slide content under `pointer`, if any
    pub fn container_at(&self, pointer: Option<Pos2>) -> Option<ScrollMetrics> {
        let pointer = pointer?;
        self.last_container
            .filter(|(rect, _)| rect.contains(pointer))
            .map(|(_, metrics)| metrics)
    }

    /// Draw the active slide
    ///
    /// `allow_scroll` is false on frames where the wheel was claimed for
    /// slide navigation.
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        navigator: &SlideNavigator,
        view: &PortfolioView,
        contact: &mut ContactFormState,
        allow_scroll: bool,
        actions: &mut Vec<SlideAction>,
    ) {
        let context = navigator.context();
        let Some(slide) = context.active_slide.and_then(Slide::from_index) else {
            self.last_container = None;
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("No slide selected").color(theme::muted_text_color()));
            });
            return;
        };

        let index = slide.index();
        let background = if index % 2 == 1 {
            theme::alt_fill()
        } else {
            theme::card_fill()
        };

        let output = egui::Frame::none()
            .fill(background)
            .inner_margin(32.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_builder(&WidgetId::slide(index).with("scroll"))
                    .auto_shrink([false, false])
                    .enable_scrolling(allow_scroll)
                    .show(ui, |ui| slide_ui(ui, slide, view, contact, actions))
            })
            .inner;

        self.last_container = Some((
            output.inner_rect,
            ScrollMetrics {
                offset: output.state.offset.y,
                content_height: output.content_size.y,
                viewport_height: output.inner_rect.height(),
            },
        ));

        let opacity = self.transitions.opacity(index, Instant::now());
        if opacity < 1.0 {
            ui.painter().rect_filled(
                output.inner_rect.expand(32.0),
                0.0,
                background.gamma_multiply(1.0 - opacity),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_only_under_pointer() {
        let mut view = SlideView::new(Arc::new(TransitionTracker::new()));
        assert_eq!(view.container_at(Some(Pos2::new(10.0, 10.0))), None);

        let metrics = ScrollMetrics {
            offset: 0.0,
            content_height: 900.0,
            viewport_height: 500.0,
        };
        view.last_container = Some((Rect::from_min_max(Pos2::ZERO, Pos2::new(100.0, 100.0)), metrics));

        assert_eq!(view.container_at(Some(Pos2::new(50.0, 50.0))), Some(metrics));
        assert_eq!(view.container_at(Some(Pos2::new(150.0, 50.0))), None);
        assert_eq!(view.container_at(None), None);
    }
}
