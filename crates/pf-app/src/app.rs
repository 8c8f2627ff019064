//! The eframe application

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use eframe::egui::{self, Context};
use parking_lot::{Mutex, RwLock};
use tracing::{error, info};

use pf_core::ViewerContext;
use pf_data::sources::{DEFAULT_RESUME_NAME, RESUME_DOWNLOAD_FAILED};
use pf_data::{ApiError, ContactForm, ContactOutcome, PortfolioClient, PortfolioView};
use pf_ui::{
    alert_window, status_bar, top_bar, ContactFormState, NavigationPanel, ShellConfig, Slide,
    SlideAction, SlideView, Theme, TransitionTracker,
};

use crate::input::{route, FrameInput};

/// Results handed back from background tasks
#[derive(Debug)]
enum AppEvent {
    ContactFinished(ContactOutcome),
    ResumeSaved(PathBuf),
    ResumeFailed(String),
}

/// Main application state
pub struct PortfolioApp {
    /// Viewer context shared with the slides
    viewer_context: ViewerContext,

    client: PortfolioClient,

    /// Filled once the portfolio fetch succeeds
    portfolio: Arc<RwLock<Option<PortfolioView>>>,

    /// Results of finished background tasks
    inbox: Arc<Mutex<Vec<AppEvent>>>,

    shell: ShellConfig,
    navigation_panel: NavigationPanel,
    slide_view: SlideView,
    transitions: Arc<TransitionTracker>,
    contact: ContactFormState,

    /// Pending alert text
    alert: Option<String>,

    /// Last status line
    status: Option<String>,

    /// Keeps the runtime alive for as long as the window is open
    _runtime: tokio::runtime::Runtime,

    egui_ctx: egui::Context,
}

impl PortfolioApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        client: PortfolioClient,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        pf_ui::apply_theme(&cc.egui_ctx, &Theme::default());
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let viewer_context = ViewerContext::new(
            Slide::ALL.len(),
            &client.config().navigation,
            runtime.handle().clone(),
        );

        let transitions = Arc::new(TransitionTracker::new().with_repaint(cc.egui_ctx.clone()));
        viewer_context.navigator.add_subscriber(transitions.clone());

        let shell = ShellConfig {
            title: String::new(),
            admin_login_url: client.config().admin_login_url(),
        };

        let app = Self {
            navigation_panel: NavigationPanel::new(viewer_context.navigator.clone()),
            slide_view: SlideView::new(transitions.clone()),
            viewer_context,
            client,
            portfolio: Arc::new(RwLock::new(None)),
            inbox: Arc::new(Mutex::new(Vec::new())),
            shell,
            transitions,
            contact: ContactFormState::default(),
            alert: None,
            status: None,
            _runtime: runtime,
            egui_ctx: cc.egui_ctx.clone(),
        };

        app.load_portfolio();
        app
    }

    /// Fetch the portfolio in the background
    ///
    /// A failure is logged and the slides keep their placeholders.
    fn load_portfolio(&self) {
        let client = self.client.clone();
        let portfolio = self.portfolio.clone();
        let ctx = self.egui_ctx.clone();

        self.viewer_context.runtime_handle.spawn(async move {
            match client.fetch_portfolio().await {
                Ok(data) => {
                    let view = PortfolioView::from_portfolio(&data, client.config());
                    *portfolio.write() = Some(view);
                    ctx.request_repaint();
                }
                Err(e) => {
                    error!("Failed to load portfolio: {}", e);
                }
            }
        });
    }

    fn download_resume(&self) {
        let client = self.client.clone();
        let inbox = self.inbox.clone();
        let ctx = self.egui_ctx.clone();
        let dir = client.config().download_dir();

        self.viewer_context.runtime_handle.spawn(async move {
            let result = match client.download_resume(DEFAULT_RESUME_NAME).await {
                Ok(file) => file.save_to(&dir).await,
                Err(e) => Err(e),
            };

            let event = match result {
                Ok(path) => AppEvent::ResumeSaved(path),
                Err(e) => {
                    error!("Resume download failed: {}", e);
                    AppEvent::ResumeFailed(download_alert(&e))
                }
            };
            inbox.lock().push(event);
            ctx.request_repaint();
        });
    }

    fn submit_contact(&self, form: ContactForm) {
        let client = self.client.clone();
        let inbox = self.inbox.clone();
        let ctx = self.egui_ctx.clone();

        self.viewer_context.runtime_handle.spawn(async move {
            let outcome = client.submit_contact(&form).await;
            inbox.lock().push(AppEvent::ContactFinished(outcome));
            ctx.request_repaint();
        });
    }

    fn handle_action(&mut self, action: SlideAction) {
        match action {
            SlideAction::Jump(target) => self.viewer_context.navigator.jump_to(&target),
            SlideAction::DownloadResume => self.download_resume(),
            SlideAction::ResumeUnavailable(message) => self.alert = Some(message),
            SlideAction::SubmitContact => {
                if let Some(form) = self.contact.begin_submit() {
                    self.submit_contact(form);
                }
            }
        }
    }

    fn drain_inbox(&mut self) {
        let events: Vec<AppEvent> = std::mem::take(&mut *self.inbox.lock());
        for event in events {
            match event {
                AppEvent::ContactFinished(outcome) => self.contact.finish_submit(&outcome),
                AppEvent::ResumeSaved(path) => {
                    info!("Resume saved to {:?}", path);
                    self.status = Some(format!("Resume saved to {}", path.display()));
                }
                AppEvent::ResumeFailed(message) => self.alert = Some(message),
            }
        }
    }
}

/// Alert text for a failed resume download
fn download_alert(error: &ApiError) -> String {
    let message = error.to_string();
    if message.is_empty() {
        RESUME_DOWNLOAD_FAILED.to_string()
    } else {
        message
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.drain_inbox();

        // Route this frame's keys and wheel events before drawing
        let now = Instant::now();
        let input = ctx.input(FrameInput::gather);
        let container = self.slide_view.container_at(input.pointer);
        let routed = {
            let mut wheel = self.viewer_context.wheel.lock();
            route(&mut wheel, &input.keys, &input.wheel_deltas, container, now)
        };
        for command in &routed.commands {
            self.viewer_context.navigator.dispatch(*command);
        }

        top_bar(ctx, &self.shell);

        egui::TopBottomPanel::bottom("slide_chrome").show(ctx, |ui| {
            self.navigation_panel.ui(ui, &Slide::titles());
        });

        status_bar(ctx, self.status.as_deref());

        let mut actions = Vec::new();
        {
            let placeholder = PortfolioView::default();
            let portfolio = self.portfolio.read();
            let view = portfolio.as_ref().unwrap_or(&placeholder);

            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    self.slide_view.ui(
                        ui,
                        &self.viewer_context.navigator,
                        view,
                        &mut self.contact,
                        routed.allow_scroll,
                        &mut actions,
                    );
                });
        }

        for action in actions {
            self.handle_action(action);
        }

        alert_window(ctx, &mut self.alert);

        if self.transitions.is_animating(Instant::now()) {
            ctx.request_repaint();
        }
    }
}
