use crate::clipboard::{self, ClipboardError};
use crate::generation::TextGenerator;
use crate::tools::GenerationOutcome;
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::messages::{NOTHING_TO_COPY, OUTPUT_COPIED};
use crate::ui::mvi::Reducer;
use crate::ui::registry::{ToolRegistry, ROOT_ROUTE};
use crate::ui::shell::{ContentView, ShellIntent, ShellReducer, ShellState};
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Sidebar,
    Form,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    registry: ToolRegistry,
    /// Navigation state (MVI pattern).
    shell: ShellState,
    /// Form of the mounted tool view; `None` on the welcome view.
    form: Option<FormState>,
    generator: Arc<dyn TextGenerator>,
    runtime: Handle,
    event_tx: mpsc::Sender<AppEvent>,
    next_token: u64,
    /// Transient footer message (clipboard results).
    notice: Option<String>,
}

impl App {
    pub fn new(
        registry: ToolRegistry,
        generator: Arc<dyn TextGenerator>,
        runtime: Handle,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Sidebar,
            registry,
            shell: ShellState::default(),
            form: None,
            generator,
            runtime,
            event_tx,
            next_token: 0,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        // The welcome view has nothing to focus.
        self.focus = match (focus, &self.form) {
            (Focus::Form, None) => Focus::Sidebar,
            (focus, _) => focus,
        };
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn location(&self) -> &str {
        self.shell.location()
    }

    pub fn content_view(&self) -> ContentView {
        self.shell.content_view(&self.registry)
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // ========================================================================
    // Navigation (MVI pattern)
    // ========================================================================

    /// Route the content area to `route`.
    ///
    /// A different route mounts a fresh form (or the welcome view for the
    /// root and unknown routes). Re-activating the current route keeps the
    /// mounted form as it is.
    pub fn navigate(&mut self, route: &str) {
        if self.shell.location() == route {
            return;
        }
        let index = self.registry.index_of(route);
        dispatch_mvi!(
            self,
            shell,
            ShellReducer,
            ShellIntent::Navigate {
                route: route.to_string(),
                index,
            }
        );

        if let Some(form) = &self.form {
            if form.is_pending() {
                tracing::debug!(
                    token = ?form.pending_token(),
                    "Leaving view with generation in flight"
                );
            }
        }
        self.form = self.registry.lookup(route).map(|tool| FormState::new(tool.kind));
        if self.form.is_none() {
            self.focus = Focus::Sidebar;
        }
        self.notice = None;
        tracing::debug!(route, view = ?self.content_view(), "Navigated");
    }

    pub fn navigate_home(&mut self) {
        self.navigate(ROOT_ROUTE);
    }

    /// Activate the sidebar entry under the cursor.
    pub fn activate_cursor(&mut self) {
        let Some(tool) = self.registry.all_tools().get(self.shell.cursor()) else {
            return;
        };
        let route = tool.route;
        self.navigate(route);
    }

    /// Activate the entry at a 1-based position.
    pub fn activate_index(&mut self, position: usize) -> bool {
        if position == 0 {
            return false;
        }
        let Some(tool) = self.registry.all_tools().get(position - 1) else {
            return false;
        };
        let route = tool.route;
        self.navigate(route);
        true
    }

    pub fn move_cursor(&mut self, direction: i32) {
        let len = self.registry.len();
        let intent = if direction.is_negative() {
            ShellIntent::CursorUp { len }
        } else {
            ShellIntent::CursorDown { len }
        };
        dispatch_mvi!(self, shell, ShellReducer, intent);
    }

    // ========================================================================
    // Form (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the mounted form. No-op on the welcome view.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        if let Some(form) = self.form.take() {
            self.form = Some(FormReducer::reduce(form, intent));
        }
    }

    /// Submit the mounted form.
    ///
    /// Synchronous tools resolve inside the reducer; for the text generator
    /// a request is spawned once the form reports `Pending` on this token.
    pub fn submit(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        if !form.can_submit() {
            return;
        }

        self.next_token += 1;
        let token = self.next_token;
        self.dispatch_form(FormIntent::Submit { token });

        let Some(form) = &self.form else {
            return;
        };
        tracing::debug!(tool = ?form.tool(), token, phase = ?form.phase(), "Form submitted");
        if form.pending_token() == Some(token) {
            let prompt = form.input().to_string();
            self.spawn_generation(token, prompt);
        }
    }

    fn spawn_generation(&self, token: u64, prompt: String) {
        let generator = Arc::clone(&self.generator);
        let event_tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let outcome = generator.generate(&prompt).await;
            // Receiver gone means the UI has exited.
            let _ = event_tx.send(AppEvent::GenerationFinished { token, outcome });
        });
    }

    /// Apply a finished generation, unless the form it belongs to is gone.
    pub fn on_generation_finished(&mut self, token: u64, outcome: GenerationOutcome) {
        let applies = self
            .form
            .as_ref()
            .is_some_and(|form| form.pending_token() == Some(token));
        if !applies {
            tracing::debug!(token, "Discarding stale generation result");
            return;
        }
        if outcome.is_success() {
            tracing::debug!(token, "Generation result applied");
        } else if let Some(kind) = outcome.error_kind() {
            tracing::debug!(token, kind = kind.as_str(), "Generation failure applied");
        }
        self.dispatch_form(FormIntent::Resolve { token, outcome });
    }

    pub fn on_tick(&mut self) {
        if self.form.as_ref().is_some_and(FormState::is_pending) {
            self.dispatch_form(FormIntent::AnimationTick);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.focus == Focus::Form {
            self.dispatch_form(FormIntent::InsertText(text.to_string()));
        }
    }

    /// Copy the current successful output to the system clipboard.
    pub fn copy_output(&mut self) {
        let text = self
            .form
            .as_ref()
            .and_then(FormState::outcome)
            .and_then(|outcome| outcome.text())
            .unwrap_or_default();

        self.notice = Some(match clipboard::copy_text(text) {
            Ok(()) => OUTPUT_COPIED.to_string(),
            Err(ClipboardError::Empty) => NOTHING_TO_COPY.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard copy failed");
                err.to_string()
            }
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Outcome;
    use crate::ui::form::FormPhase;
    use crate::ui::registry::ToolKind;
    use async_trait::async_trait;

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Outcome {
            Outcome::Success(prompt.to_string())
        }
    }

    fn make_app() -> (App, tokio::runtime::Runtime, mpsc::Receiver<AppEvent>) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (tx, rx) = mpsc::channel();
        let app = App::new(
            ToolRegistry::standard(),
            Arc::new(EchoGenerator),
            runtime.handle().clone(),
            tx,
        );
        (app, runtime, rx)
    }

    #[test]
    fn starts_on_welcome_with_sidebar_focus() {
        let (app, _rt, _rx) = make_app();
        assert_eq!(app.location(), "/");
        assert_eq!(app.content_view(), ContentView::Welcome);
        assert!(app.form().is_none());
        assert_eq!(app.focus(), Focus::Sidebar);
    }

    #[test]
    fn form_focus_refused_on_welcome() {
        let (mut app, _rt, _rx) = make_app();
        app.set_focus(Focus::Form);
        assert_eq!(app.focus(), Focus::Sidebar);
    }

    #[test]
    fn navigating_away_and_back_resets_form() {
        let (mut app, _rt, _rx) = make_app();
        app.navigate("/json-formatter");
        app.dispatch_form(FormIntent::InsertText("{}".to_string()));
        app.navigate("/base64-encoder");
        app.navigate("/json-formatter");
        assert!(app.form().unwrap().is_idle());
    }

    #[test]
    fn reactivating_current_route_keeps_form() {
        let (mut app, _rt, _rx) = make_app();
        app.navigate("/json-formatter");
        app.dispatch_form(FormIntent::InsertText("{}".to_string()));
        app.navigate("/json-formatter");
        assert_eq!(app.form().unwrap().input(), "{}");
    }

    #[test]
    fn going_home_moves_focus_to_sidebar() {
        let (mut app, _rt, _rx) = make_app();
        app.navigate("/json-formatter");
        app.set_focus(Focus::Form);
        app.navigate_home();
        assert_eq!(app.focus(), Focus::Sidebar);
        assert!(app.form().is_none());
    }

    #[test]
    fn activate_index_is_one_based() {
        let (mut app, _rt, _rx) = make_app();
        assert!(!app.activate_index(0));
        assert!(!app.activate_index(4));
        assert!(app.activate_index(3));
        assert_eq!(app.content_view(), ContentView::Tool(ToolKind::Base64Codec));
    }

    #[test]
    fn cursor_activation_navigates() {
        let (mut app, _rt, _rx) = make_app();
        app.move_cursor(1);
        app.activate_cursor();
        assert_eq!(app.location(), "/json-formatter");
    }

    #[test]
    fn stale_result_after_navigation_is_discarded() {
        let (mut app, _rt, _rx) = make_app();
        app.navigate("/text-generator");
        app.dispatch_form(FormIntent::InsertText("hello".to_string()));
        app.submit();
        let token = app.form().unwrap().pending_token().unwrap();

        app.navigate("/json-formatter");
        app.navigate("/text-generator");
        app.on_generation_finished(token, Outcome::Success("late".to_string()));
        assert!(app.form().unwrap().is_idle());
    }

    #[test]
    fn tick_advances_spinner_only_while_pending() {
        let (mut app, _rt, _rx) = make_app();
        app.navigate("/text-generator");
        app.on_tick();
        assert_eq!(app.form().unwrap().phase(), &FormPhase::Idle);

        app.dispatch_form(FormIntent::InsertText("hello".to_string()));
        app.submit();
        app.on_tick();
        assert_eq!(app.form().unwrap().animation_tick(), 1);
    }

    #[test]
    fn paste_ignored_without_form_focus() {
        let (mut app, _rt, _rx) = make_app();
        app.navigate("/base64-encoder");
        app.on_paste("abc");
        assert_eq!(app.form().unwrap().input(), "");
        app.set_focus(Focus::Form);
        app.on_paste("abc");
        assert_eq!(app.form().unwrap().input(), "abc");
    }

    #[test]
    fn copy_without_output_sets_notice() {
        let (mut app, _rt, _rx) = make_app();
        app.navigate("/json-formatter");
        app.copy_output();
        assert_eq!(app.notice(), Some(NOTHING_TO_COPY));
    }
}
