//! The per-render session: theme, mobile-CSS buffer, and classname counter,
//! plus the scoped ambient lookup the component layer renders through.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::engine::{ClassnameCounter, Decomposition, Props, decompose_props, explode};
use crate::theme::{Theme, create_theme};

const DEFAULT_BREAKPOINT: &str = "600px";

/// Errors surfaced by the component layer.
#[derive(Error, Debug)]
pub enum Error {
    /// A component was rendered without an active session.
    #[error(
        "a component was rendered outside of an active session. Wrap your render pass in `session::provide`."
    )]
    MissingSession,
}

/// Options for creating a [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Partial theme layered over the built-in preset.
    pub theme: Option<Theme>,
    /// Media-query breakpoint for the mobile stylesheet, `600px` by default.
    pub breakpoint: Option<String>,
}

#[derive(Debug)]
struct SessionState {
    css: String,
    ids: ClassnameCounter,
}

/// One rendering pass: owns the theme, the pending mobile stylesheet, and
/// the classname counter.
///
/// Sessions are cheap-clone handles over shared state, and deliberately not
/// `Send`: one session belongs to one single-threaded render pass, and
/// independent renders create independent sessions.
#[derive(Debug, Clone)]
pub struct Session {
    theme: Rc<Theme>,
    breakpoint: Rc<str>,
    state: Rc<RefCell<SessionState>>,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let theme = create_theme(options.theme.unwrap_or_default());
        let breakpoint = options.breakpoint.unwrap_or_else(|| DEFAULT_BREAKPOINT.into());
        let state = SessionState {
            css: media_prelude(&breakpoint),
            ids: ClassnameCounter::new(),
        };
        Self {
            theme: Rc::new(theme),
            breakpoint: breakpoint.into(),
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// The active theme, complete after preset merging.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Appends a CSS fragment to the pending mobile stylesheet.
    pub fn add_mobile_css(&self, fragment: &str) {
        self.state.borrow_mut().css.push_str(fragment);
    }

    /// Returns the pending mobile stylesheet closed with `}` and resets the
    /// buffer, leaving the session ready for the next flush cycle.
    ///
    /// Flushing is destructive: content is never returned twice, and a flush
    /// with nothing pending yields the empty media-query shell.
    pub fn flush_mobile_css(&self) -> String {
        let mut state = self.state.borrow_mut();
        let mut sheet = std::mem::replace(&mut state.css, media_prelude(&self.breakpoint));
        sheet.push('}');
        sheet
    }

    /// Expands and decomposes `props`, collecting any produced mobile CSS
    /// into the session buffer.
    pub fn decompose(&self, props: &Props) -> Decomposition {
        let expanded = explode(props, &self.theme);
        let mut state = self.state.borrow_mut();
        let result = decompose_props(&expanded, &self.theme, &mut state.ids);
        state.css.push_str(&result.css);
        result
    }

    /// Allocates the next unique classname for this session.
    pub fn next_classname(&self) -> String {
        self.state.borrow_mut().ids.allocate()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

fn media_prelude(breakpoint: &str) -> String {
    format!("@media (max-width: {breakpoint}) {{")
}

thread_local! {
    static ACTIVE: RefCell<Vec<Session>> = const { RefCell::new(Vec::new()) };
}

/// Runs `render` with `session` as the ambient session for every component
/// rendered inside it. Nestable; the innermost session wins.
pub fn provide<T>(session: &Session, render: impl FnOnce() -> T) -> T {
    struct Reset;
    impl Drop for Reset {
        fn drop(&mut self) {
            ACTIVE.with(|stack| {
                stack.borrow_mut().pop();
            });
        }
    }

    ACTIVE.with(|stack| stack.borrow_mut().push(session.clone()));
    let _reset = Reset;
    render()
}

/// The innermost session provided on this thread.
pub fn active() -> Result<Session, Error> {
    ACTIVE
        .with(|stack| stack.borrow().last().cloned())
        .ok_or(Error::MissingSession)
}
