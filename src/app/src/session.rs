use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::catalog;
use crate::catalog::Event;
use crate::host_form::HostForm;
use crate::host_form::SignInGate;
use crate::host_form::SubmitEvents;
use crate::theme::ThemeHost;
use crate::theme::ThemeStore;
use crate::toast;
use crate::toast::Toasts;

/// One browsing session: the catalog with its search inputs, the theme,
/// the hosting form and the notification area. Everything is owned by one
/// logical task; the only deferred work (toast dismissal) comes back in
/// through the channel and is applied by [`Session::drain`].
pub struct Session {
    pub theme: ThemeStore,
    pub form: HostForm,
    pub toasts: Toasts,
    catalog: Vec<Event>,
    query: String,
    category: String,
    rx: UnboundedReceiver<toast::Dismiss>,
}

impl Session {
    pub fn new(host: Box<dyn ThemeHost>) -> Self {
        Session::with_catalog(catalog::builtin(), host, toast::DISMISS_AFTER)
    }

    pub fn with_catalog(
        catalog: Vec<Event>,
        host: Box<dyn ThemeHost>,
        dismiss_after: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Session {
            theme: ThemeStore::new(host),
            form: HostForm::new(),
            toasts: Toasts::new(tx, dismiss_after),
            catalog,
            query: String::new(),
            category: catalog::ALL_CATEGORIES.to_string(),
            rx,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Exactly one category is active at a time; selecting replaces the
    /// previous choice.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn categories(&self) -> Vec<String> {
        catalog::categories(&self.catalog)
    }

    /// The displayed subset, always derived fresh from the full catalog.
    pub fn matches(&self) -> Vec<Event> {
        catalog::filter(&self.catalog, &self.query, &self.category)
    }

    pub fn open_host_form(&mut self, gate: &dyn SignInGate) -> bool {
        self.form.open(gate)
    }

    pub async fn submit_host_form(&mut self, submitter: &dyn SubmitEvents) -> bool {
        self.form.submit(submitter, &mut self.toasts).await
    }

    /// A pointer interaction outside the open form dismisses it, same as
    /// cancelling.
    pub fn outside_interaction(&mut self) {
        self.form.cancel();
    }

    /// Applies deferred callbacks that came due since the last tick.
    pub fn drain(&mut self) {
        while let Ok(token) = self.rx.try_recv() {
            self.toasts.dismiss(token);
        }
    }
}
