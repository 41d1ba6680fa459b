use std::sync::Arc;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::config::AdminCredentials;
use crate::error::AppError;
use crate::i18n::{self, Language};
use crate::models::{AppContent, Collection, Item, NewItem, Theme, User, View};
use crate::security::constant_time_compare;
use crate::services::{Change, Chime, ContentAction, SilentChime, Toast, ToastSlot, reduce};
use crate::store::{PersistentStore, keys};

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deleted {
    Removed,
    /// The confirmation was declined; nothing changed.
    Cancelled,
}

/// Owns the session and the content aggregate for one process.
///
/// Every mutation updates the in-memory state first and then mirrors it to
/// the store before returning. The store is read once, in [`AppContext::load`].
pub struct AppContext {
    store: PersistentStore,
    admin_credentials: AdminCredentials,
    chime: Arc<dyn Chime>,

    theme: Theme,
    language: Language,
    user: Option<User>,
    visited: bool,
    is_admin: bool,
    admin_login_open: bool,
    active_view: View,
    /// The slug the view was selected by; differs from `active_view.slug()`
    /// only for `View::Unknown`.
    active_view_slug: String,
    toast: ToastSlot,

    content: AppContent,
}

impl AppContext {
    pub async fn load(store: PersistentStore, admin_credentials: AdminCredentials) -> Self {
        let theme = store.get(keys::THEME, Theme::default()).await;
        let language = store.get(keys::LANGUAGE, Language::default()).await;
        let user: Option<User> = store.get(keys::USER, None).await;
        let visited = store.get(keys::VISITED, false).await;
        let content = store.get(keys::CONTENT, AppContent::initial()).await;

        info!(
            "loaded context: theme={:?}, language={}, user={}, {} courses, {} posts",
            theme,
            language,
            user.as_ref().map(|u| u.name.as_str()).unwrap_or("<none>"),
            content.courses.len(),
            content.posts.len()
        );

        Self {
            store,
            admin_credentials,
            chime: Arc::new(SilentChime),
            theme,
            language,
            user,
            visited,
            is_admin: false,
            admin_login_open: false,
            active_view: View::default(),
            active_view_slug: View::default().slug().to_string(),
            toast: ToastSlot::default(),
            content,
        }
    }

    pub fn with_chime(mut self, chime: Arc<dyn Chime>) -> Self {
        self.chime = chime;
        self
    }

    // ==================== Accessors ====================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_admin_login_open(&self) -> bool {
        self.admin_login_open
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn active_view_slug(&self) -> &str {
        &self.active_view_slug
    }

    pub fn content(&self) -> &AppContent {
        &self.content
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast_at(Instant::now())
    }

    pub fn toast_at(&self, now: Instant) -> Option<&Toast> {
        self.toast.current_at(now)
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.language, key)
    }

    // ==================== Session ====================

    /// Remember `name` as the current user. No validation; a second call
    /// simply replaces the first.
    pub async fn login_user(&mut self, name: impl Into<String>) {
        let user = User { name: name.into() };
        info!("user logged in: {}", user.name);
        self.store.set(keys::USER, &user).await;
        self.user = Some(user);
    }

    /// Returns whether the credentials matched. On a mismatch nothing changes.
    pub fn login_admin(&mut self, username: &str, password: &str) -> bool {
        let username_ok = constant_time_compare(username, &self.admin_credentials.username);
        let password_ok = constant_time_compare(password, &self.admin_credentials.password);

        if username_ok && password_ok {
            self.is_admin = true;
            self.admin_login_open = false;
            info!("admin logged in");
            true
        } else {
            warn!("rejected admin login for {:?}", username);
            false
        }
    }

    /// Leaves the user session alone.
    pub fn logout_admin(&mut self) {
        if self.is_admin {
            info!("admin logged out");
        }
        self.is_admin = false;
    }

    pub fn set_admin_login_open(&mut self, open: bool) {
        self.admin_login_open = open;
    }

    pub async fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(keys::THEME, &self.theme).await;
        self.theme
    }

    pub async fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.store.set(keys::LANGUAGE, &self.language).await;
        self.language
    }

    pub fn set_active_view(&mut self, view: View) {
        self.active_view = view;
        self.active_view_slug = view.slug().to_string();
    }

    /// Select a view by slug. Unrecognized slugs select `View::Unknown` and
    /// are kept for its placeholder.
    pub fn select_view(&mut self, slug: &str) {
        self.active_view = View::from_slug(slug);
        self.active_view_slug = slug.to_string();
    }

    /// True only the first time it is called against a given store.
    pub async fn take_first_visit(&mut self) -> bool {
        if self.visited {
            return false;
        }
        self.visited = true;
        self.store.set(keys::VISITED, &true).await;
        true
    }

    pub fn show_toast(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.toast.show(title, message, Instant::now());
        if let Err(e) = self.chime.play() {
            warn!("notification sound failed: {}", e);
        }
    }

    // ==================== Content ====================

    /// Replace the content aggregate with `updater(previous)` and persist it.
    /// All content changes go through here.
    pub async fn set_data<F>(&mut self, updater: F)
    where
        F: FnOnce(&AppContent) -> AppContent,
    {
        self.content = updater(&self.content);
        self.store.set(keys::CONTENT, &self.content).await;
    }

    pub async fn dispatch(&mut self, action: ContentAction) -> Result<Change, AppError> {
        let (next, change) = reduce(&self.content, action)?;
        self.set_data(move |_| next).await;
        Ok(change)
    }

    /// Add an item and return its new id.
    pub async fn add(&mut self, item: NewItem) -> Result<String, AppError> {
        match self.dispatch(ContentAction::Add(item)).await? {
            Change::Added { id, .. } => Ok(id),
            _ => Err(AppError::InternalServerError),
        }
    }

    pub async fn update(&mut self, item: Item) -> Result<(), AppError> {
        self.dispatch(ContentAction::Update(item)).await?;
        Ok(())
    }

    /// Delete after `confirm` agrees. `confirm` is asked before anything else.
    pub async fn delete<F>(&mut self, collection: Collection, id: &str, confirm: F) -> Result<Deleted, AppError>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return Ok(Deleted::Cancelled);
        }
        self.dispatch(ContentAction::Delete {
            collection,
            id: id.to_string(),
        })
        .await?;
        Ok(Deleted::Removed)
    }

    pub async fn set_history(&mut self, text: impl Into<String>) -> Result<(), AppError> {
        self.dispatch(ContentAction::SetHistory(text.into())).await?;
        Ok(())
    }

    pub async fn set_contact(&mut self, number: impl Into<String>) -> Result<(), AppError> {
        self.dispatch(ContentAction::SetContact(number.into())).await?;
        Ok(())
    }
}
