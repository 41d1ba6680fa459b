//! Maps the context to a screen model.
//!
//! Rendering is a pure read of [`AppContext`]: nothing here mutates state.
//! The resulting [`Screen`] serializes to JSON for whatever client draws it.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use tokio::time::Instant;

use crate::context::AppContext;
use crate::i18n::Language;
use crate::models::{AppContent, Collection, Theme, View};
use crate::services::{ItemForm, Toast};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Screen {
    Login(LoginScreen),
    Main(MainScreen),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginScreen {
    pub theme: Theme,
    pub language: Language,
    pub title: String,
    pub prompt: String,
    pub placeholder: String,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainScreen {
    pub header: Header,
    pub title: String,
    pub body: ViewBody,
    /// Drawn on top of `body`, never instead of it.
    pub admin_panel: Option<AdminPanel>,
    pub admin_login: AdminLoginModal,
    pub toast: Option<Toast>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub app_name: String,
    pub nav: Vec<NavItem>,
    pub theme: Theme,
    pub language: Language,
    pub language_label: &'static str,
    pub show_admin_login: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub view: View,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViewBody {
    Courses { cards: Vec<CourseCard> },
    Posts { cards: Vec<PostCard> },
    Teachers { cards: Vec<TeacherCard> },
    Schedule { rows: Vec<ScheduleRow>, contact: String },
    History { text: String },
    Placeholder { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub link_label: String,
    pub link_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: String,
    pub content: String,
    pub image_url: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherCard {
    pub id: String,
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub id: String,
    pub day: String,
    pub time: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPanel {
    pub title: String,
    pub intro: String,
    pub logout_label: String,
    pub save_label: String,
    pub sections: Vec<AdminSection>,
    pub history: AdminField,
    pub contact: AdminField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSection {
    pub collection: Collection,
    pub heading: String,
    pub fields: Vec<AdminField>,
    pub items: Vec<AdminRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminField {
    pub name: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminRow {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginModal {
    pub open: bool,
    pub title: String,
    pub username_label: String,
    pub password_label: String,
    pub submit_label: String,
}

pub fn render(ctx: &AppContext) -> Screen {
    render_at(ctx, Instant::now())
}

pub fn render_at(ctx: &AppContext, now: Instant) -> Screen {
    if ctx.user().is_none() {
        return Screen::Login(LoginScreen {
            theme: ctx.theme(),
            language: ctx.language(),
            title: ctx.t("welcomeMessage").to_string(),
            prompt: ctx.t("enterUsername").to_string(),
            placeholder: ctx.t("username").to_string(),
            submit_label: ctx.t("enter").to_string(),
        });
    }

    let view = ctx.active_view();
    Screen::Main(MainScreen {
        header: render_header(ctx),
        title: ctx.t(ctx.active_view_slug()).to_string(),
        body: render_view(ctx, view),
        admin_panel: ctx.is_admin().then(|| render_admin_panel(ctx)),
        admin_login: AdminLoginModal {
            open: ctx.is_admin_login_open(),
            title: ctx.t("adminLogin").to_string(),
            username_label: ctx.t("username").to_string(),
            password_label: ctx.t("password").to_string(),
            submit_label: ctx.t("login").to_string(),
        },
        toast: ctx.toast_at(now).cloned(),
    })
}

fn render_header(ctx: &AppContext) -> Header {
    let active = ctx.active_view();
    Header {
        app_name: ctx.t("appName").to_string(),
        nav: View::NAV
            .into_iter()
            .map(|view| NavItem {
                view,
                label: ctx.t(view.slug()).to_string(),
                active: view == active,
            })
            .collect(),
        theme: ctx.theme(),
        language: ctx.language(),
        language_label: ctx.language().short_label(),
        show_admin_login: !ctx.is_admin(),
    }
}

/// The body for `view`. Every view is reachable at any time.
pub fn render_view(ctx: &AppContext, view: View) -> ViewBody {
    let content = ctx.content();
    match view {
        View::Courses => ViewBody::Courses {
            cards: content
                .courses
                .iter()
                .map(|course| CourseCard {
                    id: course.id.clone(),
                    title: course.title.clone(),
                    subtitle: format!("{} - {}", course.teacher, display_date(&course.date)),
                    description: course.description.clone(),
                    link_label: ctx.t("viewOnTelegram").to_string(),
                    link_href: format!("/courses/{}/link", course.id),
                })
                .collect(),
        },
        View::Posts => ViewBody::Posts {
            cards: content
                .posts
                .iter()
                .map(|post| PostCard {
                    id: post.id.clone(),
                    content: post.content.clone(),
                    image_url: post.image_url.clone(),
                    date: display_timestamp(&post.date),
                })
                .collect(),
        },
        View::Teachers => ViewBody::Teachers {
            cards: content
                .teachers
                .iter()
                .map(|teacher| TeacherCard {
                    id: teacher.id.clone(),
                    name: teacher.name.clone(),
                    bio: teacher.bio.clone(),
                })
                .collect(),
        },
        View::Schedule => ViewBody::Schedule {
            rows: content
                .schedule
                .iter()
                .map(|item| ScheduleRow {
                    id: item.id.clone(),
                    day: item.day.clone(),
                    time: item.time.clone(),
                    topic: item.topic.clone(),
                })
                .collect(),
            contact: content.contact_viber.clone(),
        },
        View::History => ViewBody::History {
            text: content.course_history.clone(),
        },
        View::Unknown => ViewBody::Placeholder {
            message: format!("{} {}", ctx.t(ctx.active_view_slug()), ctx.t("comingSoon")),
        },
    }
}

fn render_admin_panel(ctx: &AppContext) -> AdminPanel {
    let content = ctx.content();
    let sections = Collection::ALL
        .into_iter()
        .map(|collection| AdminSection {
            collection,
            heading: ctx.t(section_heading_key(collection)).to_string(),
            fields: ItemForm::field_names(collection)
                .iter()
                .map(|name| AdminField {
                    name: name.to_string(),
                    label: ctx.t(name).to_string(),
                    value: String::new(),
                })
                .collect(),
            items: admin_rows(content, collection),
        })
        .collect();

    AdminPanel {
        title: ctx.t("adminDashboard").to_string(),
        intro: ctx.t("manageContent").to_string(),
        logout_label: ctx.t("logout").to_string(),
        save_label: ctx.t("saveChanges").to_string(),
        sections,
        history: AdminField {
            name: "courseHistory".to_string(),
            label: ctx.t("history").to_string(),
            value: content.course_history.clone(),
        },
        contact: AdminField {
            name: "contactViber".to_string(),
            label: ctx.t("viberNumber").to_string(),
            value: content.contact_viber.clone(),
        },
    }
}

fn section_heading_key(collection: Collection) -> &'static str {
    match collection {
        Collection::Courses => "manageCourses",
        Collection::Posts => "managePosts",
        Collection::Teachers => "manageTeachers",
        Collection::Schedule => "manageSchedule",
    }
}

fn admin_rows(content: &AppContent, collection: Collection) -> Vec<AdminRow> {
    match collection {
        Collection::Courses => content
            .courses
            .iter()
            .map(|c| AdminRow { id: c.id.clone(), label: c.title.clone() })
            .collect(),
        Collection::Posts => content
            .posts
            .iter()
            .map(|p| AdminRow { id: p.id.clone(), label: excerpt(&p.content, 40) })
            .collect(),
        Collection::Teachers => content
            .teachers
            .iter()
            .map(|t| AdminRow { id: t.id.clone(), label: t.name.clone() })
            .collect(),
        Collection::Schedule => content
            .schedule
            .iter()
            .map(|s| AdminRow {
                id: s.id.clone(),
                label: format!("{} {} {}", s.day, s.time, s.topic),
            })
            .collect(),
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// `2024-06-01` → `1 Jun 2024`. Anything unparseable is shown as stored.
fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%-d %b %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn display_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%-d %b %Y %H:%M").to_string();
    }
    display_date(raw)
}
